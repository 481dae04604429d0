mod common;

use anyhow::Result;
use assert_cmd::Command;
use common::TestDir;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_stat_command() -> Result<()> {
    let dir = TestDir::new()?;
    dir.create_png("a.png", 2, 2)?;
    dir.create_file("b.txt", b"hello")?;
    dir.create_file("c.jpg", b"jpeg-ish")?;

    dir.cmd()?
        .arg("stat")
        .arg(&dir.scan_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Statistiques des fichiers du répertoire :",
        ))
        .stdout(predicate::str::contains("Total de fichiers : 3"))
        .stdout(predicate::str::contains("Total de fichiers image : 2"))
        .stdout(predicate::str::contains("Nombre d'images PNG : 1"))
        .stdout(predicate::str::contains("Nombre d'images JPEG : 1"))
        .stdout(predicate::str::contains("Nombre d'images WEBP : 0"));

    Ok(())
}

#[test]
fn test_list_and_search() -> Result<()> {
    let dir = TestDir::new()?;
    dir.create_png("Plage.png", 1, 1)?;
    dir.create_file("plage.txt", b"")?;
    dir.create_file("montagne.webp", b"")?;

    dir.cmd()?
        .arg("list")
        .arg(&dir.scan_dir)
        .assert()
        .success()
        .stdout("Liste des fichiers images :\nPlage.png\nmontagne.webp\n");

    dir.cmd()?
        .arg("search")
        .arg(&dir.scan_dir)
        .arg("PLAGE")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Plage.png existe dans le répertoire.",
        ))
        .stdout(predicate::str::contains("plage.txt").not());

    dir.cmd()?
        .arg("search")
        .arg(&dir.scan_dir)
        .arg("forêt")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Aucune image trouvée contenant le mot-clé \"forêt\".",
        ));

    Ok(())
}

#[test]
fn test_save_then_compare_without_changes() -> Result<()> {
    let dir = TestDir::new()?;
    dir.create_file("a.txt", b"a")?;

    dir.cmd()?
        .arg("save")
        .arg(&dir.scan_dir)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Snapshot enregistré dans : "));

    assert_eq!(dir.snapshots()?.len(), 1);

    dir.cmd()?
        .arg("compare")
        .arg(&dir.scan_dir)
        .assert()
        .success()
        .stdout("Aucun changement détecté.\n");

    Ok(())
}

#[test]
fn test_compare_reports_added_and_removed() -> Result<()> {
    let dir = TestDir::new()?;
    for name in ["x", "y", "z"] {
        dir.create_file(name, name.as_bytes())?;
    }
    dir.cmd()?.arg("save").arg(&dir.scan_dir).assert().success();

    fs::remove_file(dir.scan_dir.join("y"))?;
    dir.create_file("w", b"w")?;

    let expected = format!(
        "Fichier supprimé : {}\nFichier ajouté : {}\n",
        dir.key("y")?,
        dir.key("w")?
    );
    dir.cmd()?
        .arg("compare")
        .arg(&dir.scan_dir)
        .assert()
        .success()
        .stdout(expected);

    Ok(())
}

#[test]
fn test_save_to_explicit_output() -> Result<()> {
    let dir = TestDir::new()?;
    let dest = dir.path().join("archive");

    dir.cmd()?
        .arg("save")
        .arg(&dir.scan_dir)
        .arg("-o")
        .arg(&dest)
        .assert()
        .success();

    assert_eq!(fs::read_dir(&dest)?.count(), 1);
    assert!(dir.snapshots()?.is_empty());
    Ok(())
}

#[test]
fn test_compare_with_explicit_empty_snapshot() -> Result<()> {
    let dir = TestDir::new()?;
    dir.create_file("only", b"")?;
    let empty = dir.path().join("empty.txt");
    fs::write(&empty, "")?;

    dir.cmd()?
        .arg("compare")
        .arg(&dir.scan_dir)
        .arg(&empty)
        .assert()
        .success()
        .stdout(format!("Fichier ajouté : {}\n", dir.key("only")?));

    Ok(())
}

#[test]
fn test_compare_strict_rejects_garbage() -> Result<()> {
    let dir = TestDir::new()?;
    let broken = dir.path().join("broken.txt");
    fs::write(
        &broken,
        "Snapshot du répertoire : /nowhere\n\nDétails des fichiers :\n???\n",
    )?;

    dir.cmd()?
        .arg("compare")
        .arg(&dir.scan_dir)
        .arg(&broken)
        .assert()
        .success()
        .stdout("Aucun changement détecté.\n");

    dir.cmd()?
        .arg("compare")
        .arg(&dir.scan_dir)
        .arg(&broken)
        .arg("--strict")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("only partially parsed"));

    Ok(())
}

#[test]
fn test_compare_without_any_snapshot_fails() -> Result<()> {
    let dir = TestDir::new()?;

    dir.cmd()?
        .arg("compare")
        .arg(&dir.scan_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No snapshot found"));

    Ok(())
}

#[test]
fn test_missing_directory_fails() -> Result<()> {
    let dir = TestDir::new()?;

    dir.cmd()?
        .arg("stat")
        .arg(dir.path().join("missing"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Directory not found"));

    Ok(())
}

#[test]
fn test_info_command() -> Result<()> {
    let dir = TestDir::new()?;
    let png = dir.create_png("pixel.png", 4, 3)?;
    let txt = dir.create_file("notes.txt", b"abc")?;

    dir.cmd()?
        .arg("info")
        .arg(&png)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nom : pixel.png"))
        .stdout(predicate::str::contains("Métadonnées de l'image :"))
        .stdout(predicate::str::contains("Dimensions : 4 x 3"))
        .stdout(predicate::str::contains("Coordonnées GPS : Non disponible"));

    dir.cmd()?
        .arg("info")
        .arg(&txt)
        .assert()
        .success()
        .stdout(predicate::str::contains("Taille : 3 octets"))
        .stdout(predicate::str::contains("Métadonnées").not());

    Ok(())
}

#[test]
fn test_config_set_and_get() -> Result<()> {
    let dir = TestDir::new()?;

    dir.cmd()?
        .args(["config", "snapshot.strict", "true"])
        .assert()
        .success();

    dir.cmd()?
        .args(["config", "snapshot.strict"])
        .assert()
        .success()
        .stdout("true\n");

    dir.cmd()?
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("snapshot.strict = true"))
        .stdout(predicate::str::contains("scan.probe_dimensions = true"));

    dir.cmd()?
        .args(["config", "core.repo_path"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));

    Ok(())
}

#[test]
fn test_config_flag_overrides_environment() -> Result<()> {
    let dir = TestDir::new()?;
    let other = dir.path().join("other.toml");

    dir.cmd()?
        .arg("--config")
        .arg(&other)
        .args(["config", "scan.follow_symlinks", "true"])
        .assert()
        .success();

    assert!(fs::read_to_string(&other)?.contains("follow_symlinks = true"));
    assert!(!fs::read_to_string(&dir.config_path)?.contains("follow_symlinks = true"));
    Ok(())
}

#[test]
fn test_invalid_config_file_fails() -> Result<()> {
    let dir = TestDir::new()?;
    fs::write(&dir.config_path, "[snapshot]\ndirectory = \"\"\n")?;

    dir.cmd()?
        .arg("stat")
        .arg(&dir.scan_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));

    Ok(())
}

#[test]
fn test_completion_generation() -> Result<()> {
    Command::cargo_bin("dirsnap")?
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dirsnap"));

    Ok(())
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    Command::cargo_bin("dirsnap")?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("save"));

    Ok(())
}
