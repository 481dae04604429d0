//! xtask for dirsnap - build automation and tooling
//!
//! Generates man pages and shell completion files from the CLI definitions.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use dirsnap::cli::Cli;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "xtask", about = "Build automation for dirsnap")]
enum Task {
    /// Generate man pages from clap definitions
    GenerateManPages {
        /// Output directory for man pages
        #[arg(short, long, default_value = "man")]
        output: PathBuf,
    },

    /// Generate completion scripts for every supported shell
    GenerateCompletions {
        /// Output directory for completion scripts
        #[arg(short, long, default_value = "completions")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    match Task::parse() {
        Task::GenerateManPages { output } => generate_man_pages(&output),
        Task::GenerateCompletions { output } => generate_completions(&output),
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create directory: {}", dir.display()))
}

fn render_man(man: clap_mangen::Man, path: &Path) -> Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("Failed to create man page: {}", path.display()))?;
    man.render(&mut BufWriter::new(file))?;
    println!("✓ Generated: {}", path.display());
    Ok(())
}

fn generate_man_pages(output_dir: &Path) -> Result<()> {
    create_dir(output_dir)?;

    let cmd = Cli::command();
    let name = cmd.get_name().to_string();

    render_man(
        clap_mangen::Man::new(cmd.clone()),
        &output_dir.join(format!("{name}.1")),
    )?;

    // One page per subcommand, named the way man(1) expects: dirsnap-save.1
    for sub in cmd.get_subcommands().filter(|s| s.get_name() != "help") {
        let page = format!("{name}-{}", sub.get_name());
        render_man(
            clap_mangen::Man::new(sub.clone()).title(page.to_uppercase()),
            &output_dir.join(format!("{page}.1")),
        )?;
    }

    println!("\nTo view: man {}/{name}.1", output_dir.display());
    Ok(())
}

fn generate_completions(output_dir: &Path) -> Result<()> {
    create_dir(output_dir)?;

    let mut cmd = Cli::command();
    for shell in Shell::value_variants() {
        let path = clap_complete::generate_to(*shell, &mut cmd, "dirsnap", output_dir)
            .with_context(|| format!("Failed to generate {shell} completions"))?;
        println!("✓ Generated: {}", path.display());
    }
    Ok(())
}
