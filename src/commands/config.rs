use crate::DirsnapContext;
use crate::output;
use anyhow::Result;
use std::io::{self, Write};

/// Execute config command to get/set configuration values
///
/// With no key (or `--list`) every value is printed. With a key only, its
/// value is printed. With a key and a value, the value is set and the
/// configuration file is written.
///
/// # Errors
///
/// Returns an error if:
/// - The key is unknown or the value is invalid for it
/// - Failed to save configuration
pub fn execute(
    ctx: &mut DirsnapContext,
    key: Option<&str>,
    value: Option<&str>,
    list: bool,
) -> Result<()> {
    let key = match key {
        Some(key) if !list => key,
        _ => {
            let mut out = io::stdout().lock();
            write_all(ctx, &mut out)?;
            return Ok(());
        }
    };

    if let Some(value) = value {
        ctx.config.set(key, value)?;
        ctx.config.save(&ctx.config_path)?;
        output::success(&format!("Set {key} = {value}"));
    } else {
        let value = ctx
            .config
            .get(key)
            .ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {key}"))?;
        println!("{value}");
    }

    Ok(())
}

/// Write every `key = value` pair
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_all(ctx: &DirsnapContext, out: &mut dyn Write) -> io::Result<()> {
    for (key, value) in ctx.config.entries() {
        writeln!(out, "{key} = {value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_utils::fixtures::TestWorkspace;

    #[test]
    fn test_set_persists_value() -> Result<()> {
        let mut ws = TestWorkspace::new()?;

        execute(&mut ws.context, Some("snapshot.strict"), Some("true"), false)?;

        assert!(ws.context.config.snapshot.strict);
        let reloaded = Config::load(&ws.context.config_path)?;
        assert!(reloaded.snapshot.strict);
        Ok(())
    }

    #[test]
    fn test_invalid_value_is_not_saved() -> Result<()> {
        let mut ws = TestWorkspace::new()?;

        let result = execute(&mut ws.context, Some("scan.follow_symlinks"), Some("often"), false);

        assert!(result.is_err());
        assert!(!ws.context.config_path.exists());
        Ok(())
    }

    #[test]
    fn test_get_unknown_key() -> Result<()> {
        let mut ws = TestWorkspace::new()?;
        let err = execute(&mut ws.context, Some("core.repo_path"), None, false).unwrap_err();
        assert!(err.to_string().contains("Unknown configuration key"));
        Ok(())
    }

    #[test]
    fn test_list_all_values() -> Result<()> {
        let ws = TestWorkspace::new()?;
        let mut buf = Vec::new();
        write_all(&ws.context, &mut buf)?;
        let text = String::from_utf8(buf)?;

        assert_eq!(text.lines().count(), crate::config::KEYS.len());
        assert!(text.contains("scan.probe_dimensions = true\n"));
        Ok(())
    }
}
