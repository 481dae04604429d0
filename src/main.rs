use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{Generator, generate};
use colored::Colorize;
use dirsnap::cli::{Cli, Commands};
use dirsnap::output::{self, Verbosity};
use dirsnap::{DirsnapContext, commands};
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "DIRSNAP_LOG";

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    output::set_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose));
    init_tracing(cli.verbose);

    // Completion does not need a configuration
    if let Commands::Completion { shell } = cli.command {
        print_completions(shell, &mut Cli::command());
        return Ok(());
    }

    let mut ctx = match cli.config {
        Some(path) => DirsnapContext::new_explicit(path)?,
        None => DirsnapContext::new()?,
    };

    match cli.command {
        Commands::Stat { dir } => commands::stat::execute(&ctx, &dir)?,
        Commands::List { dir } => commands::list::execute(&ctx, &dir)?,
        Commands::Search { dir, keyword } => commands::search::execute(&ctx, &dir, &keyword)?,
        Commands::Save { dir, output } => {
            commands::save::execute(&ctx, &dir, output.as_deref())?;
        }
        Commands::Compare {
            dir,
            snapshot,
            strict,
        } => {
            commands::compare::execute(&ctx, &dir, snapshot.as_deref(), strict)?;
        }
        Commands::Info { file } => commands::info::execute(&ctx, &file)?,
        Commands::Config { key, value, list } => {
            commands::config::execute(&mut ctx, key.as_deref(), value.as_deref(), list)?;
        }
        Commands::Completion { .. } => {}
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn print_completions<G: Generator>(g: G, cmd: &mut clap::Command) {
    generate(g, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
