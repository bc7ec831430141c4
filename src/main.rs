use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "scope-cheatsheet")]
#[command(about = "Print the scope selector cheatsheet for voice-driven code navigation")]
#[command(version)]
struct Cli {
    /// Path to the project (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the lists file (defaults to .scope-cheatsheet/lists.toml in the project)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the scopes section of the cheatsheet
    Scopes {
        /// Output JSON instead of Markdown
        #[arg(long)]
        json: bool,
    },

    /// Initialize a new .scope-cheatsheet/lists.toml file
    Init {
        /// Overwrite existing lists file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for the cheatsheet itself
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Some(Commands::Scopes { json }) => {
            cli::scopes::scopes_command(&work_dir, cli.config.as_deref(), json)?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(&work_dir, cli.config, force)?;
        }
        None => {
            cli::scopes::scopes_command(&work_dir, cli.config.as_deref(), false)?;
        }
    }

    Ok(())
}
