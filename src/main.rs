//! CLI entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "site-content")]
#[command(version)]
#[command(about = "Inspect and validate the content sources of a static site", long_about = None)]
struct Cli {
    /// Set the site base directory (defaults to the current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List loaded content (posts, projects, team, tags, categories)
    List {
        /// Type of content to list
        #[arg(default_value = "posts")]
        r#type: String,
    },

    /// Load every source and report content health
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "site_content=debug,info"
    } else {
        "site_content=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());
    let store = site_content::Site::new(&base_dir)?.into_store();

    match cli.command {
        Commands::List { r#type } => {
            site_content::commands::list::run(&store, &r#type)?;
        }
        Commands::Check => {
            site_content::commands::check::run(&store)?;
        }
    }

    Ok(())
}
