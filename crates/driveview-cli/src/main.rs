mod commands;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use driveview_router::{config::DEFAULT_CONFIG_FILE, routes, RouteTable, RouterConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "driveview")]
#[command(version, about = "DriveView CLI - resolve file browser routes", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the route table in declaration order
    Routes,

    /// Resolve paths and print each match as JSON
    Resolve {
        /// Paths as the browser sees them (base path included)
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Push paths through a navigator, then settle pending view loads
    Navigate {
        /// Application paths, in navigation order
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Generate the URL of a named route
    Href {
        /// Route name
        name: String,

        /// Parameters as KEY=VALUE; a value containing '/' fills a trailing capture
        params: Vec<String>,
    },
}

/// Everything a command needs, built from the configuration file
pub struct App {
    pub config: RouterConfig,
    pub table: RouteTable,
}

impl App {
    fn load(path: &Path) -> Result<Self> {
        let config = RouterConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?
            .with_env();
        let table = routes::file_browser(config.routing.case_insensitive)
            .context("failed to build the route table")?;
        Ok(Self { config, table })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("driveview=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let app = App::load(&cli.config)?;

    // Execute command
    match cli.command {
        Commands::Routes => commands::routes::execute(&app),
        Commands::Resolve { paths } => commands::resolve::execute(&app, &paths),
        Commands::Navigate { paths } => commands::navigate::execute(app, &paths).await,
        Commands::Href { name, params } => commands::href::execute(&app, &name, &params),
    }
}
