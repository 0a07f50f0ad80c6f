//! Huashan Guide server and route tooling.
//!
//! # Architecture Overview
//!
//! ```text
//!   config.toml ──► AppConfig ──► Router (route table, history, options)
//!                                   │
//!   Browser request                 ▼
//!   ───────────────► http server ──► resolve path ──► render page shell
//!                    (request id,        │                 │
//!                     trace, timeout)    └─ no route ──► 404, empty shell
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use huashan_guide::config::{self, AppConfig};
use huashan_guide::lifecycle::{startup, Shutdown};
use huashan_guide::observability::logging;
use huashan_guide::routing::{LocationError, Route, Router};

#[derive(Parser)]
#[command(name = "huashan-guide")]
#[command(about = "Serve the Huashan guide pages and inspect their routes", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true, env = "HUASHAN_GUIDE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Override server.bind_address
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Print the route table
    Routes {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show which view an href resolves to
    Resolve {
        /// Path or URL, e.g. "/map?layer=trails"
        href: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = config::load_or_default(cli.config.as_deref())?;
    if let Some(Commands::Serve { bind: Some(bind) }) = &cli.command {
        config.server.bind_address = bind.clone();
        config::validation::validate_config(&config).map_err(config::ConfigError::Validation)?;
    }

    logging::init_logging(&config.observability)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "huashan-guide starting");

    match cli.command.unwrap_or(Commands::Serve { bind: None }) {
        Commands::Serve { .. } => serve(config).await,
        Commands::Routes { json } => print_routes(&config, json),
        Commands::Resolve { href } => resolve(&config, &href),
    }
}

async fn serve(config: AppConfig) -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing::info!(
        bind_address = %config.server.bind_address,
        request_timeout_secs = config.server.request_timeout_secs,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    startup::serve(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(ExitCode::SUCCESS)
}

fn print_routes(config: &AppConfig, json: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let router = Router::from_config(&config.router);
    let routes: &[Route] = router.table().routes();

    if json {
        println!("{}", serde_json::to_string_pretty(routes)?);
    } else {
        for route in routes {
            let href = router.history().href(&route.path);
            println!("{:<12} {:<10} {}", route.path, route.view, href);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn resolve(config: &AppConfig, href: &str) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let router = Router::from_config(&config.router);

    match router.resolve_href(href) {
        Ok(resolution) => match resolution.route {
            Some(route) => {
                println!("{} -> {} ({})", resolution.location, route.view, route.path);
                Ok(ExitCode::SUCCESS)
            }
            None => {
                println!("{} -> no route", resolution.location);
                Ok(ExitCode::FAILURE)
            }
        },
        Err(LocationError::OutsideBase(_)) => {
            println!("{href} is outside base {}", router.history().base());
            Ok(ExitCode::FAILURE)
        }
        Err(err) => {
            println!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
