//! energy-viz CLI
//!
//! - `serve` (default): load the dataset and serve the page
//! - `render`: write the page HTML to a file or stdout
//! - `check`: load and validate the dataset, print a summary
//! - `config`: print the default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use energy_viz::config::{generate_default_config, Config, LoggingConfig};
use energy_viz::{data, serve, AppState};

#[derive(Parser)]
#[command(name = "energy-viz")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "AI growth vs data center energy consumption, as a web page")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// CSV data file, overrides config
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the page over HTTP
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Render the page to HTML
    Render {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate the dataset and print a summary
    Check,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Resolution only collects diagnostics; they are logged once tracing is up
    let resolved = Config::resolve(cli.config.as_deref())?;
    init_tracing(&resolved.config.logging);
    resolved.log();

    let mut config = resolved.config;
    if let Some(path) = cli.data {
        config.data.path = path;
    }

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    }) {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            run_server(config).await?;
        }

        Commands::Render { output } => {
            let state = AppState::from_config(&config)?;
            let html = state.page.compose(&state.dataset)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("writing {}", path.display()))?;
                    tracing::info!("Wrote page to {}", path.display());
                }
                None => print!("{}", html),
            }
        }

        Commands::Check => {
            let dataset = data::load_path(&config.data.path)?;

            println!("{}: {} records", config.data.path.display(), dataset.len());
            for r in dataset.records() {
                println!(
                    "  {}  {:>8.1} TWh  {:>6} x",
                    r.year, r.electricity_twh, r.ai_compute_index
                );
            }
            println!(
                "Electricity {:+.1}% ({} -> {}), compute {:.1}x per year",
                dataset.electricity_growth_pct(),
                dataset.first().year,
                dataset.last().year,
                dataset.compute_growth_factor()
            );
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    tracing::info!("energy-viz v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data file: {:?}", config.data.path);

    // Load before binding: a missing or malformed file aborts startup
    let state = AppState::from_config(&config)
        .with_context(|| format!("loading {}", config.data.path.display()))?;
    tracing::info!(
        records = state.dataset.len(),
        reload_per_request = config.data.reload_per_request,
        "Dataset loaded"
    );

    serve(state, &config.server).await?;
    Ok(())
}

/// Initialize logging from config; `RUST_LOG` wins when set
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("energy_viz={},tower_http={}", logging.level, logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
