//! # Ferrous Mirror
//!
//! HTTP mirror and DNS diagnostics service for exercising client timeout and
//! error handling.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use ferrous_mirror_domain::CliOverrides;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser)]
#[command(name = "ferrous-mirror")]
#[command(version)]
#[command(about = "🦀 HTTP mirror and DNS diagnostics service")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Maximum number of mirror requests processed at once
    #[arg(long)]
    workers: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            bind_address: self.bind.clone(),
            web_port: self.web_port,
            worker_pool_size: self.workers,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);
    bootstrap::log_config_summary(cli.config.as_deref(), &config);

    info!("🦀 Ferrous Mirror Starting...");

    let shutdown = CancellationToken::new();
    let services = di::Services::build(&config, shutdown.clone());

    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    tokio::spawn(server::shutdown_signal(shutdown.clone()));

    let routes = ferrous_mirror_api::create_api_routes(services.state);
    let served = server::start_web_server(web_addr, routes, shutdown.clone()).await;

    shutdown.cancel();
    services.dispatcher.shutdown().await;

    served
}
