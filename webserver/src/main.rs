//! QuickBiteRush site entry point

use std::path::PathBuf;

use clap::Parser;
use shared::logging;

use quickbite_web::{WebServer, WebServerConfig, WebServerResult};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "quickbite")]
#[command(about = "QuickBiteRush marketing site and business dashboard")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for HTTP server
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Serve /static from this directory instead of the embedded assets
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Seconds before redirecting to the dashboard after registration
    #[arg(long, default_value = "2")]
    redirect_delay_secs: u64,
}

impl From<Args> for WebServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            static_dir: args.static_dir,
            redirect_delay_secs: args.redirect_delay_secs,
            log_level: args.log_level,
        }
    }
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    let args = Args::parse();
    logging::init_tracing_with_level(Some(&args.log_level));

    let config = WebServerConfig::from(args);
    config.validate()?;

    let webserver = WebServer::with_defaults(config)?;
    webserver.run().await?;

    logging::log_shutdown("WebServer stopped gracefully");
    Ok(())
}
