//! Page-params demo server
//!
//! Serves a generated catalog at `/api/v1/items` so the pagination policy
//! can be tried from a browser or curl.
//!
//! ```sh
//! # Default config (~/.config/page-params/config.toml)
//! page-params-demo
//!
//! # Custom config and port
//! page-params-demo --config ./config.toml --port 3000
//!
//! # Validate config without starting
//! page-params-demo --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use page_params::config::{default_config_path, AppConfig};
use page_params::server::{init_tracing, run};

/// Pagination parameter demo server.
#[derive(Parser, Debug)]
#[command(name = "page-params-demo", version, about = "Paged list endpoint demo")]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "PAGE_PARAMS_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(default_config_path);

    let loaded = AppConfig::load(&config_path);
    if cli.check {
        return match loaded {
            Ok(cfg) => {
                println!("Configuration is valid");
                println!("   Config file : {}", config_path.display());
                println!("   Address     : {}", cfg.server.address());
                println!("   Page param  : {}", cfg.pagination.page_param);
                println!("   Limit param : {}", cfg.pagination.limit_param);
                println!("   Max limit   : {}", cfg.pagination.max_limit);
                Ok(())
            }
            Err(e) => Err(e.into()),
        };
    }

    let mut config = match loaded {
        Ok(mut cfg) => {
            if let Some(ref level) = cli.log_level {
                cfg.logging.level = level.clone();
            }
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let mut cfg = AppConfig::default();
            if let Some(ref level) = cli.log_level {
                cfg.logging.level = level.clone();
            }
            init_tracing(&cfg);
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
            cfg
        }
    };

    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    run(config).await
}
