//! Command line, environment and logging configuration.

use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// Used when no log4rs config file is present.
const DEFAULT_LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%S%.3f%:z)} | {h({l})} | {m}{n}";

/// Serves subnet calculations over HTTP.
///
/// Every flag can also be set through its environment variable, or in a
/// `.env` file in the working directory.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version)]
pub struct Config {
    /// Address to bind to
    #[arg(short, long, env = "SUBNET_QUERY_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "SUBNET_QUERY_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Shut down the server on the first error, instead of just logging it
    #[arg(long, env = "SUBNET_QUERY_EXIT_ON_ERROR")]
    pub exit_on_error: bool,

    /// Log every served request
    #[arg(short, long, env = "SUBNET_QUERY_VERBOSE")]
    pub verbose: bool,

    /// log4rs YAML configuration file
    #[arg(long, env = "SUBNET_QUERY_LOG_CONFIG", default_value = "log4rs.yml")]
    pub log_config: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            exit_on_error: false,
            verbose: false,
            log_config: PathBuf::from("log4rs.yml"),
        }
    }
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

/// Initialise log4rs from `path`, or a console logger at `info` if it does not exist.
pub fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())
            .map_err(|e| format!("Error loading {}: {e}", path.display()))?;
        log::debug!("Logging configured from {}", path.display());
        return Ok(());
    }

    log4rs::init_config(default_log_config()?)?;
    log::debug!("{} not found, logging to console", path.display());
    Ok(())
}

fn default_log_config() -> Result<LogConfig, Box<dyn Error>> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(DEFAULT_LOG_PATTERN)))
        .build();

    let config = LogConfig::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))?;
    Ok(config)
}
