use crate::error::{ReceiptError, Result};
use clap::Parser;
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8000;

/// Server configuration, read from command-line flags or the environment.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Receipt processing and reward points service", long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "RECEIPT_PROCESSOR_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "RECEIPT_PROCESSOR_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Answer unknown receipt ids with 404 instead of zero points
    #[arg(long, env = "RECEIPT_PROCESSOR_STRICT_LOOKUP")]
    pub strict_lookup: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            strict_lookup: false,
            verbose: 0,
        }
    }
}

impl Config {
    /// Resolves `host` and `port` into the address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ReceiptError::InvalidConfig(format!("invalid host address: {}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
