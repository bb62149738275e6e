use anyhow::{Context, Result};
use clap::Args;
use std::net::SocketAddr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Where the HTTP server listens.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address of the interface to listen on
    #[clap(long, env = "CALCULATOR_HOST", default_value = DEFAULT_HOST)]
    pub host: String,
    /// Port to listen on
    #[clap(short, long, env = "CALCULATOR_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_address(&self) -> Result<SocketAddr> {
        let address = format!("{}:{}", self.host, self.port);
        address
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", address))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_listens_on_all_interfaces() {
        let address = ServerConfig::default().socket_address().unwrap();

        assert_eq!(address, SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[test]
    fn ipv6_host_is_accepted_in_brackets() {
        let config = ServerConfig {
            host: "[::1]".to_string(),
            port: 3000,
        };

        assert_eq!(config.socket_address().unwrap().port(), 3000);
    }

    #[test]
    fn malformed_host_returns_err() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            port: 8080,
        };

        let error = config.socket_address().expect_err("Should return Err");

        assert!(error.to_string().contains("not a host"));
    }
}
