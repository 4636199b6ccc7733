use std::net::SocketAddr;

use clap::Parser;

use crate::error::ServerError;

#[derive(Parser, Debug, Clone)]
#[command(
    name    = "vipchatbot-api",
    about   = "Status banner API for VipChatBot",
    version
)]
pub struct Config {
    /// Host address to listen on.
    #[arg(long, env = "VIPCHATBOT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "VIPCHATBOT_PORT", default_value_t = 8080)]
    pub port: u16,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parse `host:port` into a socket address. Hostnames are not resolved;
    /// the host must be an IP literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = self.addr();
        addr.parse()
            .map_err(|source| ServerError::InvalidAddress { addr, source })
    }
}

/// Same values as the clap defaults, for building a `Config` without parsing
/// the process arguments.
impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}
