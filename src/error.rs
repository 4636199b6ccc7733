use std::{io, net::AddrParseError, net::SocketAddr};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid listen address `{addr}`: {source}")]
    InvalidAddress {
        addr: String,
        source: AddrParseError,
    },

    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: io::Error,
    },

    #[error("Failed to read bound address: {0}")]
    LocalAddr(#[source] io::Error),

    #[error("Server error: {0}")]
    Serve(#[source] io::Error),
}
