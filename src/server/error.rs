use std::net::SocketAddr;

use thiserror::Error;

/// 进程级错误，均为致命错误
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to listen on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server stopped with error: {0}")]
    Serve(#[source] std::io::Error),
}
