use foodbank_client::ClientError;
use thiserror::Error;

/// Startup and serving failures
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Inventory client setup failed: {0}")]
    Client(#[from] ClientError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for server setup
pub type Result<T> = std::result::Result<T, ServerError>;
