use std::path::PathBuf;

use thiserror::Error;

/// Error type for private key loading.
#[derive(Debug, Error)]
pub enum KeyLoadError {
    #[error("Failed to read key file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Key body is not valid base64: {0}")]
    MalformedBase64(#[from] base64::DecodeError),

    #[error("Decoded key is not a usable RSA private key")]
    InvalidKey,
}
