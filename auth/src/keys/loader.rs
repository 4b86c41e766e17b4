use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::errors::KeyLoadError;
use super::signing_key::SigningKey;

/// Reads PEM-encoded private keys from disk.
pub struct KeyLoader;

impl KeyLoader {
    /// Load a private key from a PEM file.
    ///
    /// Delimiter lines (`-----BEGIN ...-----` / `-----END ...-----`) are
    /// dropped whatever their label, the remaining body is base64-decoded
    /// and parsed as an RSA private key.
    ///
    /// # Arguments
    /// * `path` - Location of the PEM file
    ///
    /// # Errors
    /// * `Io` - File is missing or unreadable
    /// * `MalformedBase64` - Body is not valid base64
    /// * `InvalidKey` - Decoded bytes are not a usable private key
    pub fn load_private_key(path: impl AsRef<Path>) -> Result<SigningKey, KeyLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| KeyLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let key = SigningKey::from_der(&decode_pem_body(&content)?)?;
        tracing::debug!(
            path = %path.display(),
            format = ?key.format(),
            "Private key loaded"
        );

        Ok(key)
    }
}

fn decode_pem_body(content: &str) -> Result<Vec<u8>, KeyLoadError> {
    let body: String = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("-----"))
        .collect();

    Ok(STANDARD.decode(body)?)
}
