use std::fmt;

use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::RsaPrivateKey;

use super::errors::KeyLoadError;

/// DER structure a private key was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFormat {
    /// `PrivateKeyInfo` wrapping an RSA key (RFC 5208)
    Pkcs8,
    /// Bare `RSAPrivateKey` (RFC 8017)
    Pkcs1,
}

/// Asymmetric private key used to sign access tokens.
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Clone)]
pub struct SigningKey {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
    format: KeyFormat,
}

impl SigningKey {
    /// Build a signing key from DER bytes.
    ///
    /// PKCS#8 is tried first, then PKCS#1.
    ///
    /// # Errors
    /// * `InvalidKey` - Bytes are neither structure
    pub fn from_der(der: &[u8]) -> Result<Self, KeyLoadError> {
        let (private_key, format) = decode_private_key(der)?;

        // jsonwebtoken signs RS256 from PKCS#1 DER only
        let pkcs1 = private_key
            .to_pkcs1_der()
            .map_err(|_| KeyLoadError::InvalidKey)?;

        Ok(Self {
            encoding_key: EncodingKey::from_rsa_der(pkcs1.as_bytes()),
            algorithm: Algorithm::RS256,
            format,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn format(&self) -> KeyFormat {
        self.format
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }
}

fn decode_private_key(der: &[u8]) -> Result<(RsaPrivateKey, KeyFormat), KeyLoadError> {
    if let Ok(key) = RsaPrivateKey::from_pkcs8_der(der) {
        return Ok((key, KeyFormat::Pkcs8));
    }
    if let Ok(key) = RsaPrivateKey::from_pkcs1_der(der) {
        return Ok((key, KeyFormat::Pkcs1));
    }
    Err(KeyLoadError::InvalidKey)
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("algorithm", &self.algorithm)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}
