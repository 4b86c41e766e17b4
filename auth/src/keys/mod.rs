pub mod errors;
pub mod loader;
pub mod signing_key;

pub use errors::KeyLoadError;
pub use loader::KeyLoader;
pub use signing_key::KeyFormat;
pub use signing_key::SigningKey;
