//! Extension system error types.

use thiserror::Error;

/// Result type for extension operations.
pub type ExtensionResult<T> = Result<T, ExtensionError>;

/// Errors that can occur during extension operations.
#[derive(Debug, Error)]
pub enum ExtensionError {
    /// No addon registered under the given name.
    #[error("no addon registered under '{0}'")]
    UnknownAddon(String),

    /// An addon with this name is already registered.
    #[error("addon '{0}' is already registered")]
    AlreadyRegistered(String),

    /// A video frame's buffer does not match its declared dimensions.
    #[error("malformed frame buffer: {width}x{height} declared, {len} bytes provided")]
    MalformedFrame { width: u32, height: u32, len: usize },

    /// Image encoding or decoding failed.
    #[error("image error: {0}")]
    Image(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
