//! Panel sprite errors

use thiserror::Error;

/// Errors raised by panel sprite construction and texture swaps
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PanelError {
    /// A caller handed in geometry that breaks the layout contract
    /// (negative or non-finite margins, negative texture size)
    #[error("invalid panel configuration: {0}")]
    InvalidConfiguration(String),

    /// The texture provider has no entry for this name
    #[error("unknown texture '{0}'")]
    UnknownTexture(String),

    /// The texture exists but its dimensions could not be read
    #[error("failed to read texture '{name}': {reason}")]
    TextureRead { name: String, reason: String },
}
