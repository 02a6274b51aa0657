//! Errors raised while normalizing a pincode configuration.

use thiserror::Error;

/// Result alias for pincode construction.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// A configuration that cannot produce a working field group.
///
/// Runtime input problems are never reported through this type; they go to
/// the `on_invalid` callback instead.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `fields` was zero.
    #[error("pincode needs at least one field")]
    NoFields,

    /// The validation pattern is not a valid regular expression.
    #[error("invalid validation pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The mask placeholder does not occupy exactly one terminal cell.
    #[error("placeholder {0:?} must render as a single cell")]
    InvalidPlaceholder(char),
}
