//! Cross-cutting error types for halport.
//!
//! Domain-specific errors (`ParserError`, `ConfigError`) are defined in their
//! respective crates. The binary converges all of them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any halport crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Conventions failed validation (invalid prefix, colliding markers).
    #[error("Invalid conventions: {field} {reason}")]
    InvalidConventions {
        /// The offending `Conventions` field, e.g. `prefix` or `body_begin`.
        field: &'static str,
        reason: String,
    },
}
