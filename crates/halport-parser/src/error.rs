//! Parser error types for halport-parser.

use std::path::PathBuf;

/// Conditions that stop a regeneration because continuing could silently
/// destroy code a developer wrote.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Malformed implementation function at line {line}: {reason}\n  --> {excerpt}")]
    MalformedImplementation {
        line: u32,
        reason: String,
        excerpt: String,
    },

    #[error("Duplicate implementation of {name} at line {line} (first defined at line {first_line})")]
    DuplicateFunction {
        name: String,
        line: u32,
        first_line: u32,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ParserError {
    pub(crate) fn malformed(line: u32, reason: impl Into<String>, excerpt: String) -> Self {
        Self::MalformedImplementation {
            line,
            reason: reason.into(),
            excerpt,
        }
    }
}
