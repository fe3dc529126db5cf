//! Non-fatal extraction diagnostics.
//!
//! Warnings never stop an extraction. Conditions that would silently destroy
//! developer work are errors instead (see `halport_parser::ParserError`).

use serde::{Deserialize, Serialize};

/// A condition the extractor recovered from locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractWarning {
    /// The interface header has no extern-C region; no API was found.
    #[error("no extern \"C\" region found; the interface declares no functions")]
    MissingSentinel,

    /// A documented declaration whose API name could not be located.
    #[error("line {line}: skipped malformed declaration ({reason}): {context}")]
    MalformedDeclaration {
        line: u32,
        reason: String,
        context: String,
    },

    /// The interface declares the same function twice; the first one wins.
    #[error("line {line}: duplicate declaration of {name} ignored")]
    DuplicateDeclaration { name: String, line: u32 },

    /// Code outside the user block that is not an API function and was dropped.
    #[error("line {line}: discarded code outside the user block: {excerpt}")]
    DiscardedFragment { line: u32, excerpt: String },

    /// More than one body-marker pair inside one function; the first is used.
    #[error("{name}: multiple body-marker pairs, only the first is kept")]
    AmbiguousBodyMarkers { name: String },

    /// Exactly one of the two body markers is present; the raw body is used.
    #[error("{name}: unpaired body marker, falling back to the raw body")]
    UnpairedBodyMarker { name: String },

    /// Code inside a function's braces but outside its body-marker pair.
    #[error("line {line}: {name}: dropped code outside the body markers: {excerpt}")]
    CodeOutsideBodyMarkers {
        name: String,
        line: u32,
        excerpt: String,
    },
}

impl ExtractWarning {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingSentinel => "missing_sentinel",
            Self::MalformedDeclaration { .. } => "malformed_declaration",
            Self::DuplicateDeclaration { .. } => "duplicate_declaration",
            Self::DiscardedFragment { .. } => "discarded_fragment",
            Self::AmbiguousBodyMarkers { .. } => "ambiguous_body_markers",
            Self::UnpairedBodyMarker { .. } => "unpaired_body_marker",
            Self::CodeOutsideBodyMarkers { .. } => "code_outside_body_markers",
        }
    }
}
