//! Rendering options for generated implementation files.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

fn default_indent() -> String {
    "    ".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Synthesize a `@file` banner when the existing file has none.
    #[serde(default = "default_true")]
    pub banner: bool,

    /// Seed a new user block with `#include "<interface header>"`.
    #[serde(default = "default_true")]
    pub include_interface: bool,

    /// Indentation placed before body markers and placeholder statements.
    #[serde(default = "default_indent")]
    pub indent: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            banner: true,
            include_interface: true,
            indent: default_indent(),
        }
    }
}
