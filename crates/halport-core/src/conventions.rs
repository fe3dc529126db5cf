//! Naming and sentinel conventions shared by the extractors and the emitter.
//!
//! The sentinel strings are matched character-for-character: they are both
//! the input delimiters and the contract that hand-edited files keep working
//! across repeated regenerations.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Default API function-name prefix.
pub const DEFAULT_PREFIX: &str = "tkl";

/// Default first line of the user-defined block.
pub const DEFAULT_USER_BLOCK_BEGIN: &str = "// --- BEGIN: user defines and implements ---";

/// Default last line of the user-defined block.
pub const DEFAULT_USER_BLOCK_END: &str = "// --- END: user defines and implements ---";

/// Default opening marker of the user region inside a function body.
pub const DEFAULT_BODY_BEGIN: &str = "// --- BEGIN: user implements ---";

/// Default closing marker of the user region inside a function body.
pub const DEFAULT_BODY_END: &str = "// --- END: user implements ---";

/// The fixed strings that give structure to otherwise free-form C text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conventions {
    /// Identifier prefix that marks a function as part of the API.
    pub prefix: String,
    pub user_block_begin: String,
    pub user_block_end: String,
    pub body_begin: String,
    pub body_end: String,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            user_block_begin: DEFAULT_USER_BLOCK_BEGIN.to_string(),
            user_block_end: DEFAULT_USER_BLOCK_END.to_string(),
            body_begin: DEFAULT_BODY_BEGIN.to_string(),
            body_end: DEFAULT_BODY_END.to_string(),
        }
    }
}

impl Conventions {
    /// Conventions for another API family that keeps the default sentinels.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// Whether `name` is an API function name under these conventions.
    #[must_use]
    pub fn is_api_name(&self, name: &str) -> bool {
        !self.prefix.is_empty() && name.starts_with(&self.prefix)
    }

    /// Check that the prefix is a C identifier and the four markers are
    /// non-empty, single-line and pairwise distinct.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidConventions` naming the offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut chars = self.prefix.chars();
        let valid_prefix = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_prefix {
            return Err(CoreError::InvalidConventions {
                field: "prefix",
                reason: format!("{:?} is not a C identifier", self.prefix),
            });
        }

        let markers = self.markers();
        for &(field, marker) in &markers {
            if marker.trim().is_empty() {
                return Err(CoreError::InvalidConventions {
                    field,
                    reason: "is empty".to_string(),
                });
            }
            if marker.contains('\n') {
                return Err(CoreError::InvalidConventions {
                    field,
                    reason: "spans multiple lines".to_string(),
                });
            }
        }
        for (i, &(field, marker)) in markers.iter().enumerate() {
            for &(other_field, other) in &markers[i + 1..] {
                if marker.contains(other) || other.contains(marker) {
                    return Err(CoreError::InvalidConventions {
                        field,
                        reason: format!("overlaps {other_field}"),
                    });
                }
            }
        }
        Ok(())
    }

    fn markers(&self) -> [(&'static str, &str); 4] {
        [
            ("user_block_begin", self.user_block_begin.as_str()),
            ("user_block_end", self.user_block_end.as_str()),
            ("body_begin", self.body_begin.as_str()),
            ("body_end", self.body_end.as_str()),
        ]
    }
}
