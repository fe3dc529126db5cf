//! Function records and the per-file parse result.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;
use crate::warnings::ExtractWarning;

/// Where an implementation body was recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodySource {
    /// Text between the body-marker pair.
    Marked,
    /// Text between the outermost braces; the file predates the markers.
    Raw,
}

impl BodySource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Marked => "marked",
            Self::Raw => "raw",
        }
    }
}

impl std::fmt::Display for BodySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A function body recovered from an implementation file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionBody {
    pub text: String,
    pub source: BodySource,
}

impl FunctionBody {
    #[must_use]
    pub fn marked(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: BodySource::Marked,
        }
    }

    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: BodySource::Raw,
        }
    }
}

/// One API function as seen by either extractor.
///
/// Interface records carry `documentation` and `is_new = true`; implementation
/// records carry `body` and `is_new = false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: String,
    pub return_type: String,
    pub head: String,
    pub documentation: String,
    pub body: Option<FunctionBody>,
    pub is_new: bool,
    /// 1-based line of the head in its source file.
    pub line: u32,
}

impl FunctionRecord {
    /// A freshly declared interface function pending a body.
    #[must_use]
    pub fn declared(
        name: String,
        return_type: String,
        head: String,
        documentation: String,
        line: u32,
    ) -> Self {
        Self {
            name,
            return_type,
            head,
            documentation,
            body: None,
            is_new: true,
            line,
        }
    }

    /// A function recovered from an existing implementation file.
    #[must_use]
    pub fn implemented(
        name: String,
        return_type: String,
        head: String,
        body: FunctionBody,
        line: u32,
    ) -> Self {
        Self {
            name,
            return_type,
            head,
            documentation: String::new(),
            body: Some(body),
            is_new: false,
            line,
        }
    }

    /// Identity key: the normalized name.
    #[must_use]
    pub fn key(&self) -> String {
        normalize(&self.name)
    }

    /// Head with all whitespace removed, for signature-change detection.
    #[must_use]
    pub fn normalized_head(&self) -> String {
        normalize(&self.head)
    }

    /// Whether the normalized return type is a pointer.
    #[must_use]
    pub fn returns_pointer(&self) -> bool {
        self.return_type.ends_with('*')
    }
}

/// The single free-form region a developer owns outside function bodies.
///
/// The content is opaque: it is never parsed and is written back
/// byte-for-byte, between re-synthesized sentinel lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserBlock(pub String);

impl UserBlock {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Everything one extraction pass learned about one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileParseResult {
    pub functions: Vec<FunctionRecord>,
    pub user_block: Option<UserBlock>,
    /// Leading file-level doc comment (`@file` banner), implementation files only.
    pub banner: Option<String>,
    pub warnings: Vec<ExtractWarning>,
}

impl FileParseResult {
    /// Result for an implementation file that does not exist yet.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a function by normalized name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&FunctionRecord> {
        let key = normalize(name);
        self.functions.iter().find(|f| f.key() == key)
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.functions.iter().map(|f| f.name.as_str()).collect()
    }
}
