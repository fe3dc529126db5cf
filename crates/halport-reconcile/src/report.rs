//! What a regeneration did, function by function.

use halport_core::ExtractWarning;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    /// Interface functions whose body was carried over.
    pub matched: Vec<String>,
    /// Interface functions that received a placeholder body.
    pub added: Vec<String>,
    /// Implementation functions no longer declared by the interface.
    pub dropped: Vec<String>,
    /// Matched functions whose normalized head differs between the files.
    pub signature_changed: Vec<String>,
    /// Matched functions whose raw body was wrapped in fresh markers.
    pub upgraded: Vec<String>,
    /// Warnings from both extractions, interface first.
    pub warnings: Vec<ExtractWarning>,
}

impl ReconcileReport {
    /// Whether any function was added or dropped or changed its signature.
    #[must_use]
    pub fn changes_api(&self) -> bool {
        !(self.added.is_empty() && self.dropped.is_empty() && self.signature_changed.is_empty())
    }
}
