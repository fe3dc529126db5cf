//! # halport-reconcile
//!
//! Combines the functions of an interface header with the bodies recovered
//! from an existing implementation file and renders the regenerated file.
//!
//! Interface order defines output order. A body is reused when a same-named
//! implementation record exists; otherwise a placeholder is synthesized.
//! Implementation-only functions are dropped and reported.

mod emit;
mod options;
mod pipeline;
mod placeholder;
mod reconcile;
mod report;

pub use options::EmitOptions;
pub use pipeline::regenerate;
pub use placeholder::placeholder_body;
pub use reconcile::{Reconciliation, reconcile};
pub use report::ReconcileReport;
