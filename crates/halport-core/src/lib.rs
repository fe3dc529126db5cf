//! # halport-core
//!
//! Core types and error types for halport.
//!
//! This crate provides the foundational types shared across all halport crates:
//! - Function records and the immutable per-file parse result
//! - The naming and sentinel conventions the extractors match against
//! - Non-fatal extraction warnings
//! - Signature normalization used as the identity key across files
//! - Cross-cutting error types

pub mod conventions;
pub mod errors;
pub mod normalize;
pub mod records;
pub mod warnings;

pub use conventions::Conventions;
pub use errors::CoreError;
pub use normalize::normalize;
pub use records::{BodySource, FileParseResult, FunctionBody, FunctionRecord, UserBlock};
pub use warnings::ExtractWarning;
