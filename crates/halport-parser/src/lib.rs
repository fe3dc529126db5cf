//! # halport-parser
//!
//! Extraction of API functions from the two kinds of C text a porting layer
//! is made of:
//! - **Interface headers**: documented prototypes between the `extern "C"`
//!   sentinels, with typedefs, includes and macros stripped as noise
//! - **Implementation files**: the user-defined block, the file banner and
//!   each API function's head and body
//!
//! This is not a C parser. A small lexer keeps comments, literals and
//! preprocessor lines opaque so that brackets can be matched reliably, and
//! everything else is recognized by shape.

pub mod error;
pub mod extractors;
pub mod scanner;
pub mod source;
pub mod text;

pub use error::ParserError;
pub use extractors::implementation::body::mentions_marker as mentions_body_marker;
pub use extractors::{extract_implementation, extract_interface};
pub use source::{read_implementation, read_interface};
