//! The two extractors: interface headers and implementation files.

pub mod implementation;
pub mod interface;

pub use implementation::extract as extract_implementation;
pub use interface::extract as extract_interface;
