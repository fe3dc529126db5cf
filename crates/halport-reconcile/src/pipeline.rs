//! Extraction and reconciliation in one call.

use halport_core::FileParseResult;
use halport_parser::{ParserError, extract_implementation, extract_interface};

use crate::options::EmitOptions;
use crate::reconcile::{Reconciliation, reconcile};

/// Regenerate an implementation file from header text and, when one exists,
/// the previous implementation text.
///
/// # Errors
/// Propagates the fatal implementation extraction errors; nothing is
/// rendered when the old file cannot be recovered intact.
pub fn regenerate(
    interface_text: &str,
    implementation_text: Option<&str>,
    options: &EmitOptions,
) -> Result<Reconciliation, ParserError> {
    let interface = extract_interface(interface_text, &options.conventions);
    let implementation = match implementation_text {
        Some(text) => extract_implementation(text, &options.conventions)?,
        None => FileParseResult::empty(),
    };
    Ok(reconcile(&interface, &implementation, options))
}
