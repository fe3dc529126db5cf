//! Return-type aware "not implemented" bodies for new functions.

use halport_config::PlaceholderConfig;
use halport_core::FunctionRecord;

/// Placeholder body text for `record`, indented with `indent`.
///
/// Void functions get an empty region. Otherwise pointer returns take
/// precedence over the status type, which takes precedence over the generic
/// value statement.
#[must_use]
pub fn placeholder_body(record: &FunctionRecord, config: &PlaceholderConfig, indent: &str) -> String {
    let statement = if record.returns_pointer() {
        &config.pointer_statement
    } else if config.void_types.iter().any(|t| *t == record.return_type) {
        return String::new();
    } else if record.return_type == config.status_type {
        &config.status_statement
    } else {
        &config.value_statement
    };
    format!("{indent}{statement}\n")
}
