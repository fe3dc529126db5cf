//! Signature normalization.

/// Strip every whitespace character so that formatting variants of the same
/// return type or head compare equal.
///
/// `"VOID_T *"`, `"VOID_T*"` and `"VOID_T \t*"` all normalize to `"VOID_T*"`.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}
