//! Locating the `extern "C"` region of an interface header.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Matches either `#ifdef __cplusplus` or `#if defined(__cplusplus)`.
const CPLUSPLUS_GUARD: &str =
    r"#[ \t]*(?:ifdef[ \t]+__cplusplus\b|if[ \t]+defined[ \t]*\(?[ \t]*__cplusplus[ \t]*\)?)";

static LINKAGE_BEGIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"{CPLUSPLUS_GUARD}\s*extern\s+"C"\s*\{{[^\n]*\n\s*#[ \t]*endif[^\n]*"#
    ))
    .expect("linkage begin pattern is valid")
});

static LINKAGE_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{CPLUSPLUS_GUARD}\s*\}}")).expect("linkage end pattern is valid")
});

/// Byte range strictly between the extern-C begin sentinel and the guard
/// that opens the matching end sentinel.
///
/// Returns `None` when either sentinel is missing.
#[must_use]
pub fn locate(source: &str) -> Option<Range<usize>> {
    let begin = LINKAGE_BEGIN.find(source)?;
    let end = LINKAGE_END.find_at(source, begin.end())?;
    Some(begin.end()..end.start())
}
