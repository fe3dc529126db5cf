//! The user-defined block of an implementation file.

use std::ops::Range;

use halport_core::{Conventions, UserBlock};

use crate::error::ParserError;
use crate::text::{LineIndex, excerpt};

/// A located user block: its verbatim content and the range to remove,
/// sentinel lines included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    pub block: UserBlock,
    pub removal: Range<usize>,
}

/// Find the single user block of `source`.
///
/// The content starts on the line after the begin sentinel (or directly after
/// it when code follows on the same line) and stops right before the end
/// sentinel, so the emitter can write it back byte-for-byte.
///
/// # Errors
/// `MalformedImplementation` for a begin sentinel without an end sentinel,
/// or for a second begin sentinel.
pub fn locate(
    source: &str,
    conventions: &Conventions,
    lines: &LineIndex,
) -> Result<Option<Located>, ParserError> {
    let begin_marker = conventions.user_block_begin.as_str();
    let end_marker = conventions.user_block_end.as_str();

    let Some(begin) = source.find(begin_marker) else {
        return Ok(None);
    };
    let content_start = skip_blank_remainder(source, begin + begin_marker.len());

    let Some(relative_end) = source[content_start..].find(end_marker) else {
        return Err(ParserError::malformed(
            lines.line(begin),
            "unterminated user block",
            excerpt(line_at(source, begin)),
        ));
    };
    let content_end = content_start + relative_end;

    // A begin sentinel inside the block or after it means two blocks.
    let after_begin = begin + begin_marker.len();
    if let Some(second) = source[after_begin..].find(begin_marker) {
        let second = after_begin + second;
        return Err(ParserError::malformed(
            lines.line(second),
            "multiple user blocks",
            excerpt(line_at(source, second)),
        ));
    }

    let removal_end = line_ending_after(source, content_end + end_marker.len());
    Ok(Some(Located {
        block: UserBlock(source[content_start..content_end].to_string()),
        removal: begin..removal_end,
    }))
}

/// Offset after the rest of the line at `from` when that rest is blank.
fn skip_blank_remainder(source: &str, from: usize) -> usize {
    let rest = &source[from..];
    match rest.find('\n') {
        Some(nl) if rest[..nl].trim().is_empty() => from + nl + 1,
        None if rest.trim().is_empty() => source.len(),
        _ => from,
    }
}

/// Offset after a `\n` or `\r\n` directly at `from`, otherwise `from`.
fn line_ending_after(source: &str, from: usize) -> usize {
    let rest = &source[from..];
    if rest.starts_with("\r\n") {
        from + 2
    } else if rest.starts_with('\n') {
        from + 1
    } else {
        from
    }
}

fn line_at(source: &str, offset: usize) -> &str {
    let rest = &source[offset..];
    rest.find('\n').map_or(rest, |nl| &rest[..nl])
}
