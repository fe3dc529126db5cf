//! Recovering the developer-owned part of a function body.
//!
//! Markers are searched in the body text outside string and char literals,
//! so a literal that spells a marker is ordinary code.

use halport_core::{Conventions, FunctionBody};

use crate::scanner::{Token, TokenKind, tokenize};

/// How the body markers were found inside a function's braces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markers {
    /// Exactly one begin/end pair.
    Paired,
    /// More than one pair; the first was used.
    Ambiguous,
    /// Only one of the two markers.
    Unpaired,
    Absent,
}

/// A body recovered from the text between a function's braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub body: FunctionBody,
    pub markers: Markers,
    /// Offset into the brace content of the first code token outside a
    /// single marker pair. That code is not part of the body.
    pub stray: Option<usize>,
}

/// Extract the body from `inner`, the text strictly between the braces.
///
/// With a marker pair the body is the text between them, without the rest
/// of the begin-marker line and without the indentation of the end-marker
/// line. Otherwise the raw brace content is returned verbatim.
#[must_use]
pub fn extract(inner: &str, conventions: &Conventions) -> Extracted {
    let begin_marker = conventions.body_begin.as_str();
    let end_marker = conventions.body_end.as_str();
    let tokens = tokenize(inner);
    let begins = marker_offsets(inner, &tokens, begin_marker);
    let ends = marker_offsets(inner, &tokens, end_marker);

    let raw = |markers| Extracted {
        body: FunctionBody::raw(inner),
        markers,
        stray: None,
    };

    let Some(&begin) = begins.first() else {
        return raw(if ends.is_empty() {
            Markers::Absent
        } else {
            Markers::Unpaired
        });
    };
    let after_begin = begin + begin_marker.len();
    let Some(&end) = ends.iter().find(|&&at| at >= after_begin) else {
        return raw(Markers::Unpaired);
    };

    let start = skip_blank_remainder(inner, after_begin, end);
    let stop = trim_marker_indent(inner, start, end);
    let tail = end + end_marker.len();
    let markers = if begins.iter().chain(&ends).any(|&at| at >= tail) {
        Markers::Ambiguous
    } else {
        Markers::Paired
    };
    let stray = if markers == Markers::Paired {
        tokens
            .iter()
            .find(|t| !t.kind.is_trivia() && (t.end <= begin || t.start >= tail))
            .map(|t| t.start)
    } else {
        None
    };

    Extracted {
        body: FunctionBody::marked(&inner[start..stop]),
        markers,
        stray,
    }
}

/// Whether `text` contains either body marker outside string and char literals.
#[must_use]
pub fn mentions_marker(text: &str, conventions: &Conventions) -> bool {
    let tokens = tokenize(text);
    [&conventions.body_begin, &conventions.body_end]
        .iter()
        .any(|marker| !marker_offsets(text, &tokens, marker).is_empty())
}

/// Offsets of `marker` in `text` that do not start inside a literal.
fn marker_offsets(text: &str, tokens: &[Token], marker: &str) -> Vec<usize> {
    text.match_indices(marker)
        .map(|(at, _)| at)
        .filter(|&at| {
            !tokens.iter().any(|t| {
                matches!(t.kind, TokenKind::Str | TokenKind::Char) && t.start <= at && at < t.end
            })
        })
        .collect()
}

/// Skip past the newline ending the begin-marker line if only whitespace
/// follows the marker on that line.
fn skip_blank_remainder(inner: &str, from: usize, limit: usize) -> usize {
    let rest = &inner[from..limit];
    match rest.find('\n') {
        Some(nl) if rest[..nl].trim().is_empty() => from + nl + 1,
        _ => from,
    }
}

/// Back up to the start of the end-marker line if only whitespace precedes
/// the marker on that line.
fn trim_marker_indent(inner: &str, floor: usize, end: usize) -> usize {
    let line_start = inner[..end].rfind('\n').map_or(0, |nl| nl + 1).max(floor);
    if inner[line_start..end].trim().is_empty() {
        line_start
    } else {
        end
    }
}
