//! Implementation file extractor.
//!
//! Pulls the user block out of an existing implementation file, then splits
//! what remains on top-level doc comments. Each fragment that names an API
//! function at brace depth zero yields one [`FunctionRecord`] with its head
//! and body. Anything this extractor cannot account for either becomes a
//! warning (code outside any recognizable function) or a fatal
//! [`ParserError`] (an API function that cannot be recovered intact).

pub mod body;
pub mod user_block;

use std::ops::Range;

use halport_core::{Conventions, ExtractWarning, FileParseResult, FunctionRecord, normalize};
use tracing::{debug, warn};

use crate::error::ParserError;
use crate::scanner::{Token, TokenKind, matching_close, tokenize_skipping};
use crate::text::{LineIndex, excerpt};

use body::Markers;

/// Extract the user block, banner and API functions of an implementation file.
///
/// # Errors
/// `MalformedImplementation` when the user block is unterminated or repeated,
/// or when an API fragment has no recoverable head or body;
/// `DuplicateFunction` when a name is defined twice.
pub fn extract(source: &str, conventions: &Conventions) -> Result<FileParseResult, ParserError> {
    let lines = LineIndex::new(source);
    let located = user_block::locate(source, conventions, &lines)?;
    let skip = located.as_ref().map(|l| l.removal.clone());
    let tokens = tokenize_skipping(source, skip);

    let mut extraction = Extraction {
        source,
        lines,
        conventions,
        result: FileParseResult {
            user_block: located.map(|l| l.block),
            ..FileParseResult::default()
        },
    };

    let fragments = split_fragments(&tokens, source, &extraction.lines)?;
    for (position, range) in fragments.iter().enumerate() {
        let fragment = &tokens[range.clone()];
        let leading = position == 0 || (position == 1 && !has_code(&tokens[fragments[0].clone()]));
        if leading && let Some(banner) = extraction.banner(fragment) {
            extraction.result.banner = Some(banner);
        }
        extraction.fragment(fragment)?;
    }

    let result = extraction.result;
    debug!(
        functions = result.functions.len(),
        user_block = result.user_block.is_some(),
        banner = result.banner.is_some(),
        warnings = result.warnings.len(),
        "implementation extracted"
    );
    Ok(result)
}

/// Split the token stream before every doc comment at brace depth zero.
///
/// # Errors
/// `MalformedImplementation` when the removed user block sat inside braces.
fn split_fragments(
    tokens: &[Token],
    source: &str,
    lines: &LineIndex,
) -> Result<Vec<Range<usize>>, ParserError> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;

    for (idx, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::OpenBrace => depth += 1,
            TokenKind::CloseBrace => depth = depth.saturating_sub(1),
            TokenKind::DocComment if depth == 0 && idx > start => {
                fragments.push(start..idx);
                start = idx;
            }
            TokenKind::Skipped if depth > 0 => {
                return Err(ParserError::malformed(
                    lines.line(token.start),
                    "user block inside a function body",
                    excerpt(token.text(source)),
                ));
            }
            _ => {}
        }
    }
    if start < tokens.len() {
        fragments.push(start..tokens.len());
    }
    Ok(fragments)
}

fn has_code(tokens: &[Token]) -> bool {
    tokens.iter().any(|t| !t.kind.is_trivia())
}

struct Extraction<'a> {
    source: &'a str,
    lines: LineIndex,
    conventions: &'a Conventions,
    result: FileParseResult,
}

impl Extraction<'_> {
    /// The file banner: a leading doc comment that does not document an API
    /// function and either stands alone or names the file.
    fn banner(&self, fragment: &[Token]) -> Option<String> {
        let first = fragment.first()?;
        if first.kind != TokenKind::DocComment || self.api_ident(fragment).is_some() {
            return None;
        }
        let text = first.text(self.source);
        (!has_code(&fragment[1..]) || text.contains("@file")).then(|| text.to_string())
    }

    /// Extract every function of one fragment. Functions without their own
    /// doc comment follow the first one in the same fragment.
    fn fragment(&mut self, fragment: &[Token]) -> Result<(), ParserError> {
        let mut rest = fragment;
        let mut why = "no API function";
        while self.api_ident(rest).is_some() {
            let consumed = self.function(rest)?;
            rest = &rest[consumed..];
            why = "code after a function body";
        }
        self.discard(rest, why);
        Ok(())
    }

    /// Extract the first function of `fragment`, returning the number of
    /// tokens it spans.
    fn function(&mut self, fragment: &[Token]) -> Result<usize, ParserError> {
        let Some(open) = self.named_open_paren(fragment) else {
            let at = self.api_ident(fragment).map_or(0, |i| fragment[i].start);
            return Err(ParserError::malformed(
                self.lines.line(at),
                format!(
                    "no '{}' function name before a parameter list",
                    self.conventions.prefix
                ),
                excerpt(self.span(fragment)),
            ));
        };
        let name_idx = previous_code(fragment, open).unwrap_or(open);
        let head_start = head_start(fragment, name_idx);
        let line = self.lines.line(fragment[head_start].start);

        if let Some(leading) = leading_code(fragment, head_start) {
            self.discard(&fragment[leading..head_start], "code before a function head");
        }

        let malformed = |reason: &str| {
            ParserError::malformed(line, reason, excerpt(self.span(&fragment[head_start..])))
        };
        let close = matching_close(fragment, open)
            .ok_or_else(|| malformed("unbalanced parameter list"))?;
        let brace = body_open(fragment, close)
            .ok_or_else(|| malformed("function head without a body"))?;
        let brace_close = matching_close(fragment, brace)
            .ok_or_else(|| malformed("unterminated function body"))?;

        let name = normalize(fragment[name_idx].text(self.source));
        if let Some(first) = self.result.find(&name) {
            return Err(ParserError::DuplicateFunction {
                name,
                line,
                first_line: first.line,
            });
        }

        let inner_start = fragment[brace].end;
        let inner = &self.source[inner_start..fragment[brace_close].start];
        let body::Extracted {
            body,
            markers,
            stray,
        } = body::extract(inner, self.conventions);
        match markers {
            Markers::Paired | Markers::Absent => {}
            Markers::Ambiguous => {
                self.warn(ExtractWarning::AmbiguousBodyMarkers { name: name.clone() });
            }
            Markers::Unpaired => {
                self.warn(ExtractWarning::UnpairedBodyMarker { name: name.clone() });
            }
        }
        if let Some(offset) = stray {
            let at = inner_start + offset;
            let text = self.source[at..].lines().next().unwrap_or_default();
            self.warn(ExtractWarning::CodeOutsideBodyMarkers {
                name: name.clone(),
                line: self.lines.line(at),
                excerpt: excerpt(text),
            });
        }

        let head_begin = fragment[head_start].start;
        let record = FunctionRecord::implemented(
            name,
            normalize(&self.source[head_begin..fragment[name_idx].start]),
            self.source[head_begin..fragment[close].end].to_string(),
            body,
            line,
        );
        debug!(name = %record.name, line, ?markers, "implemented");
        self.result.functions.push(record);
        Ok(brace_close + 1)
    }

    /// Index of the first code identifier at brace depth zero carrying the prefix.
    fn api_ident(&self, fragment: &[Token]) -> Option<usize> {
        let mut depth = 0usize;
        for (idx, token) in fragment.iter().enumerate() {
            match token.kind {
                TokenKind::OpenBrace => depth += 1,
                TokenKind::CloseBrace => depth = depth.saturating_sub(1),
                TokenKind::Ident
                    if depth == 0 && self.conventions.is_api_name(token.text(self.source)) =>
                {
                    return Some(idx);
                }
                _ => {}
            }
        }
        None
    }

    /// Index of the first `(` at depth zero directly preceded by an API name.
    fn named_open_paren(&self, fragment: &[Token]) -> Option<usize> {
        let mut braces = 0usize;
        let mut parens = 0usize;
        for (idx, token) in fragment.iter().enumerate() {
            match token.kind {
                TokenKind::OpenBrace => braces += 1,
                TokenKind::CloseBrace => braces = braces.saturating_sub(1),
                TokenKind::OpenParen => {
                    if braces == 0
                        && parens == 0
                        && let Some(prev) = previous_code(fragment, idx)
                        && fragment[prev].kind == TokenKind::Ident
                        && self.conventions.is_api_name(fragment[prev].text(self.source))
                    {
                        return Some(idx);
                    }
                    parens += 1;
                }
                TokenKind::CloseParen => parens = parens.saturating_sub(1),
                _ => {}
            }
        }
        None
    }

    fn discard(&mut self, tokens: &[Token], why: &str) {
        let Some(first) = tokens.iter().find(|t| !t.kind.is_trivia()) else {
            return;
        };
        let line = self.lines.line(first.start);
        debug!(line, why, "discarding fragment");
        let text = &self.source[first.start..tokens[tokens.len() - 1].end];
        self.warn(ExtractWarning::DiscardedFragment {
            line,
            excerpt: excerpt(text),
        });
    }

    fn span(&self, tokens: &[Token]) -> &str {
        match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => &self.source[first.start..last.end],
            _ => "",
        }
    }

    fn warn(&mut self, warning: ExtractWarning) {
        warn!("{warning}");
        self.result.warnings.push(warning);
    }
}

/// First code token of the head ending at `name_idx`: the token after the
/// last top-level `;`, `}` or preprocessor line before the name.
fn head_start(fragment: &[Token], name_idx: usize) -> usize {
    let boundary = (0..name_idx).rev().find(|&i| {
        matches!(
            fragment[i].kind,
            TokenKind::Semicolon | TokenKind::CloseBrace | TokenKind::Preprocessor
        )
    });
    let from = boundary.map_or(0, |b| b + 1);
    (from..=name_idx)
        .find(|&i| !fragment[i].kind.is_trivia())
        .unwrap_or(name_idx)
}

/// Index of the first code token before `head_start`, if any.
fn leading_code(fragment: &[Token], head_start: usize) -> Option<usize> {
    (0..head_start).find(|&i| !fragment[i].kind.is_trivia())
}

/// The `{` opening the body after the parameter list closing at `close`.
///
/// Attributes between `)` and `{` are allowed; a `;` first means a prototype.
fn body_open(fragment: &[Token], close: usize) -> Option<usize> {
    let mut parens = 0usize;
    for (idx, token) in fragment.iter().enumerate().skip(close + 1) {
        match token.kind {
            TokenKind::OpenParen => parens += 1,
            TokenKind::CloseParen => parens = parens.saturating_sub(1),
            TokenKind::OpenBrace if parens == 0 => return Some(idx),
            TokenKind::Semicolon | TokenKind::CloseBrace if parens == 0 => return None,
            _ => {}
        }
    }
    None
}

fn previous_code(tokens: &[Token], idx: usize) -> Option<usize> {
    (0..idx).rev().find(|&i| !tokens[i].kind.is_trivia())
}

#[cfg(test)]
mod tests;
