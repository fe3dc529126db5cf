//! Interface header extractor.
//!
//! Reads the declarations between the `extern "C"` sentinels of an interface
//! header and produces one [`FunctionRecord`] per documented API function.
//! Type definitions, function-pointer typedefs, includes and macros
//! (including the documented critical-section macros) are classified as noise
//! and skipped together with the doc comment that documented them.

mod noise;
mod region;

use halport_core::{Conventions, ExtractWarning, FileParseResult, FunctionRecord, normalize};
use tracing::{debug, warn};

use crate::scanner::{Token, TokenKind, matching_close, tokenize};
use crate::text::{LineIndex, excerpt};

pub use noise::Noise;
pub use region::locate as locate_linkage_region;

/// Extract every documented API declaration from an interface header.
///
/// Never fails: a header without the extern-C region yields no functions and
/// a `MissingSentinel` warning; malformed declarations become warnings and are
/// excluded while their siblings are still extracted.
#[must_use]
pub fn extract(source: &str, conventions: &Conventions) -> FileParseResult {
    let Some(region) = region::locate(source) else {
        warn!("{}", ExtractWarning::MissingSentinel);
        return FileParseResult {
            warnings: vec![ExtractWarning::MissingSentinel],
            ..FileParseResult::default()
        };
    };

    let mut walker = Walker {
        base: region.start,
        body: &source[region],
        lines: LineIndex::new(source),
        conventions,
        result: FileParseResult::default(),
    };
    walker.walk();

    let result = walker.result;
    debug!(
        functions = result.functions.len(),
        warnings = result.warnings.len(),
        "interface extracted"
    );
    result
}

struct Walker<'a> {
    /// Offset of `body` inside `source`.
    base: usize,
    body: &'a str,
    lines: LineIndex,
    conventions: &'a Conventions,
    result: FileParseResult,
}

impl Walker<'_> {
    fn walk(&mut self) {
        let tokens = tokenize(self.body);
        let mut pending_doc: Option<Token> = None;
        let mut idx = 0;

        while idx < tokens.len() {
            let token = tokens[idx];
            match token.kind {
                TokenKind::Whitespace | TokenKind::Comment | TokenKind::Skipped => idx += 1,
                TokenKind::DocComment => {
                    pending_doc = Some(token);
                    idx += 1;
                }
                TokenKind::Preprocessor => {
                    let noise = noise::classify_directive(token.text(self.body), self.conventions);
                    debug!(?noise, line = self.line(token.start), "stripped directive");
                    if noise.consumes_doc() {
                        pending_doc = None;
                    }
                    idx += 1;
                }
                _ => {
                    let end = statement_end(&tokens, idx);
                    self.statement(&tokens[idx..=end], pending_doc.take());
                    idx = end + 1;
                }
            }
        }
    }

    fn statement(&mut self, tokens: &[Token], doc: Option<Token>) {
        let first = tokens[0];
        let text = &self.body[first.start..tokens[tokens.len() - 1].end];

        if first.kind == TokenKind::Ident && first.text(self.body) == "typedef" {
            let noise = noise::classify_typedef(tokens, self.body);
            debug!(?noise, line = self.line(first.start), "stripped typedef");
            return;
        }

        let shape = Shape::of(tokens);
        match shape {
            Shape::Declaration => {}
            Shape::Definition => {
                debug!(line = self.line(first.start), "skipped inline definition");
                return;
            }
            Shape::Aggregate => {
                debug!(noise = ?Noise::TypeDefinition, line = self.line(first.start), "stripped type definition");
                return;
            }
            Shape::Other => return,
        }

        let Some(doc) = doc else {
            if self.named_open_paren(tokens).is_some() {
                self.warn(ExtractWarning::MalformedDeclaration {
                    line: self.line(first.start),
                    reason: "API declaration without a documentation comment".to_string(),
                    context: excerpt(text),
                });
            }
            return;
        };

        let Some(open) = self.named_open_paren(tokens) else {
            self.warn(ExtractWarning::MalformedDeclaration {
                line: self.line(first.start),
                reason: format!(
                    "no '{}' function name before the parameter list",
                    self.conventions.prefix
                ),
                context: excerpt(text),
            });
            return;
        };

        let Some(close) = matching_close(tokens, open) else {
            self.warn(ExtractWarning::MalformedDeclaration {
                line: self.line(first.start),
                reason: "unbalanced parameter list".to_string(),
                context: excerpt(text),
            });
            return;
        };

        let Some(name_token) = previous_code(tokens, open).map(|i| tokens[i]) else {
            return;
        };
        let name = normalize(name_token.text(self.body));
        let line = self.line(first.start);

        if self.result.find(&name).is_some() {
            self.warn(ExtractWarning::DuplicateDeclaration { name, line });
            return;
        }

        let record = FunctionRecord::declared(
            name,
            normalize(&self.body[first.start..name_token.start]),
            self.body[first.start..tokens[close].end].to_string(),
            doc.text(self.body).to_string(),
            line,
        );
        debug!(name = %record.name, line, "declared");
        self.result.functions.push(record);
    }

    /// Index of the first top-level `(` directly preceded by an API name.
    fn named_open_paren(&self, tokens: &[Token]) -> Option<usize> {
        let mut depth = 0usize;
        for (idx, token) in tokens.iter().enumerate() {
            match token.kind {
                TokenKind::OpenParen => {
                    if depth == 0
                        && let Some(prev) = previous_code(tokens, idx)
                        && tokens[prev].kind == TokenKind::Ident
                        && self.conventions.is_api_name(tokens[prev].text(self.body))
                    {
                        return Some(idx);
                    }
                    depth += 1;
                }
                TokenKind::CloseParen => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
        None
    }

    fn line(&self, body_offset: usize) -> u32 {
        self.lines.line(self.base + body_offset)
    }

    fn warn(&mut self, warning: ExtractWarning) {
        warn!("{warning}");
        self.result.warnings.push(warning);
    }
}

/// What a top-level statement looks like, judged by its brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// Ends in `);`: a function prototype.
    Declaration,
    /// `...) { ... }`: a function with a body.
    Definition,
    /// Contains a brace block that is not a function body.
    Aggregate,
    Other,
}

impl Shape {
    fn of(tokens: &[Token]) -> Self {
        let code: Vec<usize> = (0..tokens.len())
            .filter(|&i| !tokens[i].kind.is_trivia())
            .collect();
        let brace = code
            .iter()
            .position(|&i| tokens[i].kind == TokenKind::OpenBrace);
        if let Some(pos) = brace {
            let after_paren = pos > 0 && tokens[code[pos - 1]].kind == TokenKind::CloseParen;
            return if after_paren {
                Self::Definition
            } else {
                Self::Aggregate
            };
        }

        let ends_in_semicolon = code
            .last()
            .is_some_and(|&i| tokens[i].kind == TokenKind::Semicolon);
        let before_semicolon = code.len().checked_sub(2).map(|p| tokens[code[p]].kind);
        if ends_in_semicolon && before_semicolon == Some(TokenKind::CloseParen) {
            Self::Declaration
        } else {
            Self::Other
        }
    }
}

/// Index of the last token of the statement starting at `start`.
///
/// A statement ends at a top-level `;`, or at the `}` closing a brace block
/// that directly follows a `)` (a function body, which has no `;`).
fn statement_end(tokens: &[Token], start: usize) -> usize {
    let mut parens = 0usize;
    let mut braces = 0usize;
    let mut function_body = false;
    let mut last_code: Option<TokenKind> = None;

    for (idx, token) in tokens.iter().enumerate().skip(start) {
        match token.kind {
            TokenKind::OpenParen => parens += 1,
            TokenKind::CloseParen => parens = parens.saturating_sub(1),
            TokenKind::OpenBrace => {
                if braces == 0 {
                    function_body = parens == 0 && last_code == Some(TokenKind::CloseParen);
                }
                braces += 1;
            }
            TokenKind::CloseBrace => {
                if braces == 0 {
                    // Unbalanced: end the statement here.
                    return idx;
                }
                braces -= 1;
                if braces == 0 && function_body {
                    return idx;
                }
            }
            TokenKind::Semicolon if parens == 0 && braces == 0 => return idx,
            _ => {}
        }
        if !token.kind.is_trivia() {
            last_code = Some(token.kind);
        }
    }
    tokens.len() - 1
}

/// Index of the nearest non-trivia token before `idx`.
fn previous_code(tokens: &[Token], idx: usize) -> Option<usize> {
    (0..idx).rev().find(|&i| !tokens[i].kind.is_trivia())
}

#[cfg(test)]
mod tests;
