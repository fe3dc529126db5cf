//! A small C lexer: enough structure to find comments, preprocessor lines,
//! literals and bracket pairs without a compiler front end.
//!
//! Tokens never overlap and cover the scanned text completely, so any
//! token range maps back to an exact slice of the source.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `/** ... */`
    DocComment,
    /// `/* ... */`, `/**/` or `// ...`
    Comment,
    /// A `#` directive through its last continued line.
    Preprocessor,
    Str,
    Char,
    Ident,
    Number,
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    Semicolon,
    Whitespace,
    Punct,
    /// A range the caller asked the lexer to step over verbatim.
    Skipped,
}

impl TokenKind {
    /// Whitespace, comments and skipped ranges carry no code.
    #[must_use]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::Comment | Self::DocComment | Self::Skipped
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Tokenize the whole of `source`.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_skipping(source, None)
}

/// Tokenize `source`, emitting `skip` as a single [`TokenKind::Skipped`] token.
///
/// A token that would straddle the start of `skip` is cut short there.
#[must_use]
pub fn tokenize_skipping(source: &str, skip: Option<Range<usize>>) -> Vec<Token> {
    let mut lexer = Lexer {
        src: source.as_bytes(),
        source,
        pos: 0,
        line_start: true,
        limit: skip.as_ref().map_or(source.len(), |r| r.start),
    };
    let mut tokens = Vec::new();

    while lexer.pos < source.len() {
        if let Some(range) = &skip
            && lexer.pos == range.start
        {
            tokens.push(Token {
                kind: TokenKind::Skipped,
                start: range.start,
                end: range.end,
            });
            lexer.pos = range.end;
            lexer.limit = source.len();
            lexer.line_start = range.end == 0 || lexer.src[range.end - 1] == b'\n';
            continue;
        }
        let start = lexer.pos;
        let kind = lexer.next_kind();
        tokens.push(Token {
            kind,
            start,
            end: lexer.pos,
        });
    }
    tokens
}

struct Lexer<'a> {
    src: &'a [u8],
    source: &'a str,
    pos: usize,
    /// Only whitespace seen since the last newline.
    line_start: bool,
    /// Scanning never crosses this offset (start of a skipped range).
    limit: usize,
}

impl Lexer<'_> {
    fn peek(&self, offset: usize) -> Option<u8> {
        let at = self.pos + offset;
        if at < self.limit {
            self.src.get(at).copied()
        } else {
            None
        }
    }

    fn next_kind(&mut self) -> TokenKind {
        let Some(byte) = self.peek(0) else {
            // Only reachable when a skipped range starts here.
            self.pos = self.limit.max(self.pos + 1);
            return TokenKind::Whitespace;
        };

        match byte {
            b' ' | b'\t' | b'\r' | b'\n' | b'\x0b' | b'\x0c' => {
                self.whitespace();
                TokenKind::Whitespace
            }
            b'/' if self.peek(1) == Some(b'*') => self.block_comment(),
            b'/' if self.peek(1) == Some(b'/') => {
                self.line_comment();
                TokenKind::Comment
            }
            b'#' if self.line_start => {
                self.preprocessor();
                TokenKind::Preprocessor
            }
            b'"' => {
                self.quoted(b'"');
                TokenKind::Str
            }
            b'\'' => {
                self.quoted(b'\'');
                TokenKind::Char
            }
            b'{' => self.single(TokenKind::OpenBrace),
            b'}' => self.single(TokenKind::CloseBrace),
            b'(' => self.single(TokenKind::OpenParen),
            b')' => self.single(TokenKind::CloseParen),
            b';' => self.single(TokenKind::Semicolon),
            b if b.is_ascii_alphabetic() || b == b'_' => {
                self.word();
                self.line_start = false;
                TokenKind::Ident
            }
            b if b.is_ascii_digit() => {
                self.word();
                self.line_start = false;
                TokenKind::Number
            }
            _ => {
                let width = self.source[self.pos..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                self.pos = (self.pos + width).min(self.src.len());
                self.line_start = false;
                TokenKind::Punct
            }
        }
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.pos += 1;
        self.line_start = false;
        kind
    }

    fn whitespace(&mut self) {
        while let Some(b) = self.peek(0) {
            match b {
                b'\n' => self.line_start = true,
                b' ' | b'\t' | b'\r' | b'\x0b' | b'\x0c' => {}
                _ => break,
            }
            self.pos += 1;
        }
    }

    fn word(&mut self) {
        while self
            .peek(0)
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_')
        {
            self.pos += 1;
        }
    }

    fn line_comment(&mut self) {
        while let Some(b) = self.peek(0) {
            if b == b'\n' {
                break;
            }
            self.pos += 1;
        }
    }

    fn block_comment(&mut self) -> TokenKind {
        // `/**` opens a doc comment unless it is the empty `/**/`.
        let is_doc = self.peek(2) == Some(b'*') && self.peek(3) != Some(b'/');
        self.pos += 2;
        self.skip_to_comment_end();
        self.line_start = false;
        if is_doc {
            TokenKind::DocComment
        } else {
            TokenKind::Comment
        }
    }

    fn skip_to_comment_end(&mut self) {
        while let Some(b) = self.peek(0) {
            if b == b'*' && self.peek(1) == Some(b'/') {
                self.pos += 2;
                return;
            }
            self.pos += 1;
        }
    }

    fn preprocessor(&mut self) {
        while let Some(b) = self.peek(0) {
            match b {
                b'\n' => {
                    let continued = self.pos > 0
                        && (self.src[self.pos - 1] == b'\\'
                            || (self.src[self.pos - 1] == b'\r'
                                && self.pos > 1
                                && self.src[self.pos - 2] == b'\\'));
                    if !continued {
                        break;
                    }
                    self.pos += 1;
                }
                b'/' if self.peek(1) == Some(b'*') => {
                    self.pos += 2;
                    self.skip_to_comment_end();
                }
                b'/' if self.peek(1) == Some(b'/') => self.line_comment(),
                _ => self.pos += 1,
            }
        }
        self.line_start = false;
    }

    fn quoted(&mut self, quote: u8) {
        self.pos += 1;
        while let Some(b) = self.peek(0) {
            match b {
                b'\\' => self.pos = (self.pos + 2).min(self.limit),
                b'\n' => break,
                _ if b == quote => {
                    self.pos += 1;
                    break;
                }
                _ => self.pos += 1,
            }
        }
        self.line_start = false;
    }
}

/// Index of the token closing the bracket opened at `open`.
///
/// Only brackets of the same family are counted; string, char and comment
/// tokens never contribute because they are single tokens.
#[must_use]
pub fn matching_close(tokens: &[Token], open: usize) -> Option<usize> {
    let (opener, closer) = match tokens.get(open)?.kind {
        TokenKind::OpenBrace => (TokenKind::OpenBrace, TokenKind::CloseBrace),
        TokenKind::OpenParen => (TokenKind::OpenParen, TokenKind::CloseParen),
        _ => return None,
    };
    let mut depth = 0usize;
    for (idx, token) in tokens.iter().enumerate().skip(open) {
        if token.kind == opener {
            depth += 1;
        } else if token.kind == closer {
            depth -= 1;
            if depth == 0 {
                return Some(idx);
            }
        }
    }
    None
}
