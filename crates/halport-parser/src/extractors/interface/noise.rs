//! Classification of header constructs that are not API declarations.

use halport_core::Conventions;

use crate::scanner::{Token, TokenKind};

/// A construct stripped from the header before function extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Noise {
    FunctionPointerTypedef,
    TypeDefinition,
    Include,
    CriticalSectionMacro,
    Macro,
    /// `#if`, `#endif`, `#pragma` and friends.
    Directive,
}

impl Noise {
    /// Whether a doc comment directly above this construct documented it.
    #[must_use]
    pub const fn consumes_doc(self) -> bool {
        !matches!(self, Self::Directive)
    }
}

/// Classify a preprocessor token.
#[must_use]
pub fn classify_directive(text: &str, conventions: &Conventions) -> Noise {
    let rest = text.trim_start().trim_start_matches('#').trim_start();
    let directive: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    match directive.as_str() {
        "include" => Noise::Include,
        "define" => {
            let name: String = rest["define".len()..]
                .trim_start()
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect();
            if is_critical_section_macro(&name, conventions) {
                Noise::CriticalSectionMacro
            } else {
                Noise::Macro
            }
        }
        _ => Noise::Directive,
    }
}

/// `TKL_ENTER_CRITICAL` / `TKL_EXIT_CRITICAL` style macros for the prefix.
fn is_critical_section_macro(name: &str, conventions: &Conventions) -> bool {
    let family = conventions.prefix.to_ascii_uppercase();
    name == format!("{family}_ENTER_CRITICAL") || name == format!("{family}_EXIT_CRITICAL")
}

/// Classify a `typedef` statement: function pointer or plain type definition.
#[must_use]
pub fn classify_typedef(tokens: &[Token], source: &str) -> Noise {
    let code: Vec<&Token> = tokens.iter().filter(|t| !t.kind.is_trivia()).collect();
    let pointer_declarator = code.windows(2).any(|pair| {
        pair[0].kind == TokenKind::OpenParen
            && pair[1].kind == TokenKind::Punct
            && pair[1].text(source) == "*"
    });
    if pointer_declarator {
        Noise::FunctionPointerTypedef
    } else {
        Noise::TypeDefinition
    }
}
