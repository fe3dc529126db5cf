//! Rendering of the regenerated implementation file.
//!
//! Layout: banner, user block, then one section per interface function,
//! sections separated by a blank line. Every marker line is re-synthesized
//! from the conventions so that stale or hand-edited markers are normalized.

use halport_core::{BodySource, FunctionBody, FunctionRecord, UserBlock};
use halport_parser::mentions_body_marker;

use crate::options::EmitOptions;
use crate::placeholder::placeholder_body;

/// How a carried-over body was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered {
    /// Between freshly synthesized markers.
    Marked,
    /// A raw body wrapped in markers for the first time.
    Upgraded,
    /// A raw body that already mentions a marker, written as it was.
    Verbatim,
}

pub struct Emitter<'a> {
    options: &'a EmitOptions,
    out: String,
}

impl<'a> Emitter<'a> {
    pub const fn new(options: &'a EmitOptions) -> Self {
        Self {
            options,
            out: String::new(),
        }
    }

    /// Keep the existing banner, or synthesize one when enabled and the
    /// output file name is known.
    pub fn banner(&mut self, existing: Option<&str>) {
        let synthesized;
        let banner = match existing {
            Some(banner) => banner,
            None if self.options.output.banner => {
                let Some(file) = self.options.file_name.as_deref() else {
                    return;
                };
                let brief = self.options.interface_header.as_deref().map_or_else(
                    || "porting layer implementation".to_string(),
                    |header| format!("implementation of the interfaces declared in {header}"),
                );
                synthesized = format!("/**\n * @file {file}\n * @brief {brief}\n */");
                &synthesized
            }
            None => return,
        };
        self.section();
        self.out.push_str(banner);
        self.out.push('\n');
    }

    /// The user block, or an empty scaffold for a first generation.
    pub fn user_block(&mut self, existing: Option<&UserBlock>) {
        let options = self.options;
        let conventions = &options.conventions;
        let content = match existing {
            Some(block) => block.as_str().to_string(),
            None => self.scaffold(),
        };
        self.section();
        self.out.push_str(&conventions.user_block_begin);
        self.out.push('\n');
        self.out.push_str(&content);
        self.out.push_str(&conventions.user_block_end);
        self.out.push('\n');
    }

    fn scaffold(&self) -> String {
        match self.options.interface_header.as_deref() {
            Some(header) if self.options.output.include_interface => {
                format!("#include \"{header}\"\n")
            }
            _ => String::new(),
        }
    }

    /// An interface function carrying a body recovered from the old file.
    pub fn function(&mut self, declared: &FunctionRecord, body: &FunctionBody) -> Rendered {
        self.head(declared);
        match body.source {
            BodySource::Marked => {
                self.marked(&body.text);
                Rendered::Marked
            }
            BodySource::Raw if mentions_body_marker(&body.text, &self.options.conventions) => {
                self.out.push('{');
                self.out.push_str(&body.text);
                self.out.push_str("}\n");
                Rendered::Verbatim
            }
            BodySource::Raw => {
                let text = self.reindent_raw(&body.text);
                self.marked(&text);
                Rendered::Upgraded
            }
        }
    }

    /// A new interface function with a "not implemented" body.
    pub fn placeholder(&mut self, declared: &FunctionRecord) {
        self.head(declared);
        let indent = &self.options.output.indent;
        let text = placeholder_body(declared, &self.options.placeholder, indent);
        self.marked(&text);
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn head(&mut self, declared: &FunctionRecord) {
        self.section();
        if !declared.documentation.is_empty() {
            self.out.push_str(&declared.documentation);
            self.out.push('\n');
        }
        self.out.push_str(&declared.head);
        self.out.push('\n');
    }

    fn marked(&mut self, text: &str) {
        let conventions = &self.options.conventions;
        let indent = &self.options.output.indent;
        self.out.push_str("{\n");
        self.out.push_str(indent);
        self.out.push_str(&conventions.body_begin);
        self.out.push('\n');
        self.out.push_str(text);
        if !text.is_empty() && !text.ends_with('\n') {
            self.out.push('\n');
        }
        self.out.push_str(indent);
        self.out.push_str(&conventions.body_end);
        self.out.push_str("\n}\n");
    }

    /// Raw brace content as marker-region lines: drop the blank remainder of
    /// the `{` line and the indentation before `}`.
    fn reindent_raw(&self, raw: &str) -> String {
        let Some(first_nl) = raw.find('\n') else {
            let trimmed = raw.trim();
            return if trimmed.is_empty() {
                String::new()
            } else {
                format!("{}{trimmed}\n", self.options.output.indent)
            };
        };
        let start = if raw[..first_nl].trim().is_empty() {
            first_nl + 1
        } else {
            0
        };
        let text = &raw[start..];
        let end = text.rfind('\n').map_or(0, |nl| nl + 1);
        if text[end..].trim().is_empty() {
            text[..end].to_string()
        } else {
            format!("{text}\n")
        }
    }

    /// Blank line between sections.
    fn section(&mut self) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn record() -> FunctionRecord {
        FunctionRecord::declared(
            "tkl_a".to_string(),
            "int".to_string(),
            "int tkl_a(void)".to_string(),
            "/** a */".to_string(),
            1,
        )
    }

    fn render(body: &FunctionBody) -> (String, Rendered) {
        let options = EmitOptions::default();
        let mut emitter = Emitter::new(&options);
        let rendered = emitter.function(&record(), body);
        (emitter.finish(), rendered)
    }

    #[test]
    fn marked_body_between_fresh_markers() {
        let (text, rendered) = render(&FunctionBody::marked("    return 1;\n"));
        assert_eq!(rendered, Rendered::Marked);
        assert_eq!(
            text,
            "/** a */\nint tkl_a(void)\n{\n    // --- BEGIN: user implements ---\n    return 1;\n    // --- END: user implements ---\n}\n"
        );
    }

    #[test]
    fn raw_body_is_upgraded() {
        let (text, rendered) = render(&FunctionBody::raw("\n    return 1;\n"));
        assert_eq!(rendered, Rendered::Upgraded);
        assert!(text.contains("// --- BEGIN: user implements ---\n    return 1;\n    // --- END"));
    }

    #[test]
    fn raw_body_mentioning_a_marker_is_verbatim() {
        let raw = "\n    // --- BEGIN: user implements ---\n    return 1;\n";
        let (text, rendered) = render(&FunctionBody::raw(raw));
        assert_eq!(rendered, Rendered::Verbatim);
        assert_eq!(text, format!("/** a */\nint tkl_a(void)\n{{{raw}}}\n"));
    }

    #[test]
    fn raw_body_with_marker_in_a_string_is_upgraded() {
        let raw = "\n    puts(\"// --- BEGIN: user implements ---\");\n";
        let (text, rendered) = render(&FunctionBody::raw(raw));
        assert_eq!(rendered, Rendered::Upgraded);
        assert!(text.contains(
            "    // --- BEGIN: user implements ---\n    puts(\"// --- BEGIN: user implements ---\");\n    // --- END: user implements ---\n"
        ));
    }

    #[rstest]
    #[case::typical("\n    a();\n    b();\n", "    a();\n    b();\n")]
    #[case::empty("\n", "")]
    #[case::blank("\n\n    \n", "\n    \n")]
    #[case::one_line(" return 0; ", "    return 0;\n")]
    #[case::code_on_brace_line(" a();\n    b();\n", " a();\n    b();\n")]
    #[case::code_before_close("\n    a(); ", "    a(); \n")]
    fn reindents_raw_bodies(#[case] raw: &str, #[case] expected: &str) {
        let options = EmitOptions::default();
        assert_eq!(Emitter::new(&options).reindent_raw(raw), expected);
    }

    #[test]
    fn synthesized_banner_and_seeded_scaffold() {
        let options = EmitOptions::default()
            .with_file_name("tkl_queue.c")
            .with_interface_header("tkl_queue.h");
        let mut emitter = Emitter::new(&options);
        emitter.banner(None);
        emitter.user_block(None);
        assert_eq!(
            emitter.finish(),
            "/**\n * @file tkl_queue.c\n * @brief implementation of the interfaces declared in tkl_queue.h\n */\n\n// --- BEGIN: user defines and implements ---\n#include \"tkl_queue.h\"\n// --- END: user defines and implements ---\n"
        );
    }

    #[test]
    fn no_banner_without_file_name() {
        let options = EmitOptions::default();
        let mut emitter = Emitter::new(&options);
        emitter.banner(None);
        emitter.user_block(None);
        assert_eq!(
            emitter.finish(),
            "// --- BEGIN: user defines and implements ---\n// --- END: user defines and implements ---\n"
        );
    }
}
