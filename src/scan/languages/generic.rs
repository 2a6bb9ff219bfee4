//! Table-driven scanner for languages whose classification needs are
//! "line/block comment plus quoted strings and nothing more". Grounded on
//! `other_examples`' `kimun` loc engine (`step_normal`/`step_in_string`/
//! `step_in_block_comment`) and its `LanguageSpec` descriptor, generalized
//! to also emit entity-mode spans.

use crate::detect::context::LanguageId;
use crate::scan::entity::{EntityKind, EventSink};
use crate::scan::kernel::Kernel;
use crate::scan::registry::Scanner;

/// Declarative description of a language's comment/string syntax. Covers
/// the bulk of the closed language enumeration; languages needing
/// embedding or column-sensitivity get a handwritten scanner instead.
#[derive(Debug, Clone, Copy)]
pub struct LanguageSyntax {
    pub lang: &'static str,
    pub line_comments: &'static [&'static str],
    pub block_comment: Option<(&'static str, &'static str)>,
    pub nested_block_comments: bool,
    pub string_delims: &'static [u8],
    pub triple_quote_strings: bool,
    /// Backslash-newline does not terminate the logical line for counting
    /// purposes (C preprocessor, shell).
    pub escaped_newline: bool,
}

pub struct GenericScanner {
    syntax: LanguageSyntax,
}

impl GenericScanner {
    pub const fn new(syntax: LanguageSyntax) -> Self {
        Self { syntax }
    }

    fn lang(&self) -> LanguageId {
        LanguageId::parse(self.syntax.lang).unwrap_or_else(|| panic!("unknown language {}", self.syntax.lang))
    }

    fn matches_at(buf: &[u8], i: usize, pat: &str) -> bool {
        buf[i..].starts_with(pat.as_bytes())
    }

    fn scan(&self, buf: &[u8], sink: &mut dyn EventSink, entity_mode: bool) {
        let mut kernel = Kernel::new(self.lang());
        let len = buf.len();
        let mut i = 0usize;
        kernel.mark_line_start(0);

        while i < len {
            let b = buf[i];

            if b == b'\n' {
                if entity_mode {
                    kernel.emit_entity(sink, EntityKind::Newline, i, i + 1);
                }
                kernel.emit_newline(sink, i + 1);
                i += 1;
                continue;
            }

            if self.syntax.escaped_newline && b == b'\\' && buf.get(i + 1) == Some(&b'\n') {
                kernel.mark_code();
                if entity_mode {
                    kernel.emit_entity(sink, EntityKind::EscapedNewline, i, i + 2);
                }
                i += 2;
                continue;
            }

            if matches!(b, b' ' | b'\t' | b'\r' | 0x0c) {
                let start = i;
                while i < len && matches!(buf[i], b' ' | b'\t' | b'\r' | 0x0c) {
                    i += 1;
                }
                if entity_mode {
                    kernel.emit_entity(sink, EntityKind::Space, start, i);
                }
                continue;
            }

            if let Some(marker) = self
                .syntax
                .line_comments
                .iter()
                .find(|m| Self::matches_at(buf, i, m))
            {
                let start = i;
                kernel.mark_comment();
                i += marker.len();
                while i < len && buf[i] != b'\n' {
                    i += 1;
                }
                if entity_mode {
                    kernel.emit_entity(sink, EntityKind::Comment, start, i);
                }
                continue;
            }

            if let Some((open, close)) = self.syntax.block_comment {
                if Self::matches_at(buf, i, open) {
                    let start = i;
                    kernel.mark_comment();
                    i += open.len();
                    let mut depth = 1u32;
                    while i < len && depth > 0 {
                        if self.syntax.nested_block_comments && Self::matches_at(buf, i, open) {
                            depth += 1;
                            i += open.len();
                        } else if Self::matches_at(buf, i, close) {
                            depth -= 1;
                            i += close.len();
                        } else if buf[i] == b'\n' {
                            kernel.emit_internal_newline(sink, i + 1, i + 1);
                            kernel.mark_comment();
                            i += 1;
                        } else {
                            i += 1;
                        }
                    }
                    if entity_mode {
                        kernel.emit_entity(sink, EntityKind::Comment, start, i);
                    }
                    continue;
                }
            }

            if self.syntax.string_delims.contains(&b) {
                let start = i;
                let quote = b;
                kernel.mark_code();
                let triple = self.syntax.triple_quote_strings
                    && buf.get(i + 1) == Some(&quote)
                    && buf.get(i + 2) == Some(&quote);
                i += if triple { 3 } else { 1 };

                loop {
                    if i >= len {
                        break;
                    }
                    if buf[i] == b'\\' && i + 1 < len {
                        i += 2;
                        continue;
                    }
                    if triple {
                        if buf[i] == quote && buf.get(i + 1) == Some(&quote) && buf.get(i + 2) == Some(&quote) {
                            i += 3;
                            break;
                        }
                        if buf[i] == b'\n' {
                            kernel.emit_internal_newline(sink, i + 1, i + 1);
                            kernel.mark_code();
                            i += 1;
                            continue;
                        }
                        i += 1;
                    } else {
                        if buf[i] == quote {
                            i += 1;
                            break;
                        }
                        if buf[i] == b'\n' {
                            // Unterminated single-line string: stop at the newline,
                            // leaving it for the main loop to classify normally.
                            break;
                        }
                        i += 1;
                    }
                }
                if entity_mode {
                    kernel.emit_entity(sink, EntityKind::String, start, i);
                }
                continue;
            }

            // Catch-all: any other byte is code.
            let start = i;
            kernel.mark_code();
            i += 1;
            while i < len
                && !matches!(buf[i], b'\n' | b' ' | b'\t' | b'\r' | 0x0c)
                && !self.syntax.string_delims.contains(&buf[i])
                && !self.syntax.line_comments.iter().any(|m| Self::matches_at(buf, i, m))
                && self.syntax.block_comment.is_none_or(|(open, _)| !Self::matches_at(buf, i, open))
            {
                i += 1;
            }
            if entity_mode {
                kernel.emit_entity(sink, EntityKind::Any, start, i);
            }
        }

        kernel.emit_final(sink, len);
    }
}

impl Scanner for GenericScanner {
    fn count(&self, buf: &[u8], sink: &mut dyn EventSink) {
        self.scan(buf, sink, false);
    }

    fn entities(&self, buf: &[u8], sink: &mut dyn EventSink) {
        self.scan(buf, sink, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::entity::{LineKind, VecSink};
    use crate::scan::languages::syntax_table;

    #[test]
    fn python_like_hash_comment_line() {
        let scanner = GenericScanner::new(syntax_table::PYTHON);
        let mut sink = VecSink::default();
        scanner.count(b"# comment\nx = 1\n\n", &mut sink);
        assert_eq!(sink.lines.len(), 3);
        assert_eq!(sink.lines[0].kind, LineKind::Comment);
        assert_eq!(sink.lines[1].kind, LineKind::Code);
        assert_eq!(sink.lines[2].kind, LineKind::Blank);
    }

    #[test]
    fn line_coverage_holds_for_generic_scanner() {
        let scanner = GenericScanner::new(syntax_table::JSON);
        let buf = b"{\n  \"a\": 1\n}\n";
        let mut sink = VecSink::default();
        scanner.count(buf, &mut sink);
        let mut covered = 0usize;
        for ev in &sink.lines {
            assert_eq!(ev.range.start, covered);
            covered = ev.range.end;
        }
        assert_eq!(covered, buf.len());
    }
}
