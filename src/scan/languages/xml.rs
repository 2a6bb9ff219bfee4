//! Handwritten because XML's only comment form is `<!-- -->` and the
//! entity-mode span it produces is exercised directly by a literal
//! scenario, so it's easier to keep exact than to route through another
//! language's table entry.

use crate::detect::context::LanguageId;
use crate::scan::entity::{EntityKind, EventSink};
use crate::scan::kernel::Kernel;
use crate::scan::registry::Scanner;

pub struct XmlScanner;

const OPEN: &[u8] = b"<!--";
const CLOSE: &[u8] = b"-->";

impl XmlScanner {
    fn scan(&self, buf: &[u8], sink: &mut dyn EventSink, entity_mode: bool) {
        let mut kernel = Kernel::new(LanguageId::parse("xml").expect("xml is known"));
        let len = buf.len();
        let mut i = 0usize;

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
            if buf[i..].starts_with(OPEN) {
                let start = i;
                kernel.mark_comment();
                i += OPEN.len();
                while i < len && !buf[i..].starts_with(CLOSE) {
                    if buf[i] == b'\n' {
                        kernel.emit_internal_newline(sink, i + 1, i + 1);
                        kernel.mark_comment();
                    }
                    i += 1;
                }
                if i < len {
                    i += CLOSE.len();
                }
                if entity_mode {
                    kernel.emit_entity(sink, EntityKind::Comment, start, i);
                }
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
            let start = i;
            kernel.mark_code();
            i += 1;
            while i < len && !matches!(buf[i], b'\n' | b' ' | b'\t' | b'\r' | 0x0c) && !buf[i..].starts_with(OPEN) {
                i += 1;
            }
            if entity_mode {
                kernel.emit_entity(sink, EntityKind::Any, start, i);
            }
        }
        kernel.emit_final(sink, len);
    }
}

impl Scanner for XmlScanner {
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
    use crate::scan::entity::VecSink;

    /// `<!--comment-->` is 14 bytes; the entity span covers exactly that
    /// range.
    #[test]
    fn standalone_comment_entity_span_is_exact() {
        let scanner = XmlScanner;
        let mut sink = VecSink::default();
        let buf = b"<!--comment-->";
        assert_eq!(buf.len(), 14);
        scanner.entities(buf, &mut sink);
        assert_eq!(sink.entities[0].kind, EntityKind::Comment);
        assert_eq!(sink.entities[0].range, 0..14);
    }
}
