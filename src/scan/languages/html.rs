//! HTML host scanner with embedding support for ClearSilver template
//! directives (`<?cs ... ?>`). Other guest languages (inline `<script>`/
//! `<style>`) are not modeled: no scenario exercises them and the
//! disambiguator table never routes to them.
//!
//! Simplification: the language switch at an entry marker is deferred
//! until the marker's own trailing newline has been emitted under the
//! host language, since every embedding scenario in scope puts the entry
//! marker alone on its line. An exit marker switches back immediately.
//! This is a line-oriented approximation of full byte-level embedding;
//! see DESIGN.md.

use crate::detect::context::LanguageId;
use crate::scan::embed::Supervisor;
use crate::scan::entity::{EntityKind, EventSink};
use crate::scan::kernel::Kernel;
use crate::scan::languages::clearsilver;
use crate::scan::registry::Scanner;

const CS_OPEN: &[u8] = b"<?cs";
const CS_CLOSE: &[u8] = b"?>";

pub struct HtmlScanner;

impl HtmlScanner {
    fn scan(&self, buf: &[u8], sink: &mut dyn EventSink, entity_mode: bool) {
        let html = LanguageId::parse("html").expect("html is known");
        let clearsilver = LanguageId::parse("clearsilver").expect("clearsilver is known");
        let mut kernel = Kernel::new(html);
        let mut supervisor = Supervisor::new();
        let mut pending_switch: Option<LanguageId> = None;
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
                if let Some(lang) = pending_switch.take() {
                    kernel.set_lang(lang);
                }
                continue;
            }

            if matches!(b, b' ' | b'\t' | b'\r') {
                let start = i;
                while i < len && matches!(buf[i], b' ' | b'\t' | b'\r') {
                    i += 1;
                }
                if entity_mode {
                    kernel.emit_entity(sink, EntityKind::Space, start, i);
                }
                continue;
            }

            if supervisor.current_guest().is_none() && buf[i..].starts_with(CS_OPEN) {
                let start = i;
                kernel.mark_code();
                i += CS_OPEN.len();
                if supervisor.call(clearsilver, kernel.flags()).is_ok() {
                    pending_switch = Some(clearsilver);
                }
                if entity_mode {
                    kernel.emit_entity(sink, EntityKind::Preproc, start, i);
                }
                continue;
            }

            if supervisor.current_guest().is_some() && buf[i..].starts_with(CS_CLOSE) {
                let start = i;
                supervisor.return_();
                pending_switch = None;
                kernel.set_lang(html);
                kernel.mark_code();
                i += CS_CLOSE.len();
                if entity_mode {
                    kernel.emit_entity(sink, EntityKind::Preproc, start, i);
                }
                continue;
            }

            if supervisor.current_guest().is_some() {
                i = clearsilver::step(&mut kernel, buf, i, sink, entity_mode, CS_CLOSE);
                continue;
            }

            let start = i;
            kernel.mark_code();
            i += 1;
            while i < len && !matches!(buf[i], b'\n' | b' ' | b'\t' | b'\r') && !buf[i..].starts_with(CS_OPEN) {
                i += 1;
            }
            if entity_mode {
                kernel.emit_entity(sink, EntityKind::Any, start, i);
            }
        }

        kernel.emit_final(sink, len);
    }
}

impl Scanner for HtmlScanner {
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

    #[test]
    fn clearsilver_directive_block_embeds_guest_comment() {
        let scanner = HtmlScanner;
        let mut sink = VecSink::default();
        scanner.count(b"<?cs\n #comment\n?>\n", &mut sink);
        let kinds: Vec<(LineKind, &str)> = sink.lines.iter().map(|e| (e.kind, e.lang.as_str())).collect();
        assert_eq!(
            kinds,
            vec![
                (LineKind::Code, "html"),
                (LineKind::Comment, "clearsilver"),
                (LineKind::Code, "html"),
            ]
        );
    }

    #[test]
    fn plain_html_has_no_embedding() {
        let scanner = HtmlScanner;
        let mut sink = VecSink::default();
        scanner.count(b"<p>hi</p>\n", &mut sink);
        assert_eq!(sink.lines[0].kind, LineKind::Code);
        assert_eq!(sink.lines[0].lang.as_str(), "html");
    }
}
