//! Fortran has two still-current source forms that classify comments by
//! column rather than by token, so neither fits the generic table-driven
//! scanner: fixed-form treats column 1 as a comment flag, free-form uses an
//! ordinary `!` line comment anywhere on the line.

use crate::detect::context::LanguageId;
use crate::scan::entity::{EntityKind, EventSink};
use crate::scan::kernel::Kernel;
use crate::scan::registry::Scanner;

fn lang(name: &str) -> LanguageId {
    LanguageId::parse(name).expect("known fortran variant")
}

fn each_line(buf: &[u8]) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
    let mut start = 0usize;
    let len = buf.len();
    std::iter::from_fn(move || {
        if start > len {
            return None;
        }
        if start == len {
            start += 1;
            return None;
        }
        match buf[start..].iter().position(|&b| b == b'\n') {
            Some(rel) => {
                let end = start + rel;
                let line = (start, end, true);
                start = end + 1;
                Some(line)
            }
            None => {
                let line = (start, len, false);
                start = len + 1;
                Some(line)
            }
        }
    })
}

pub struct FortranFixedScanner;
pub struct FortranFreeScanner;

impl Scanner for FortranFixedScanner {
    fn count(&self, buf: &[u8], sink: &mut dyn EventSink) {
        let mut kernel = Kernel::new(lang("fortran_fixed"));
        for (start, end, had_newline) in each_line(buf) {
            let is_comment_column = matches!(buf.get(start), Some(b'c' | b'C' | b'*' | b'!'));
            let has_content = buf[start..end].iter().any(|&b| !matches!(b, b' ' | b'\t' | b'\r'));
            if is_comment_column && has_content {
                kernel.mark_comment();
            } else if has_content {
                kernel.mark_code();
            }
            let te = if had_newline { end + 1 } else { end };
            if had_newline {
                kernel.emit_newline(sink, te);
            } else {
                kernel.emit_final(sink, te);
            }
        }
    }

    fn entities(&self, buf: &[u8], sink: &mut dyn EventSink) {
        let mut kernel = Kernel::new(lang("fortran_fixed"));
        for (start, end, _) in each_line(buf) {
            let is_comment_column = matches!(buf.get(start), Some(b'c' | b'C' | b'*' | b'!'));
            let kind = if is_comment_column { EntityKind::Comment } else { EntityKind::Any };
            if end > start {
                kernel.emit_entity(sink, kind, start, end);
            }
            if end < buf.len() {
                kernel.emit_entity(sink, EntityKind::Newline, end, end + 1);
            }
        }
    }
}

impl Scanner for FortranFreeScanner {
    fn count(&self, buf: &[u8], sink: &mut dyn EventSink) {
        let mut kernel = Kernel::new(lang("fortran_free"));
        for (start, end, had_newline) in each_line(buf) {
            let line = &buf[start..end];
            if let Some(bang) = line.iter().position(|&b| b == b'!') {
                if line[..bang].iter().any(|&b| !matches!(b, b' ' | b'\t' | b'\r')) {
                    kernel.mark_code();
                } else {
                    kernel.mark_comment();
                }
            } else if line.iter().any(|&b| !matches!(b, b' ' | b'\t' | b'\r')) {
                kernel.mark_code();
            }
            let te = if had_newline { end + 1 } else { end };
            if had_newline {
                kernel.emit_newline(sink, te);
            } else {
                kernel.emit_final(sink, te);
            }
        }
    }

    fn entities(&self, buf: &[u8], sink: &mut dyn EventSink) {
        let mut kernel = Kernel::new(lang("fortran_free"));
        for (start, end, _) in each_line(buf) {
            let line = &buf[start..end];
            let kind = if line.iter().position(|&b| b == b'!').is_some_and(|bang| {
                line[..bang].iter().all(|&b| matches!(b, b' ' | b'\t' | b'\r'))
            }) {
                EntityKind::Comment
            } else {
                EntityKind::Any
            };
            if end > start {
                kernel.emit_entity(sink, kind, start, end);
            }
            if end < buf.len() {
                kernel.emit_entity(sink, EntityKind::Newline, end, end + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::entity::{LineKind, VecSink};

    #[test]
    fn fixed_form_comment_column_is_column_one() {
        let scanner = FortranFixedScanner;
        let mut sink = VecSink::default();
        scanner.count(b"c this is a comment\n      x = 1\n", &mut sink);
        assert_eq!(sink.lines[0].kind, LineKind::Comment);
        assert_eq!(sink.lines[1].kind, LineKind::Code);
    }

    #[test]
    fn free_form_bang_anywhere_is_comment_marker() {
        let scanner = FortranFreeScanner;
        let mut sink = VecSink::default();
        scanner.count(b"x = 1 ! trailing\n! full line\n", &mut sink);
        assert_eq!(sink.lines[0].kind, LineKind::Code);
        assert_eq!(sink.lines[1].kind, LineKind::Comment);
    }
}
