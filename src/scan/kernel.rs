//! The reusable scanning runtime shared by every language scanner, so
//! grammars only need to describe tokens, not line accounting.

use crate::detect::context::LanguageId;
use crate::scan::entity::{EntityKind, EntitySpan, EventSink, LineEvent, LineKind};

/// Per-line classification flags. At most one of `line_contains_code` /
/// `whole_line_comment` is ever true; both false means "blank so far".
/// Fields are private: the invariant is enforced by the setter methods,
/// never by direct field access.
#[derive(Debug, Clone, Copy)]
pub struct LineFlags {
    line_contains_code: bool,
    whole_line_comment: bool,
    line_start: usize,
}

impl LineFlags {
    pub fn new(line_start: usize) -> Self {
        Self {
            line_contains_code: false,
            whole_line_comment: false,
            line_start,
        }
    }

    pub fn mark_code(&mut self) {
        self.line_contains_code = true;
    }

    /// Never downgrades a code line to comment.
    pub fn mark_comment(&mut self) {
        if !self.line_contains_code {
            self.whole_line_comment = true;
        }
    }

    pub fn line_start(&self) -> usize {
        self.line_start
    }

    pub fn has_code(&self) -> bool {
        self.line_contains_code
    }

    fn reset(&mut self, new_start: usize) {
        self.line_contains_code = false;
        self.whole_line_comment = false;
        self.line_start = new_start;
    }

    pub fn kind(&self) -> LineKind {
        if self.line_contains_code {
            LineKind::Code
        } else if self.whole_line_comment {
            LineKind::Comment
        } else {
            LineKind::Blank
        }
    }
}

/// Owns the current line's classification flags for one scanner instance
/// and exposes the primitive actions grammar transitions invoke.
pub struct Kernel {
    lang: LanguageId,
    flags: LineFlags,
}

impl Kernel {
    pub fn new(lang: LanguageId) -> Self {
        Self {
            lang,
            flags: LineFlags::new(0),
        }
    }

    pub fn lang(&self) -> LanguageId {
        self.lang
    }

    /// Switches the language line events are tagged with, used by an
    /// embedding host when control passes to or returns from a guest
    /// scanner.
    pub fn set_lang(&mut self, lang: LanguageId) {
        self.lang = lang;
    }

    pub fn flags(&self) -> LineFlags {
        self.flags
    }

    /// Replace the flags wholesale, used by the embedding supervisor to
    /// hand a guest kernel fresh flags, or to restore a host's on return.
    pub fn restore_flags(&mut self, flags: LineFlags) {
        self.flags = flags;
    }

    pub fn mark_code(&mut self) {
        self.flags.mark_code();
    }

    pub fn mark_comment(&mut self) {
        self.flags.mark_comment();
    }

    /// Sets `line_start := p` when at the start of a line and no flag is
    /// set yet (the common case: called once per line, before any token).
    pub fn mark_line_start(&mut self, p: usize) {
        if !self.flags.line_contains_code && !self.flags.whole_line_comment {
            self.flags.line_start = p;
        }
    }

    /// Emits a line event covering `[line_start, te)`, then clears flags
    /// and sets `line_start := te`.
    pub fn emit_newline(&mut self, sink: &mut dyn EventSink, te: usize) {
        let event = LineEvent {
            lang: self.lang,
            kind: self.flags.kind(),
            range: self.flags.line_start()..te,
        };
        sink.line_event(event);
        self.flags.reset(te);
    }

    /// Used inside a multi-line token (string, block comment). Same
    /// emission as `emit_newline`, then resets flags and sets
    /// `line_start := p`; the enclosing token must re-mark the line on any
    /// subsequent non-whitespace byte.
    pub fn emit_internal_newline(&mut self, sink: &mut dyn EventSink, p: usize, te: usize) {
        let event = LineEvent {
            lang: self.lang,
            kind: self.flags.kind(),
            range: self.flags.line_start()..te,
        };
        sink.line_event(event);
        self.flags.reset(p);
    }

    /// Called after the scanner halts if the buffer did not end with a
    /// newline. Emits a final line event for `[line_start, pe)` whenever
    /// that range is non-empty, so the blank-tail case (trailing
    /// whitespace with no flags set) still satisfies line coverage.
    pub fn emit_final(&mut self, sink: &mut dyn EventSink, pe: usize) {
        if pe > self.flags.line_start() {
            let event = LineEvent {
                lang: self.lang,
                kind: self.flags.kind(),
                range: self.flags.line_start()..pe,
            };
            sink.line_event(event);
        }
    }

    /// Unconditional in entity mode.
    pub fn emit_entity(&self, sink: &mut dyn EventSink, kind: EntityKind, ts: usize, te: usize) {
        sink.entity_span(EntitySpan {
            lang: self.lang,
            kind,
            range: ts..te,
        });
    }
}
