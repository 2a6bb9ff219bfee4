use std::ops::Range;

use crate::detect::context::LanguageId;

/// A lexical category recognized by a scanner. `InternalNewline` and
/// `CheckBlankEntry` are pseudo-kinds: the kernel and embedding supervisor
/// use them internally but they are never returned from a scanner's
/// `entities()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Space,
    Any,
    Comment,
    String,
    Number,
    Keyword,
    Identifier,
    Operator,
    Preproc,
    EscapedNewline,
    Newline,
    InternalNewline,
    CheckBlankEntry,
}

/// A line's classification in count mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Code,
    Comment,
    Blank,
}

/// A typed entity span, emitted in entity mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    pub lang: LanguageId,
    pub kind: EntityKind,
    pub range: Range<usize>,
}

/// A classified line, emitted in count mode. The range covers the full
/// line including its terminating newline, or to end-of-buffer for an
/// unterminated final line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEvent {
    pub lang: LanguageId,
    pub kind: LineKind,
    pub range: Range<usize>,
}

/// Where a scanner sends the events it produces. Implementations decide
/// whether to buffer, fold, or stream them onward.
pub trait EventSink {
    fn line_event(&mut self, event: LineEvent);
    fn entity_span(&mut self, span: EntitySpan);
}

/// A simple append-only sink, used by CLI commands and tests that want the
/// full event list.
#[derive(Debug, Default)]
pub struct VecSink {
    pub lines: Vec<LineEvent>,
    pub entities: Vec<EntitySpan>,
}

impl EventSink for VecSink {
    fn line_event(&mut self, event: LineEvent) {
        self.lines.push(event);
    }

    fn entity_span(&mut self, span: EntitySpan) {
        self.entities.push(span);
    }
}
