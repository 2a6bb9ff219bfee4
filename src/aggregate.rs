//! Folds a stream of [`LineEvent`]s into per-language totals. Deliberately
//! the thinnest layer in the crate: output formatting and sorting are a CLI
//! concern, not a counting concern.

use std::collections::BTreeMap;

use crate::detect::context::LanguageId;
use crate::scan::entity::{EventSink, LineEvent, LineKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageTotals {
    pub files: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl LanguageTotals {
    pub fn total_lines(&self) -> usize {
        self.code + self.comment + self.blank
    }

    fn add_line(&mut self, kind: LineKind) {
        match kind {
            LineKind::Code => self.code += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Blank => self.blank += 1,
        }
    }
}

/// Per-language rollup across every file a summary run visited.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub by_language: BTreeMap<LanguageId, LanguageTotals>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers that one more file was attributed to `lang`, independent
    /// of whatever lines it contains (a zero-byte file still counts as a
    /// file).
    pub fn record_file(&mut self, lang: LanguageId) {
        self.by_language.entry(lang).or_default().files += 1;
    }

    pub fn merge(&mut self, other: Summary) {
        for (lang, totals) in other.by_language {
            let entry = self.by_language.entry(lang).or_default();
            entry.files += totals.files;
            entry.code += totals.code;
            entry.comment += totals.comment;
            entry.blank += totals.blank;
        }
    }

    pub fn grand_total(&self) -> LanguageTotals {
        let mut total = LanguageTotals::default();
        for totals in self.by_language.values() {
            total.files += totals.files;
            total.code += totals.code;
            total.comment += totals.comment;
            total.blank += totals.blank;
        }
        total
    }
}

impl EventSink for Summary {
    fn line_event(&mut self, event: LineEvent) {
        self.by_language.entry(event.lang).or_default().add_line(event.kind);
    }

    fn entity_span(&mut self, _span: crate::scan::entity::EntitySpan) {
        // Summaries only fold line events; entity mode is a separate query.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::Range;

    fn ev(lang: &str, kind: LineKind, r: Range<usize>) -> LineEvent {
        LineEvent {
            lang: LanguageId::parse(lang).unwrap(),
            kind,
            range: r,
        }
    }

    #[test]
    fn folds_line_events_by_language() {
        let mut summary = Summary::new();
        summary.record_file(LanguageId::parse("c").unwrap());
        summary.line_event(ev("c", LineKind::Code, 0..5));
        summary.line_event(ev("c", LineKind::Comment, 5..10));
        summary.line_event(ev("c", LineKind::Blank, 10..11));

        let totals = summary.by_language[&LanguageId::parse("c").unwrap()];
        assert_eq!(totals.files, 1);
        assert_eq!(totals.code, 1);
        assert_eq!(totals.comment, 1);
        assert_eq!(totals.blank, 1);
    }

    #[test]
    fn merge_sums_across_runs() {
        let mut a = Summary::new();
        a.line_event(ev("rust", LineKind::Code, 0..1));
        let mut b = Summary::new();
        b.line_event(ev("rust", LineKind::Code, 0..1));
        a.merge(b);
        assert_eq!(a.by_language[&LanguageId::parse("rust").unwrap()].code, 2);
    }
}
