//! Property tests for the scanner invariants from spec.md §8, generated
//! over arbitrary byte buffers per scanner family rather than hand-picked
//! fixtures. The six literal scenarios and invariants 6-7 live as plain
//! `#[test]`s next to the code they exercise (`src/scan/languages/*.rs`,
//! `tests/ambiguous_corpus.rs`); this file covers invariants 1, 3, 5 and 9,
//! which hold universally over generated input.

use proptest::prelude::*;

use polyloc::detect::context::LanguageId;
use polyloc::scan::entity::{LineEvent, LineKind, VecSink};
use polyloc::scan::registry::{scanner_for, Scanner};

fn scanner_for_str(name: &str) -> Box<dyn Scanner> {
    let id = LanguageId::parse(name).unwrap_or_else(|| panic!("unknown language {name}"));
    scanner_for(id).unwrap_or_else(|| panic!("no scanner for {name}"))
}

const FAMILIES: &[&str] = &["c", "cpp", "objective_c", "python", "json", "xml", "html", "fortran_fixed", "fortran_free"];

fn arb_buf() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

fn assert_line_coverage(buf: &[u8], lines: &[LineEvent]) {
    let mut covered = 0usize;
    for ev in lines {
        prop_assert_range_start(ev, covered);
        covered = ev.range.end;
    }
    assert_eq!(covered, buf.len(), "line events must cover the whole buffer with no gaps");
}

fn prop_assert_range_start(ev: &LineEvent, expected: usize) {
    assert_eq!(ev.range.start, expected, "line event ranges must be contiguous, no overlap/gap");
}

fn is_blank_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0c)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Invariant 1: concatenating line-event ranges reproduces the buffer
    /// exactly, for every scanner family.
    #[test]
    fn line_coverage_holds(buf in arb_buf(), idx in 0..FAMILIES.len()) {
        let lang = FAMILIES[idx];
        let scanner = scanner_for_str(lang);
        let mut sink = VecSink::default();
        scanner.count(&buf, &mut sink);
        assert_line_coverage(&buf, &sink.lines);
    }

    /// Invariant 3: a line classified blank contains only whitespace bytes.
    #[test]
    fn blank_implies_whitespace(buf in arb_buf(), idx in 0..FAMILIES.len()) {
        let lang = FAMILIES[idx];
        let scanner = scanner_for_str(lang);
        let mut sink = VecSink::default();
        scanner.count(&buf, &mut sink);
        for ev in &sink.lines {
            if ev.kind == LineKind::Blank {
                for &b in &buf[ev.range.clone()] {
                    assert!(is_blank_whitespace(b), "blank line contained non-whitespace byte {b:#x}");
                }
            }
        }
    }

    /// Invariant 9: a buffer produces exactly one line event per `\n` byte,
    /// plus one more iff non-newline bytes trail the final `\n` (or the
    /// buffer has no `\n` at all but is non-empty).
    #[test]
    fn unterminated_final_line_count(buf in arb_buf(), idx in 0..FAMILIES.len()) {
        let lang = FAMILIES[idx];
        let scanner = scanner_for_str(lang);
        let mut sink = VecSink::default();
        scanner.count(&buf, &mut sink);

        let newline_count = buf.iter().filter(|&&b| b == b'\n').count();
        let has_tail = buf.last().is_some_and(|&b| b != b'\n');
        let expected = newline_count + usize::from(has_tail);
        assert_eq!(sink.lines.len(), expected, "unexpected line-event count for {lang}");
    }

    /// Invariant 5: in entity mode, entity spans tile the buffer exactly,
    /// the same coverage property as line events but for entities.
    #[test]
    fn entity_mode_coverage_holds(buf in arb_buf(), idx in 0..FAMILIES.len()) {
        let lang = FAMILIES[idx];
        let scanner = scanner_for_str(lang);
        let mut sink = VecSink::default();
        scanner.entities(&buf, &mut sink);
        let mut covered = 0usize;
        for span in &sink.entities {
            assert_eq!(span.range.start, covered, "entity spans must tile the buffer with no gap/overlap");
            covered = span.range.end;
        }
        assert_eq!(covered, buf.len(), "entity spans must cover the whole buffer");
    }
}

/// Invariant 8 (embedding round-trip), exercised over generated guest
/// comment bodies rather than the single literal scenario covered by
/// `html.rs`'s unit test.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn embedding_round_trip_host_plus_guest_equals_total(comment in "[a-zA-Z ]{0,20}") {
        let scanner = scanner_for_str("html");
        let buf = format!("<p>hi</p>\n<?cs\n #{comment}\n?>\n<p>bye</p>\n");
        let mut sink = VecSink::default();
        scanner.count(buf.as_bytes(), &mut sink);

        let host_lines = sink.lines.iter().filter(|e| e.lang.as_str() == "html").count();
        let guest_lines = sink.lines.iter().filter(|e| e.lang.as_str() == "clearsilver").count();
        let newline_count = buf.as_bytes().iter().filter(|&&b| b == b'\n').count();
        assert_eq!(host_lines + guest_lines, newline_count);
    }
}
