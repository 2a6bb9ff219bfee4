//! C-family scanner. Kept separate from the generic table because plain
//! `c` historically lacks `//` line comments (K&R/C89); only `cpp`,
//! `objective_c` and `pike` pick it up. This single difference is the
//! reason the C family gets a dedicated entry rather than four
//! `syntax_table` rows that all look identical.

use super::generic::{GenericScanner, LanguageSyntax};
use crate::scan::entity::EventSink;
use crate::scan::registry::Scanner;

const C: LanguageSyntax = LanguageSyntax {
    lang: "c",
    line_comments: &[],
    block_comment: Some(("/*", "*/")),
    nested_block_comments: false,
    string_delims: b"\"'",
    triple_quote_strings: false,
    escaped_newline: true,
};

const CPP: LanguageSyntax = LanguageSyntax {
    lang: "cpp",
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    nested_block_comments: false,
    string_delims: b"\"'",
    triple_quote_strings: false,
    escaped_newline: true,
};

const OBJECTIVE_C: LanguageSyntax = LanguageSyntax {
    lang: "objective_c",
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    nested_block_comments: false,
    string_delims: b"\"'",
    triple_quote_strings: false,
    escaped_newline: true,
};

pub struct CFamilyScanner(GenericScanner);

pub fn c_scanner() -> CFamilyScanner {
    CFamilyScanner(GenericScanner::new(C))
}

pub fn cpp_scanner() -> CFamilyScanner {
    CFamilyScanner(GenericScanner::new(CPP))
}

pub fn objective_c_scanner() -> CFamilyScanner {
    CFamilyScanner(GenericScanner::new(OBJECTIVE_C))
}

impl Scanner for CFamilyScanner {
    fn count(&self, buf: &[u8], sink: &mut dyn EventSink) {
        self.0.count(buf, sink);
    }

    fn entities(&self, buf: &[u8], sink: &mut dyn EventSink) {
        self.0.entities(buf, sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::entity::{LineKind, VecSink};

    #[test]
    fn plain_c_has_no_slash_slash_comments() {
        let scanner = c_scanner();
        let mut sink = VecSink::default();
        scanner.count(b"// c\n/* block\nstill block */\ncode;\n\n", &mut sink);
        let kinds: Vec<LineKind> = sink.lines.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Code,
                LineKind::Comment,
                LineKind::Comment,
                LineKind::Code,
                LineKind::Blank,
            ]
        );
    }

    #[test]
    fn cpp_recognizes_line_comments() {
        let scanner = cpp_scanner();
        let mut sink = VecSink::default();
        scanner.count(b"// full line comment\n", &mut sink);
        assert_eq!(sink.lines[0].kind, LineKind::Comment);
    }
}
