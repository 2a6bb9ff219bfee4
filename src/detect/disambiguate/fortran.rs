//! `.f`, `.ftn`, `.f77`-`.f03`: fortran-fixed, fortran-free.

use crate::detect::context::{FileContext, LanguageId};

fn leader(line: &str) -> &[u8] {
    let bytes = line.as_bytes();
    &bytes[..bytes.len().min(6)]
}

fn leader_is_digit_or_blank(line: &str) -> bool {
    leader(line).iter().all(|&b| b.is_ascii_digit() || b == b' ')
}

pub fn resolve(ctx: &FileContext) -> LanguageId {
    let text = super::text_of(ctx);

    let fixed_signal = text
        .lines()
        .any(|line| !leader_is_digit_or_blank(line) && !leader(line).is_empty());
    let free_signal = text.lines().any(|line| line.trim_end().ends_with('&'));

    let id = if free_signal {
        "fortran_free"
    } else if fixed_signal {
        "fortran_fixed"
    } else if text.lines().all(leader_is_digit_or_blank) {
        "fortran_free"
    } else {
        "fortran_fixed"
    };

    LanguageId::parse(id).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::detect::context::SiblingSnapshot;

    fn ctx(content: &str) -> FileContext {
        FileContext::from_bytes("prog.f", content.as_bytes().to_vec(), Arc::new(SiblingSnapshot::empty()))
    }

    #[test]
    fn column_six_continuation_marker_implies_fixed() {
        let c = ctx("      PROGRAM X\n     *CONTINUE\n");
        assert_eq!(resolve(&c), LanguageId::parse("fortran_fixed").unwrap());
    }

    #[test]
    fn ampersand_continuation_implies_free() {
        let c = ctx("program x\n  call foo(a, &\n  b)\nend program\n");
        assert_eq!(resolve(&c), LanguageId::parse("fortran_free").unwrap());
    }
}
