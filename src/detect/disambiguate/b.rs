//! `.b`: limbo, classic-basic, structured-basic. Limbo heuristic first;
//! otherwise falls through to the `.bi` line-number rule.

use super::bas::has_classic_line_numbers;
use crate::detect::context::{FileContext, LanguageId};

const LIMBO_PATTERNS: &[&str] = &["implement ", "include \"", "pick {", "case {"];

pub fn resolve(ctx: &FileContext) -> LanguageId {
    let text = super::text_of(ctx);

    if LIMBO_PATTERNS.iter().any(|p| text.contains(p)) {
        return LanguageId::parse("limbo").unwrap();
    }

    if has_classic_line_numbers(&text) {
        LanguageId::parse("classic_basic").unwrap()
    } else {
        LanguageId::parse("structured_basic").unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::detect::context::SiblingSnapshot;

    fn ctx(content: &str) -> FileContext {
        FileContext::from_bytes("mod.b", content.as_bytes().to_vec(), Arc::new(SiblingSnapshot::empty()))
    }

    #[test]
    fn limbo_markers_win() {
        let c = ctx("implement Foo;\ninclude \"sys.m\";\n");
        assert_eq!(resolve(&c), LanguageId::parse("limbo").unwrap());
    }

    #[test]
    fn falls_through_to_classic_basic() {
        let c = ctx("10 PRINT \"HI\"\n");
        assert_eq!(resolve(&c), LanguageId::parse("classic_basic").unwrap());
    }
}
