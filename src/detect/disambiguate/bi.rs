//! `.bi`: classic-basic, structured-basic. Same line-number heuristic as
//! `.bas`, but with no visualbasic-sibling check.

use super::bas::has_classic_line_numbers;
use crate::detect::context::{FileContext, LanguageId};

pub fn resolve(ctx: &FileContext) -> LanguageId {
    let text = super::text_of(ctx);
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

    #[test]
    fn line_numbers_imply_classic_basic() {
        let c = FileContext::from_bytes(
            "defs.bi",
            b"10 DIM X\n".to_vec(),
            Arc::new(SiblingSnapshot::empty()),
        );
        assert_eq!(resolve(&c), LanguageId::parse("classic_basic").unwrap());
    }

    #[test]
    fn defaults_to_structured_basic() {
        let c = FileContext::from_bytes(
            "defs.bi",
            b"Declare Sub Foo()\n".to_vec(),
            Arc::new(SiblingSnapshot::empty()),
        );
        assert_eq!(resolve(&c), LanguageId::parse("structured_basic").unwrap());
    }
}
