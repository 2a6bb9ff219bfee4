//! `.st`: smalltalk, absent. Requires co-occurrence of `:=`, `: [`, and `].`.

use crate::detect::context::{FileContext, LanguageId};

pub fn resolve(ctx: &FileContext) -> Option<LanguageId> {
    let text = super::text_of(ctx);
    if text.contains(":=") && text.contains(": [") && text.contains("].") {
        LanguageId::parse("smalltalk")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::detect::context::SiblingSnapshot;

    fn ctx(content: &str) -> FileContext {
        FileContext::from_bytes("x.st", content.as_bytes().to_vec(), Arc::new(SiblingSnapshot::empty()))
    }

    #[test]
    fn requires_all_three_markers() {
        assert_eq!(resolve(&ctx("x := 1.\n")), None);
        let full = "x := [ :v | v: [ :w | w ].\n";
        assert_eq!(resolve(&ctx(full)), LanguageId::parse("smalltalk"));
    }
}
