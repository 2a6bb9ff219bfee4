//! `.cs`: csharp, clearsilver-template.

use crate::detect::context::{FileContext, LanguageId};

pub fn resolve(ctx: &FileContext) -> LanguageId {
    let text = super::text_of(ctx);
    if text.lines().any(|line| line.contains("<?cs")) {
        LanguageId::parse("clearsilver_template").unwrap()
    } else {
        LanguageId::parse("csharp").unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::detect::context::SiblingSnapshot;

    fn ctx(content: &str) -> FileContext {
        FileContext::from_bytes("page.cs", content.as_bytes().to_vec(), Arc::new(SiblingSnapshot::empty()))
    }

    #[test]
    fn clearsilver_marker_anywhere_wins() {
        assert_eq!(
            resolve(&ctx("class Foo {}\n<?cs include:\"bar.cs\" ?>\n")),
            LanguageId::parse("clearsilver_template").unwrap()
        );
    }

    #[test]
    fn no_marker_resolves_csharp() {
        assert_eq!(resolve(&ctx("class Foo {}\n")), LanguageId::parse("csharp").unwrap());
    }
}
