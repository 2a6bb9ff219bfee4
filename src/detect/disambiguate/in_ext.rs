//! `.in`: strip the suffix and re-run detection on the synthetic filename
//! (e.g. `Makefile.in` -> `Makefile`, `config.h.in` -> `config.h`).

use std::sync::Arc;

use crate::detect::context::{FileContext, LanguageId};

pub fn resolve(ctx: &FileContext) -> Option<LanguageId> {
    let stripped_name = ctx.file_name().strip_suffix(".in")?;
    let synthetic_path = ctx
        .path()
        .parent()
        .map(|p| p.join(stripped_name))
        .unwrap_or_else(|| stripped_name.into());

    let bytes = ctx.bytes().ok()?.to_vec();
    let synthetic = FileContext::from_bytes(synthetic_path, bytes, ctx.siblings_arc());

    crate::detect::pipeline::detect(&synthetic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::context::SiblingSnapshot;

    #[test]
    fn strips_suffix_and_redetects() {
        let c = FileContext::from_bytes(
            "config.h.in",
            b"int x;\n".to_vec(),
            Arc::new(SiblingSnapshot::empty()),
        );
        assert_eq!(resolve(&c), LanguageId::parse("c"));
    }
}
