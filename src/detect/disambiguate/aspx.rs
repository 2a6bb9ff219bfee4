//! `.aspx`, `.ascx`: cs-aspx, vb-aspx.

use crate::detect::context::{FileContext, LanguageId};

pub fn resolve(ctx: &FileContext) -> LanguageId {
    let text = super::text_of(ctx);
    if text.contains(r#"Language="VB""#) || text.contains(r#"Language='VB'"#) {
        LanguageId::parse("vb_aspx").unwrap()
    } else {
        LanguageId::parse("cs_aspx").unwrap()
    }
}
