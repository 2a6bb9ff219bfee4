//! `.bas`: classic-basic, visualbasic, structured-basic.

use crate::detect::context::{FileContext, LanguageId};

/// True if any line looks like `123 GOTO 10` (a classic-BASIC line number).
pub(super) fn has_classic_line_numbers(text: &str) -> bool {
    text.lines().any(|line| {
        let trimmed = line.trim_start();
        let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return false;
        }
        let rest = trimmed[digits.len()..].trim_start();
        !rest.is_empty() && rest.starts_with(|c: char| c.is_alphabetic())
    })
}

pub fn resolve(ctx: &FileContext) -> LanguageId {
    let text = super::text_of(ctx);

    if has_classic_line_numbers(&text) {
        return LanguageId::parse("classic_basic").unwrap();
    }
    if ctx.siblings().contains_vb() {
        return LanguageId::parse("visualbasic").unwrap();
    }
    LanguageId::parse("structured_basic").unwrap()
}
