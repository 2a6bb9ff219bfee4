//! `.inc`: php, absent.

use crate::detect::binary::has_null_byte_in_prefix;
use crate::detect::context::{FileContext, LanguageId};

pub fn resolve(ctx: &FileContext) -> Option<LanguageId> {
    let bytes = ctx.bytes().ok()?;

    if has_null_byte_in_prefix(bytes) {
        return None;
    }

    let text = String::from_utf8_lossy(bytes);
    if text.contains("?php") {
        LanguageId::parse("php")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::detect::context::SiblingSnapshot;

    #[test]
    fn php_marker_resolves_php() {
        let c = FileContext::from_bytes(
            "header.inc",
            b"<?php echo 1; ?>".to_vec(),
            Arc::new(SiblingSnapshot::empty()),
        );
        assert_eq!(resolve(&c), LanguageId::parse("php"));
    }

    #[test]
    fn no_marker_resolves_absent() {
        let c = FileContext::from_bytes(
            "header.inc",
            b"just text".to_vec(),
            Arc::new(SiblingSnapshot::empty()),
        );
        assert_eq!(resolve(&c), None);
    }
}
