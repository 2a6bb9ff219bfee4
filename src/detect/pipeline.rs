//! The seven-stage detection pipeline. The first stage to yield a
//! non-absent decision wins.

use tracing::instrument;

use crate::detect::binary::{has_null_byte_in_prefix, is_known_binary_extension};
use crate::detect::context::{FileContext, LanguageId};
use crate::detect::disambiguate;
use crate::detect::emacs::detect_mode_line;
use crate::detect::probe::{NativeProbe, TypeProbe};
use crate::detect::tables::{ExtensionLookup, lookup_extension, lookup_filename};

/// Run the full pipeline with the default native type probe.
#[instrument(skip(ctx), fields(path = %ctx.path()))]
pub fn detect(ctx: &FileContext) -> Option<LanguageId> {
    detect_with_probe(ctx, &NativeProbe)
}

/// Run the pipeline with a caller-supplied stage-6 probe, so a future
/// subprocess-backed probe can be substituted without touching the other
/// six stages.
pub fn detect_with_probe(ctx: &FileContext, probe: &dyn TypeProbe) -> Option<LanguageId> {
    // Stage 1: binary rejection.
    if let Some(ext) = ctx.extension()
        && is_known_binary_extension(ext)
    {
        return None;
    }
    let Ok(bytes) = ctx.bytes() else {
        return None;
    };
    if has_null_byte_in_prefix(bytes) {
        return None;
    }

    // Stage 2: exact filename lookup.
    if let Some(id) = lookup_filename(ctx.file_name()) {
        return Some(id);
    }

    // Stage 3: extension lookup.
    if let Some(ext) = ctx.extension() {
        match lookup_extension(ext) {
            ExtensionLookup::Terminal(id) => return Some(id),
            ExtensionLookup::Disambiguator(key) => {
                // Stage 4: disambiguator dispatch.
                if let Some(id) = disambiguate::dispatch(key, ctx) {
                    return Some(id);
                }
            }
            ExtensionLookup::Absent => {}
        }
    }

    // Stage 5: emacs mode-line.
    let text = String::from_utf8_lossy(bytes);
    if let Some(id) = detect_mode_line(&text) {
        return Some(id);
    }

    // Stage 6: external type probe.
    if let Some(id) = probe.identify(ctx.path(), bytes) {
        return Some(id);
    }

    // Stage 7.
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::context::SiblingSnapshot;
    use std::sync::Arc;

    fn ctx(name: &str, content: &[u8], siblings: Vec<String>) -> FileContext {
        FileContext::from_bytes(name, content.to_vec(), Arc::new(SiblingSnapshot::new(siblings)))
    }

    #[test]
    fn detects_plain_c_by_extension() {
        let c = ctx("main.c", b"int main() { return 0; }\n", vec![]);
        assert_eq!(detect(&c), LanguageId::parse("c"));
    }

    #[test]
    fn known_binary_extension_short_circuits() {
        let c = ctx("logo.png", b"\x89PNG\r\n", vec![]);
        assert_eq!(detect(&c), None);
    }

    #[test]
    fn null_byte_in_prefix_is_binary() {
        let mut content = vec![b'a'; 10];
        content[3] = 0;
        let c = ctx("mystery.dat", &content, vec![]);
        assert_eq!(detect(&c), None);
    }

    #[test]
    fn h_file_with_same_stem_m_sibling_is_objective_c() {
        let c = ctx("Foo.h", b"int x;\n", vec!["Foo.m".to_string()]);
        assert_eq!(detect(&c), LanguageId::parse("objective_c"));
    }

    #[test]
    fn cs_file_with_clearsilver_marker_detected_as_template() {
        let c = ctx("page.cs", b"<?cs include:\"x\" ?>\n", vec![]);
        assert_eq!(detect(&c), LanguageId::parse("clearsilver_template"));
    }

    #[test]
    fn cs_file_without_marker_detected_as_csharp() {
        let c = ctx("page.cs", b"class Foo {}\n", vec![]);
        assert_eq!(detect(&c), LanguageId::parse("csharp"));
    }

    #[test]
    fn determinism_repeated_calls_agree() {
        let c = ctx("main.c", b"int main() {}\n", vec![]);
        assert_eq!(detect(&c), detect(&c));
    }

    #[test]
    fn memoization_does_not_change_outcome() {
        // Calling contains_m() before and after detection must not change
        // the disambiguation result, since the flags are memoized once per
        // snapshot regardless of read order.
        let siblings = Arc::new(SiblingSnapshot::new(vec!["Foo.m".to_string()]));
        let warm = FileContext::from_bytes("Foo.h", b"int x;\n".to_vec(), Arc::clone(&siblings));
        let _ = siblings.contains_m();
        let cold = FileContext::from_bytes("Foo.h", b"int x;\n".to_vec(), siblings);
        assert_eq!(detect(&warm), detect(&cold));
    }
}
