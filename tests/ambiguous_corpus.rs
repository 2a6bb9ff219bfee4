//! Locks the disambiguator priority order against a small hand-picked
//! corpus, so a future reordering of a `match` arm or a scoring table
//! fails immediately instead of silently reclassifying files.

use std::sync::Arc;

use polyloc::detect::pipeline::detect;
use polyloc::detect::{FileContext, LanguageId, SiblingSnapshot};

fn ctx(name: &str, content: &[u8], siblings: &[&str]) -> FileContext {
    let snap = SiblingSnapshot::new(siblings.iter().map(|s| s.to_string()).collect());
    FileContext::from_bytes(name, content.to_vec(), Arc::new(snap))
}

#[test]
fn m_extension_prefers_limbo_over_everything_else() {
    let c = ctx("mod.m", b"implement Foo;\n", &["mod.dis"]);
    assert_eq!(detect(&c), LanguageId::parse("limbo"));
}

#[test]
fn m_extension_prefers_objective_c_over_octave_and_matlab() {
    let c = ctx("Foo.m", b"@interface Foo : NSObject\n@end\n", &[]);
    assert_eq!(detect(&c), LanguageId::parse("objective_c"));
}

#[test]
fn m_extension_falls_back_to_octave_heuristic() {
    let c = ctx("f.m", b"function y = f(x)\n y = x+1;\nendfunction\n", &[]);
    assert_eq!(detect(&c), LanguageId::parse("octave"));
}

#[test]
fn h_extension_prefers_objective_c_sibling_over_plain_c_content() {
    let c = ctx("Foo.h", b"int x;\n", &["Foo.m"]);
    assert_eq!(detect(&c), LanguageId::parse("objective_c"));
}

#[test]
fn h_extension_without_sibling_falls_back_to_content_scoring() {
    let c = ctx("foo.h", b"#include <stdio.h>\ntypedef struct { int x; } foo_t;\n", &[]);
    assert!(matches!(detect(&c), Some(id) if id == LanguageId::parse("c").unwrap() || id == LanguageId::parse("cpp").unwrap()));
}

#[test]
fn cs_extension_clearsilver_marker_wins_over_csharp_default() {
    let with_marker = ctx("page.cs", b"<?cs include:\"x\" ?>\nclass Foo {}\n", &[]);
    assert_eq!(detect(&with_marker), LanguageId::parse("clearsilver_template"));

    let without_marker = ctx("page.cs", b"namespace Foo { class Bar {} }\n", &[]);
    assert_eq!(detect(&without_marker), LanguageId::parse("csharp"));
}

#[test]
fn bas_extension_classic_line_numbers_beat_structured_form() {
    let classic = ctx("prog.bas", b"10 PRINT \"HI\"\n20 GOTO 10\n", &[]);
    assert_eq!(detect(&classic), LanguageId::parse("classic_basic"));
}
