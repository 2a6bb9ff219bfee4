//! `.m`: objective-c, matlab, octave, limbo.

use super::count_lines_matching;
use crate::detect::context::{FileContext, LanguageId};

const OBJC_PATTERNS: &[&str] = &["@interface", "@implementation", "@end", "#import"];
const LIMBO_PATTERNS: &[&str] = &["implement ", "include \"", "\tpick ", "case {"];
const OCTAVE_ONLY: &[&str] = &["endfunction", "endwhile", "end_try_catch", "end_unwind_protect"];
const MATLAB_PATTERNS: &[&str] = &["function ", "endfor", "endif", "%{", "classdef "];

fn objc_bonus(ctx: &FileContext) -> usize {
    let siblings = ctx.siblings();
    let has_h_sibling = ctx
        .path()
        .file_stem()
        .is_some_and(|stem| siblings.contains_same_stem_ext(stem, "h"));
    if has_h_sibling && !siblings.contains_c_or_cpp_source() {
        5
    } else {
        0
    }
}

pub fn resolve(ctx: &FileContext) -> LanguageId {
    let text = super::text_of(ctx);

    let limbo_score = count_lines_matching(&text, LIMBO_PATTERNS);
    let objc_score = count_lines_matching(&text, OBJC_PATTERNS) + objc_bonus(ctx);
    let octave_score = count_lines_matching(&text, OCTAVE_ONLY)
        + text.lines().filter(|l| l.trim_start().starts_with('#')).count();
    let matlab_score = count_lines_matching(&text, MATLAB_PATTERNS);

    // Priority order on ties: limbo > objective-c > octave > matlab.
    let candidates = [
        (LanguageId::parse("limbo").unwrap(), limbo_score),
        (LanguageId::parse("objective_c").unwrap(), objc_score),
        (LanguageId::parse("octave").unwrap(), octave_score),
        (LanguageId::parse("matlab").unwrap(), matlab_score),
    ];

    let mut best = candidates[0];
    for &(id, score) in &candidates[1..] {
        if score > best.1 {
            best = (id, score);
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn ctx(name: &str, content: &str) -> FileContext {
        FileContext::from_bytes(
            name,
            content.as_bytes().to_vec(),
            Arc::new(crate::detect::context::SiblingSnapshot::empty()),
        )
    }

    #[test]
    fn octave_function_file_detected_as_octave() {
        let c = ctx("f.m", "function y = f(x)\n y = x+1;\nendfunction\n");
        assert_eq!(resolve(&c), LanguageId::parse("octave").unwrap());
    }

    #[test]
    fn objective_c_signatures_win() {
        let c = ctx("f.m", "@interface Foo : NSObject\n@end\n");
        assert_eq!(resolve(&c), LanguageId::parse("objective_c").unwrap());
    }

    #[test]
    fn limbo_outranks_everything_on_a_tie() {
        let c = ctx("f.m", "implement Foo;\ninclude \"sys.m\";\n");
        assert_eq!(resolve(&c), LanguageId::parse("limbo").unwrap());
    }

    #[test]
    fn empty_file_defaults_to_limbo_by_priority() {
        let c = ctx("f.m", "");
        assert_eq!(resolve(&c), LanguageId::parse("limbo").unwrap());
    }
}
