//! `.h`: c, cpp, objective-c, pike.

use crate::detect::context::{FileContext, LanguageId};

const OBJC_PATTERNS: &[&str] = &["@interface", "@end"];
const PIKE_KEYWORDS: &[&str] = &["inherit ", "mapping(", "multiset(", "import Stdio"];
const CPP_ONLY_HEADERS: &[&str] = &[
    "iostream", "vector", "string", "map", "set", "algorithm", "memory", "functional",
];
const CPP_KEYWORDS: &[&str] = &["template", "typename", "class ", "namespace "];

pub fn resolve(ctx: &FileContext) -> LanguageId {
    let siblings = ctx.siblings();
    let stem = ctx.path().file_stem().unwrap_or("");

    if siblings.contains_same_stem_ext(stem, "m") {
        return LanguageId::parse("objective_c").unwrap();
    }

    let text = super::text_of(ctx);

    let objc_hits = super::count_lines_matching(&text, OBJC_PATTERNS);
    if objc_hits > 1 {
        return LanguageId::parse("objective_c").unwrap();
    }

    if siblings.contains_pike_or_pmod() && super::count_lines_matching(&text, PIKE_KEYWORDS) > 0 {
        return LanguageId::parse("pike").unwrap();
    }

    let includes_cpp_header = text.lines().any(|line| {
        let line = line.trim_start();
        line.starts_with("#include") && CPP_ONLY_HEADERS.iter().any(|h| line.contains(h))
    });
    let has_cpp_keyword = super::count_lines_matching(&text, CPP_KEYWORDS) > 0;

    if includes_cpp_header || has_cpp_keyword {
        LanguageId::parse("cpp").unwrap()
    } else {
        LanguageId::parse("c").unwrap()
    }
}
