//! Stages 2 and 3 of the detection pipeline: exact filename lookup, then
//! extension lookup against a table whose values are either a terminal
//! language id or a disambiguator key (spec.md §9's "dynamic dispatch over
//! extensions" note, translated to a tagged variant).

use crate::detect::context::LanguageId;

/// The extension table's value: either a resolved language, a key naming a
/// disambiguator function in `detect::disambiguate`, or no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionLookup {
    Terminal(LanguageId),
    Disambiguator(&'static str),
    Absent,
}

const fn lang(name: &'static str) -> LanguageId {
    LanguageId::new_unchecked(name)
}

/// Well-known basenames that resolve independent of extension.
const FILENAME_TABLE: &[(&str, LanguageId)] = &[
    ("Makefile", lang("makefile")),
    ("makefile", lang("makefile")),
    ("GNUmakefile", lang("makefile")),
    ("CMakeLists.txt", lang("cmake")),
    ("configure.ac", lang("m4")),
    ("configure.in", lang("m4")),
    ("Dockerfile", lang("dockerfile")),
    ("Rakefile", lang("ruby")),
    ("Gemfile", lang("ruby")),
];

pub fn lookup_filename(name: &str) -> Option<LanguageId> {
    FILENAME_TABLE
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, id)| *id)
}

/// Extension -> terminal language or disambiguator key. Both columns of the
/// spec's table (1. ambiguous extensions requiring a disambiguator, 2.
/// unambiguous extensions resolved directly) live here.
const EXTENSION_TABLE: &[(&str, ExtensionLookup)] = &[
    ("c", ExtensionLookup::Terminal(lang("c"))),
    ("h", ExtensionLookup::Disambiguator("h")),
    ("cpp", ExtensionLookup::Terminal(lang("cpp"))),
    ("cc", ExtensionLookup::Terminal(lang("cpp"))),
    ("cxx", ExtensionLookup::Terminal(lang("cpp"))),
    ("hpp", ExtensionLookup::Terminal(lang("cpp"))),
    ("hxx", ExtensionLookup::Terminal(lang("cpp"))),
    ("m", ExtensionLookup::Disambiguator("m")),
    ("mm", ExtensionLookup::Terminal(lang("objective_c"))),
    ("pike", ExtensionLookup::Terminal(lang("pike"))),
    ("pmod", ExtensionLookup::Terminal(lang("pike"))),
    ("rb", ExtensionLookup::Terminal(lang("ruby"))),
    ("py", ExtensionLookup::Terminal(lang("python"))),
    ("sh", ExtensionLookup::Terminal(lang("shell"))),
    ("bash", ExtensionLookup::Terminal(lang("shell"))),
    ("html", ExtensionLookup::Terminal(lang("html"))),
    ("htm", ExtensionLookup::Terminal(lang("html"))),
    ("xml", ExtensionLookup::Terminal(lang("xml"))),
    ("css", ExtensionLookup::Terminal(lang("css"))),
    ("js", ExtensionLookup::Terminal(lang("javascript"))),
    ("ts", ExtensionLookup::Terminal(lang("typescript"))),
    ("php", ExtensionLookup::Terminal(lang("php"))),
    ("in", ExtensionLookup::Disambiguator("in")),
    ("inc", ExtensionLookup::Disambiguator("inc")),
    ("cs", ExtensionLookup::Disambiguator("cs")),
    ("f", ExtensionLookup::Disambiguator("fortran")),
    ("ftn", ExtensionLookup::Disambiguator("fortran")),
    ("f77", ExtensionLookup::Disambiguator("fortran")),
    ("f90", ExtensionLookup::Disambiguator("fortran")),
    ("f95", ExtensionLookup::Disambiguator("fortran")),
    ("f03", ExtensionLookup::Disambiguator("fortran")),
    ("aspx", ExtensionLookup::Disambiguator("aspx")),
    ("ascx", ExtensionLookup::Disambiguator("aspx")),
    ("bas", ExtensionLookup::Disambiguator("bas")),
    ("bi", ExtensionLookup::Disambiguator("bi")),
    ("st", ExtensionLookup::Disambiguator("st")),
    ("b", ExtensionLookup::Disambiguator("b")),
    ("go", ExtensionLookup::Terminal(lang("go"))),
    ("rs", ExtensionLookup::Terminal(lang("rust"))),
    ("java", ExtensionLookup::Terminal(lang("java"))),
    ("pl", ExtensionLookup::Terminal(lang("perl"))),
    ("pm", ExtensionLookup::Terminal(lang("perl"))),
    ("lua", ExtensionLookup::Terminal(lang("lua"))),
    ("hs", ExtensionLookup::Terminal(lang("haskell"))),
    ("ml", ExtensionLookup::Terminal(lang("ocaml"))),
    ("mli", ExtensionLookup::Terminal(lang("ocaml"))),
    ("clj", ExtensionLookup::Terminal(lang("clojure"))),
    ("erl", ExtensionLookup::Terminal(lang("erlang"))),
    ("scala", ExtensionLookup::Terminal(lang("scala"))),
    ("swift", ExtensionLookup::Terminal(lang("swift"))),
    ("kt", ExtensionLookup::Terminal(lang("kotlin"))),
    ("sql", ExtensionLookup::Terminal(lang("sql"))),
    ("json", ExtensionLookup::Terminal(lang("json"))),
    ("yaml", ExtensionLookup::Terminal(lang("yaml"))),
    ("yml", ExtensionLookup::Terminal(lang("yaml"))),
    ("toml", ExtensionLookup::Terminal(lang("toml"))),
    ("md", ExtensionLookup::Terminal(lang("markdown"))),
    ("cmake", ExtensionLookup::Terminal(lang("cmake"))),
];

/// Case-sensitive lookup first, falling back to the lowercased extension.
pub fn lookup_extension(ext: &str) -> ExtensionLookup {
    if let Some((_, v)) = EXTENSION_TABLE.iter().find(|(known, _)| *known == ext) {
        return *v;
    }
    let lower = ext.to_ascii_lowercase();
    EXTENSION_TABLE
        .iter()
        .find(|(known, _)| *known == lower)
        .map(|(_, v)| *v)
        .unwrap_or(ExtensionLookup::Absent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_lookup_resolves_makefile() {
        assert_eq!(lookup_filename("Makefile"), LanguageId::parse("makefile"));
        assert_eq!(lookup_filename("random.txt"), None);
    }

    #[test]
    fn extension_lookup_dispatches_ambiguous_suffixes() {
        assert_eq!(lookup_extension("h"), ExtensionLookup::Disambiguator("h"));
        assert_eq!(
            lookup_extension("RS"),
            ExtensionLookup::Terminal(LanguageId::parse("rust").unwrap())
        );
        assert_eq!(lookup_extension("xyz"), ExtensionLookup::Absent);
    }
}
