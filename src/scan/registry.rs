//! Maps a detected [`LanguageId`] to the scanner that counts or classifies
//! its bytes.

use crate::detect::context::LanguageId;
use crate::scan::entity::EventSink;
use crate::scan::languages::{c_like, clearsilver::ClearsilverScanner, fortran, generic::GenericScanner, html::HtmlScanner, syntax_table as tbl, xml::XmlScanner};

/// A scanner turns a byte buffer into a stream of line and/or entity
/// events. `count` and `entities` are separate entry points so a caller
/// that only wants line totals never pays for entity classification.
pub trait Scanner {
    fn count(&self, buf: &[u8], sink: &mut dyn EventSink);
    fn entities(&self, buf: &[u8], sink: &mut dyn EventSink);
}

/// Returns the scanner registered for `lang`, or `None` for languages that
/// are detectable but not yet counted (there are none in the closed set
/// today; the `None` arm exists so adding a detectable language without a
/// scanner fails soft instead of panicking).
pub fn scanner_for(lang: LanguageId) -> Option<Box<dyn Scanner>> {
    let generic = |syntax| -> Option<Box<dyn Scanner>> { Some(Box::new(GenericScanner::new(syntax))) };
    match lang.as_str() {
        "c" => Some(Box::new(c_like::c_scanner())),
        "cpp" => Some(Box::new(c_like::cpp_scanner())),
        "objective_c" => Some(Box::new(c_like::objective_c_scanner())),
        "pike" => generic(tbl::PIKE),
        "html" => Some(Box::new(HtmlScanner)),
        "clearsilver_template" => Some(Box::new(HtmlScanner)),
        "xml" => Some(Box::new(XmlScanner)),
        "clearsilver" => Some(Box::new(ClearsilverScanner)),
        "css" => generic(tbl::CSS),
        "javascript" => generic(tbl::JAVASCRIPT),
        "typescript" => generic(tbl::TYPESCRIPT),
        "php" => generic(tbl::PHP),
        "ruby" => generic(tbl::RUBY),
        "python" => generic(tbl::PYTHON),
        "shell" => generic(tbl::SHELL),
        "fortran_fixed" => Some(Box::new(fortran::FortranFixedScanner)),
        "fortran_free" => Some(Box::new(fortran::FortranFreeScanner)),
        "csharp" => generic(tbl::CSHARP),
        "cs_aspx" => generic(tbl::CS_ASPX),
        "vb_aspx" => generic(tbl::VB_ASPX),
        "classic_basic" => generic(tbl::CLASSIC_BASIC),
        "visualbasic" => generic(tbl::VISUALBASIC),
        "structured_basic" => generic(tbl::STRUCTURED_BASIC),
        "smalltalk" => generic(tbl::SMALLTALK),
        "limbo" => generic(tbl::LIMBO),
        "octave" => generic(tbl::OCTAVE),
        "matlab" => generic(tbl::MATLAB),
        "makefile" => generic(tbl::MAKEFILE),
        "cmake" => generic(tbl::CMAKE),
        "m4" => generic(tbl::M4),
        "json" => generic(tbl::JSON),
        "yaml" => generic(tbl::YAML),
        "toml" => generic(tbl::TOML),
        "markdown" => generic(tbl::MARKDOWN),
        "rust" => generic(tbl::RUST),
        "go" => generic(tbl::GO),
        "java" => generic(tbl::JAVA),
        "perl" => generic(tbl::PERL),
        "lua" => generic(tbl::LUA),
        "haskell" => generic(tbl::HASKELL),
        "ocaml" => generic(tbl::OCAML),
        "clojure" => generic(tbl::CLOJURE),
        "erlang" => generic(tbl::ERLANG),
        "scala" => generic(tbl::SCALA),
        "swift" => generic(tbl::SWIFT),
        "kotlin" => generic(tbl::KOTLIN),
        "sql" => generic(tbl::SQL),
        "dockerfile" => generic(tbl::DOCKERFILE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_language_has_a_scanner() {
        for &name in crate::detect::context::KNOWN_LANGUAGES {
            let id = LanguageId::parse(name).unwrap();
            assert!(scanner_for(id).is_some(), "missing scanner for {name}");
        }
    }
}
