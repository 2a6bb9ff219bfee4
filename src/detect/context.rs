use std::sync::{Arc, OnceLock};

use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};

use crate::infra::io::{FileContent, read_file_smart};

/// The closed set of language identifiers this crate can detect and scan.
/// Intentionally smaller than the ~100 identifiers real polyglot analyzers
/// recognize; every disambiguator and scanner family named in the spec's
/// literal scenarios is represented, plus a broad tail of common
/// single-scanner languages handled by the generic table-driven scanner.
pub const KNOWN_LANGUAGES: &[&str] = &[
    "c",
    "cpp",
    "objective_c",
    "pike",
    "html",
    "xml",
    "css",
    "javascript",
    "typescript",
    "php",
    "clearsilver",
    "clearsilver_template",
    "ruby",
    "python",
    "shell",
    "fortran_fixed",
    "fortran_free",
    "csharp",
    "cs_aspx",
    "vb_aspx",
    "classic_basic",
    "visualbasic",
    "structured_basic",
    "smalltalk",
    "limbo",
    "octave",
    "matlab",
    "makefile",
    "cmake",
    "m4",
    "json",
    "yaml",
    "toml",
    "markdown",
    "rust",
    "go",
    "java",
    "perl",
    "lua",
    "haskell",
    "ocaml",
    "clojure",
    "erlang",
    "scala",
    "swift",
    "kotlin",
    "sql",
    "dockerfile",
];

/// An opaque language identifier drawn from `KNOWN_LANGUAGES`. Never
/// constructed from an arbitrary string outside this module's tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageId(&'static str);

impl LanguageId {
    pub(crate) const fn new_unchecked(name: &'static str) -> Self {
        LanguageId(name)
    }

    /// Look up a `LanguageId` by name, validating membership in the closed set.
    pub fn parse(name: &str) -> Option<Self> {
        KNOWN_LANGUAGES
            .iter()
            .find(|&&known| known == name)
            .map(|&known| LanguageId(known))
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Immutable set of sibling basenames in the same logical source set, with
/// three lazily-computed, memoized flags consulted by the `.m`/`.h`/`.bas`
/// disambiguators. Cheap to share across files via `Arc`.
#[derive(Debug)]
pub struct SiblingSnapshot {
    basenames: Vec<String>,
    contains_m: OnceLock<bool>,
    contains_pike_or_pmod: OnceLock<bool>,
    contains_vb: OnceLock<bool>,
}

impl SiblingSnapshot {
    pub fn new(basenames: Vec<String>) -> Self {
        Self {
            basenames,
            contains_m: OnceLock::new(),
            contains_pike_or_pmod: OnceLock::new(),
            contains_vb: OnceLock::new(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    fn has_ext(&self, ext: &str) -> bool {
        self.basenames
            .iter()
            .any(|name| name.rsplit('.').next() == Some(ext))
    }

    pub fn contains_m(&self) -> bool {
        *self.contains_m.get_or_init(|| self.has_ext("m"))
    }

    pub fn contains_pike_or_pmod(&self) -> bool {
        *self
            .contains_pike_or_pmod
            .get_or_init(|| self.has_ext("pike") || self.has_ext("pmod"))
    }

    pub fn contains_vb(&self) -> bool {
        *self.contains_vb.get_or_init(|| {
            ["vb", "vba", "vbs", "frm", "frx"]
                .iter()
                .any(|ext| self.has_ext(ext))
        })
    }

    pub fn contains_c_or_cpp_source(&self) -> bool {
        ["c", "cc", "cpp", "cxx"].iter().any(|ext| self.has_ext(ext))
    }

    /// True if a sibling with the given stem and extension exists, e.g.
    /// `Foo.h` looking for a sibling `Foo.m`.
    pub fn contains_same_stem_ext(&self, stem: &str, ext: &str) -> bool {
        self.basenames.iter().any(|name| {
            let Some((name_stem, name_ext)) = name.rsplit_once('.') else {
                return false;
            };
            name_stem == stem && name_ext == ext
        })
    }
}

/// A bundle consumed by detection: the file's path, its lazily-loaded byte
/// buffer, and a shared sibling snapshot.
pub struct FileContext {
    path: Utf8PathBuf,
    buffer: OnceLock<FileContent>,
    siblings: Arc<SiblingSnapshot>,
}

impl FileContext {
    pub fn new(path: impl Into<Utf8PathBuf>, siblings: Arc<SiblingSnapshot>) -> Self {
        Self {
            path: path.into(),
            buffer: OnceLock::new(),
            siblings,
        }
    }

    /// Construct a context with an already-realized buffer, useful for tests
    /// and for the synthetic filenames the `.in` disambiguator re-detects.
    pub fn from_bytes(path: impl Into<Utf8PathBuf>, bytes: Vec<u8>, siblings: Arc<SiblingSnapshot>) -> Self {
        let ctx = Self::new(path, siblings);
        let _ = ctx.buffer.set(FileContent::Buffered(bytes));
        ctx
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        self.path.file_name().unwrap_or("")
    }

    pub fn extension(&self) -> Option<&str> {
        self.path.extension()
    }

    pub fn siblings(&self) -> &SiblingSnapshot {
        &self.siblings
    }

    pub fn siblings_arc(&self) -> Arc<SiblingSnapshot> {
        Arc::clone(&self.siblings)
    }

    /// Byte contents, read from disk on first access and cached for the
    /// lifetime of this context.
    pub fn bytes(&self) -> Result<&[u8]> {
        let content = match self.buffer.get() {
            Some(content) => content,
            None => {
                let loaded = read_file_smart(self.path.as_std_path())?;
                let _ = self.buffer.set(loaded);
                self.buffer.get().expect("just set")
            }
        };
        Ok(content.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_id_parse_rejects_unknown() {
        assert!(LanguageId::parse("c").is_some());
        assert!(LanguageId::parse("brainfuck").is_none());
    }

    #[test]
    fn sibling_snapshot_memoizes_flags() {
        let snap = SiblingSnapshot::new(vec!["Foo.m".to_string(), "Foo.h".to_string()]);
        assert!(snap.contains_m());
        assert!(snap.contains_m()); // second call hits the OnceLock
        assert!(snap.contains_same_stem_ext("Foo", "m"));
        assert!(!snap.contains_vb());
    }
}
