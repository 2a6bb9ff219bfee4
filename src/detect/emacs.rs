//! Stage 5: emacs `-*- ... -*-` mode-line extraction.

use regex::Regex;
use std::sync::OnceLock;

use crate::detect::context::LanguageId;

fn mode_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"-\*-\s*(?:.*?mode:\s*([A-Za-z0-9_+\-]+)|([A-Za-z0-9_+\-]+))\s*-\*-").unwrap()
    })
}

/// Known mode-line identifiers, remapped where emacs's name differs from
/// this crate's language id.
fn remap(name: &str) -> Option<&'static str> {
    let name = name.to_ascii_lowercase();
    let remapped = match name.as_str() {
        "c++" => "cpp",
        "caml" => "ocaml",
        other => {
            return crate::detect::context::KNOWN_LANGUAGES
                .iter()
                .find(|&&known| known == other)
                .copied();
        }
    };
    Some(remapped)
}

/// Parse the first line (or first two lines if the very first is a
/// shebang) looking for an emacs mode-line.
pub fn detect_mode_line(text: &str) -> Option<LanguageId> {
    let mut lines = text.lines();
    let first = lines.next()?;

    let candidate = if first.starts_with("#!") {
        lines.next()
    } else {
        Some(first)
    }?;

    let caps = mode_line_re().captures(candidate)?;
    let name = caps
        .get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str())?;

    remap(name).and_then(LanguageId::parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_mode_line_with_explicit_mode_key() {
        let text = "// -*- mode: c++ -*-\nint main() {}\n";
        assert_eq!(detect_mode_line(text), LanguageId::parse("cpp"));
    }

    #[test]
    fn finds_bare_mode_line_after_shebang() {
        let text = "#!/usr/bin/env python\n# -*- python -*-\nprint(1)\n";
        assert_eq!(detect_mode_line(text), LanguageId::parse("python"));
    }

    #[test]
    fn returns_none_for_unknown_mode() {
        let text = "-*- mode: brainfuck -*-\n";
        assert_eq!(detect_mode_line(text), None);
    }
}
