//! Stage 6: a pluggable "identify this file by content" probe, isolating
//! the external `file`-command dependency behind a trait (spec.md §9's
//! design note) so a native classifier can stand in without a subprocess.

use crate::detect::context::LanguageId;

pub trait TypeProbe {
    /// Inspect the buffer (and, if needed, the realized path) and return a
    /// best-guess language, or `None` for "no answer" (spec.md §7: probe
    /// failure is never an error, just a fallthrough).
    fn identify(&self, path: &camino::Utf8Path, buf: &[u8]) -> Option<LanguageId>;
}

/// A small magic-number/shebang/textual heuristic sniff, entirely in Rust.
/// Mirrors the subset of `file(1)` output patterns the spec asks the
/// pipeline to recognize: "script text", "shell script text", "XML document
/// text".
pub struct NativeProbe;

impl TypeProbe for NativeProbe {
    fn identify(&self, _path: &camino::Utf8Path, buf: &[u8]) -> Option<LanguageId> {
        let text = std::str::from_utf8(buf).ok()?;
        let first_line = text.lines().next().unwrap_or("");

        if first_line.starts_with("#!") {
            let interpreter = shebang_interpreter(first_line)?;
            return shell_interpreter_to_language(interpreter);
        }

        let trimmed = text.trim_start();
        if trimmed.starts_with("<?xml") {
            return LanguageId::parse("xml");
        }

        None
    }
}

/// Extract the interpreter basename from a shebang line, unwrapping a
/// leading `/usr/bin/env` wrapper the way `ohcount`'s probe does.
fn shebang_interpreter(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("#!")?.trim();
    let mut parts = rest.split_whitespace();
    let mut first = parts.next()?;
    let first_basename = first.rsplit('/').next().unwrap_or(first);

    if first_basename == "env" {
        first = parts.next()?;
    }

    Some(first.rsplit('/').next().unwrap_or(first))
}

fn shell_interpreter_to_language(interpreter: &str) -> Option<LanguageId> {
    let name = match interpreter {
        "bash" | "sh" | "dash" | "zsh" | "ksh" => "shell",
        "python" | "python2" | "python3" => "python",
        "ruby" => "ruby",
        "perl" => "perl",
        "lua" => "lua",
        _ => return None,
    };
    LanguageId::parse(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_probe_maps_bash_shebang_to_shell() {
        let probe = NativeProbe;
        let path = camino::Utf8PathBuf::from("script");
        let buf = b"#!/usr/bin/env bash\necho hi\n";
        assert_eq!(probe.identify(&path, buf), LanguageId::parse("shell"));
    }

    #[test]
    fn native_probe_maps_xml_declaration() {
        let probe = NativeProbe;
        let path = camino::Utf8PathBuf::from("file.cfg");
        let buf = b"<?xml version=\"1.0\"?>\n<root/>\n";
        assert_eq!(probe.identify(&path, buf), LanguageId::parse("xml"));
    }

    #[test]
    fn native_probe_returns_none_for_unrecognized_content() {
        let probe = NativeProbe;
        let path = camino::Utf8PathBuf::from("data");
        let buf = b"just some plain text\n";
        assert_eq!(probe.identify(&path, buf), None);
    }
}
