//! Shared plumbing for the CLI subcommands: turning a path list into a
//! sorted file set, then running detection and scanning per file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tracing::warn;

use crate::detect::context::{FileContext, LanguageId, SiblingSnapshot};
use crate::infra::config;
use crate::infra::io::read_file_smart;
use crate::infra::walk::FileWalker;
use crate::scan::entity::{EventSink, LineEvent};
use crate::scan::registry::scanner_for;

/// Expands `paths` into a sorted, deduplicated file list: directories are
/// walked gitignore-aware, plain files are taken as-is. `ignore` (the
/// subcommand's own `--ignore` flag) is merged with the config file's
/// `ignore_patterns`, CLI patterns taking no special precedence over
/// either — both end up in the same glob set.
pub fn collect_files(paths: &[PathBuf], ignore: &[String]) -> Result<Vec<PathBuf>> {
    let mut patterns = config::current().ignore_patterns.clone();
    patterns.extend(ignore.iter().cloned());
    let walker = FileWalker::new(&patterns)?;
    let mut out = Vec::new();
    for path in paths {
        if path.is_dir() {
            out.extend(walker.walk_files(path));
        } else {
            out.push(path.clone());
        }
    }
    out.sort();
    out.dedup();
    Ok(out)
}

/// Builds a sibling snapshot from every file's basename in the same
/// directory as `path`, for the `.h`/`.m`/`.bas` disambiguators.
pub fn siblings_of(path: &Path) -> Arc<SiblingSnapshot> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let names = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter_map(|e| e.file_name().into_string().ok())
                .collect()
        })
        .unwrap_or_default();
    Arc::new(SiblingSnapshot::new(names))
}

/// Detects `path`'s language, returning `None` for binary/unrecognized
/// files. I/O failures are logged and treated the same as "unrecognized".
/// `Config::language_overrides` is consulted first: a matching extension
/// bypasses the detection pipeline entirely, per its doc comment.
pub fn detect_path(path: &Path) -> Option<LanguageId> {
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        if let Some(forced) = config::current().language_overrides.get(ext) {
            match LanguageId::parse(forced) {
                Some(id) => return Some(id),
                None => warn!(extension = ext, forced, "language_overrides names an unknown language, falling back to detection"),
            }
        }
    }
    let Ok(utf8) = camino::Utf8PathBuf::from_path_buf(path.to_path_buf()) else {
        warn!(path = %path.display(), "non-UTF-8 path, skipping");
        return None;
    };
    let ctx = FileContext::new(utf8, siblings_of(path));
    crate::detect::pipeline::detect(&ctx)
}

/// Detects and scans one file into `sink`, doing nothing (but logging) on
/// I/O failure or unrecognized language.
pub fn scan_path_into(path: &Path, sink: &mut dyn EventSink) -> Option<LanguageId> {
    let lang = detect_path(path)?;
    let scanner = scanner_for(lang)?;
    match read_file_smart(path) {
        Ok(content) => {
            scanner.count(content.as_bytes(), sink);
            Some(lang)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to read file, skipping");
            None
        }
    }
}

/// Scans one file and returns its raw line events (used by `individual`
/// and `annotate`, which need per-file detail rather than a fold).
pub fn scan_path_events(path: &Path) -> Option<(LanguageId, Vec<LineEvent>)> {
    use crate::scan::entity::VecSink;
    let mut sink = VecSink::default();
    let lang = scan_path_into(path, &mut sink)?;
    Some((lang, sink.lines))
}
