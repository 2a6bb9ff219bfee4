//! **polyloc** - A fast polyglot source-code composition analyzer
//!
//! Detects the programming language of each file in a tree and partitions
//! its bytes into code, comment, and blank lines, including embedded
//! languages (CSS/JS inside HTML, PHP inside HTML, ClearSilver templates).

/// Command-line interface with clap integration
pub mod cli;

/// Language detection: binary screening, filename/extension lookup,
/// content-based disambiguation, emacs mode-lines, and a native type probe.
pub mod detect {
    /// File context, sibling snapshot, and the closed language-id enumeration
    pub mod context;
    pub use context::{FileContext, LanguageId, SiblingSnapshot};

    /// Per-extension disambiguators for ambiguous suffixes (.m, .h, .cs, ...)
    pub mod disambiguate;

    /// Fixed binary-suffix screen and null-byte sniff
    pub mod binary;

    /// Exact filename and extension lookup tables
    pub mod tables;

    /// Emacs `-*- mode: ... -*-` mode-line extraction
    pub mod emacs;

    /// Pluggable "identify this file by content" probe (stage 6)
    pub mod probe;
    pub use probe::{NativeProbe, TypeProbe};

    /// The seven-stage detection pipeline
    pub mod pipeline;
    pub use pipeline::detect;
}

/// The scanning core: ScannerKernel, EmbeddingSupervisor, and per-language
/// scanners, producing line/entity event streams from a byte buffer.
pub mod scan {
    /// Entity kinds, spans, line events, and the event sink trait
    pub mod entity;
    pub use entity::{EntityKind, EntitySpan, EventSink, LineEvent, LineKind};

    /// The reusable scanning runtime shared by every language scanner
    pub mod kernel;
    pub use kernel::Kernel;

    /// Host/guest scanner call-stack management (entry/outry transitions)
    pub mod embed;
    pub use embed::Supervisor;

    /// The `Scanner` trait and the language registry
    pub mod registry;
    pub use registry::{Scanner, scanner_for};

    /// One module per language family
    pub mod languages;
}

/// Folds classification events into per-language totals (trivial by design;
/// the core scope explicitly excludes aggregation/output formatting).
pub mod aggregate;
pub use aggregate::{LanguageTotals, Summary};

/// Infrastructure: configuration, I/O, and directory walking
pub mod infra {
    /// Configuration management with TOML support
    pub mod config;
    pub use config::{Config, init as config_init, load_config};

    /// Memory-mapped / buffered file I/O
    pub mod io;
    pub use io::{FileContent, read_file_smart};

    /// CRLF/LF-robust line indexing for O(1) line<->byte mapping
    pub mod line_index;
    pub use line_index::NewlineIndex;

    /// Gitignore-aware directory walking
    pub mod walk;
    pub use walk::FileWalker;
}

/// CLI subcommand implementations: summary, detect, annotate, individual,
/// licenses, gestalt, raw-entities
pub mod cli_ext {
    pub(crate) mod common;
    pub mod summary;
    pub mod detect_cmd;
    pub mod annotate;
    pub mod individual;
    pub mod licenses;
    pub mod gestalt;
    pub mod raw_entities;
}

// Strategic re-exports for a clean CLI entry point
pub use cli::{AppContext, Cli, Commands};
