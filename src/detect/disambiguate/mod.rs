//! One pure function per ambiguous extension in spec.md §4.4's table.
//! Each takes a `FileContext` and returns the resolved language, or `None`
//! to fall through to the remaining pipeline stages.

pub mod aspx;
pub mod b;
pub mod bas;
pub mod bi;
pub mod cs;
pub mod fortran;
pub mod h;
pub mod in_ext;
pub mod inc;
pub mod m;
pub mod st;

use crate::detect::context::{FileContext, LanguageId};

/// Dispatch a disambiguator key (from `detect::tables::ExtensionLookup`) to
/// its decision function.
pub fn dispatch(key: &str, ctx: &FileContext) -> Option<LanguageId> {
    match key {
        "m" => Some(m::resolve(ctx)),
        "h" => Some(h::resolve(ctx)),
        "in" => in_ext::resolve(ctx),
        "inc" => inc::resolve(ctx),
        "cs" => Some(cs::resolve(ctx)),
        "fortran" => Some(fortran::resolve(ctx)),
        "aspx" => Some(aspx::resolve(ctx)),
        "bas" => Some(bas::resolve(ctx)),
        "bi" => Some(bi::resolve(ctx)),
        "st" => st::resolve(ctx),
        "b" => Some(b::resolve(ctx)),
        _ => None,
    }
}

/// Count lines containing any of `patterns` as a substring. A rough,
/// deliberately non-lexical scoring primitive shared by several
/// disambiguators (the spec rules it against are themselves heuristic).
pub(super) fn count_lines_matching(text: &str, patterns: &[&str]) -> usize {
    text.lines()
        .filter(|line| patterns.iter().any(|p| line.contains(p)))
        .count()
}

pub(super) fn text_of(ctx: &FileContext) -> String {
    ctx.bytes()
        .map(|b| String::from_utf8_lossy(b).into_owned())
        .unwrap_or_default()
}
