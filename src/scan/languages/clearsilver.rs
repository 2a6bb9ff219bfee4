//! ClearSilver template directives use `#` for line comments inside a
//! `<?cs ... ?>` block. Standalone (for a bare `.cs` template snippet) and
//! as the guest language `html.rs` embeds into.

use crate::detect::context::LanguageId;
use crate::scan::entity::{EntityKind, EventSink};
use crate::scan::kernel::Kernel;
use crate::scan::registry::Scanner;

pub struct ClearsilverScanner;

impl ClearsilverScanner {
    pub fn scan(&self, buf: &[u8], sink: &mut dyn EventSink, entity_mode: bool) {
        let mut kernel = Kernel::new(LanguageId::parse("clearsilver").expect("clearsilver is known"));
        scan_into(&mut kernel, buf, sink, entity_mode);
    }
}

/// Scans the whole buffer as ClearSilver, driving an existing `Kernel`
/// rather than constructing a fresh one. Used standalone (a bare `.cs`
/// template) and, one `step` at a time, by `html.rs`'s embedding path.
pub fn scan_into(kernel: &mut Kernel, buf: &[u8], sink: &mut dyn EventSink, entity_mode: bool) {
    let mut i = 0usize;
    while i < buf.len() {
        i = step(kernel, buf, i, sink, entity_mode, b"");
    }
}

/// Scans one token of ClearSilver syntax (`#` line comment, whitespace run,
/// or code) starting at `i`, returning the position just past it. `stop_at`
/// ends a code run early when it matches, without consuming it — an
/// embedding host uses this to hand control back at its own exit marker
/// (e.g. `?>`) instead of swallowing it into a guest token. Pass `b""` when
/// there is no such marker (the standalone case).
pub fn step(kernel: &mut Kernel, buf: &[u8], i: usize, sink: &mut dyn EventSink, entity_mode: bool, stop_at: &[u8]) -> usize {
    let len = buf.len();
    let b = buf[i];

    if b == b'\n' {
        if entity_mode {
            kernel.emit_entity(sink, EntityKind::Newline, i, i + 1);
        }
        kernel.emit_newline(sink, i + 1);
        return i + 1;
    }

    if matches!(b, b' ' | b'\t' | b'\r') {
        let start = i;
        let mut i = i;
        while i < len && matches!(buf[i], b' ' | b'\t' | b'\r') {
            i += 1;
        }
        if entity_mode {
            kernel.emit_entity(sink, EntityKind::Space, start, i);
        }
        return i;
    }

    if b == b'#' {
        let start = i;
        let mut i = i;
        kernel.mark_comment();
        while i < len && buf[i] != b'\n' {
            i += 1;
        }
        if entity_mode {
            kernel.emit_entity(sink, EntityKind::Comment, start, i);
        }
        return i;
    }

    let start = i;
    let mut i = i;
    kernel.mark_code();
    i += 1;
    while i < len
        && !matches!(buf[i], b'\n' | b' ' | b'\t' | b'\r' | b'#')
        && !(!stop_at.is_empty() && buf[i..].starts_with(stop_at))
    {
        i += 1;
    }
    if entity_mode {
        kernel.emit_entity(sink, EntityKind::Any, start, i);
    }
    i
}

impl Scanner for ClearsilverScanner {
    fn count(&self, buf: &[u8], sink: &mut dyn EventSink) {
        self.scan(buf, sink, false);
    }

    fn entities(&self, buf: &[u8], sink: &mut dyn EventSink) {
        self.scan(buf, sink, true);
    }
}
