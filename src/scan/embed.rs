//! Host/guest scanner call-stack management. A host scanner's step
//! function calls `Supervisor::call` on an entry pattern and
//! `Supervisor::return_` on the matching outry; the supervisor owns the
//! activation stack and the blank-entry/blank-outry bookkeeping.

use smallvec::SmallVec;

use crate::detect::context::LanguageId;
use crate::scan::kernel::LineFlags;

/// Generous relative to "typically one or two levels" (spec.md §4.3);
/// overflow degrades to host `any` bytes rather than recursing further.
pub const MAX_EMBED_DEPTH: usize = 4;

/// Snapshot captured on a nested call: which guest took over, and the
/// host's line flags to restore on return.
pub struct ActivationRecord {
    pub guest: LanguageId,
    pub saved_host_flags: LineFlags,
}

#[derive(Debug, PartialEq, Eq)]
pub enum EmbedFault {
    DepthExceeded,
}

#[derive(Default)]
pub struct Supervisor {
    stack: SmallVec<[ActivationRecord; MAX_EMBED_DEPTH]>,
}

impl Supervisor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push a new activation, snapshotting the host's current flags. Fails
    /// once `MAX_EMBED_DEPTH` is reached; the caller should then treat the
    /// remaining bytes as host `any`.
    pub fn call(&mut self, guest: LanguageId, host_flags: LineFlags) -> Result<(), EmbedFault> {
        if self.stack.len() >= MAX_EMBED_DEPTH {
            return Err(EmbedFault::DepthExceeded);
        }
        self.stack.push(ActivationRecord {
            guest,
            saved_host_flags: host_flags,
        });
        Ok(())
    }

    /// Pop the most recent activation, returning the flags the host should
    /// resume with.
    pub fn return_(&mut self) -> Option<LineFlags> {
        self.stack.pop().map(|record| record.saved_host_flags)
    }

    pub fn current_guest(&self) -> Option<LanguageId> {
        self.stack.last().map(|record| record.guest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_and_return_round_trip_flags() {
        let mut sup = Supervisor::new();
        let host_flags = LineFlags::new(5);
        sup.call(LanguageId::parse("css").unwrap(), host_flags).unwrap();
        assert_eq!(sup.depth(), 1);
        let restored = sup.return_().unwrap();
        assert_eq!(restored.line_start(), 5);
        assert_eq!(sup.depth(), 0);
    }

    #[test]
    fn depth_overflow_is_reported() {
        let mut sup = Supervisor::new();
        for _ in 0..MAX_EMBED_DEPTH {
            sup.call(LanguageId::parse("css").unwrap(), LineFlags::new(0)).unwrap();
        }
        assert_eq!(
            sup.call(LanguageId::parse("css").unwrap(), LineFlags::new(0)),
            Err(EmbedFault::DepthExceeded)
        );
    }
}
