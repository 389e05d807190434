//! Identifiers for host-owned curves.

use serde::{Deserialize, Serialize};

/// Opaque handle to a single scalar animation curve owned by the host scene.
/// The core only ever reads and writes through this handle; it carries no
/// meaning beyond identity.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CurveId(pub u32);

/// Monotonic allocator for CurveId, for hosts that mint their own handles.
#[derive(Default, Debug)]
pub struct CurveIdAllocator {
    next: u32,
}

impl CurveIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc(&mut self) -> CurveId {
        let id = CurveId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = CurveIdAllocator::new();
        assert_eq!(alloc.alloc(), CurveId(0));
        assert_eq!(alloc.alloc(), CurveId(1));
        alloc.reset();
        assert_eq!(alloc.alloc(), CurveId(0));
    }
}
