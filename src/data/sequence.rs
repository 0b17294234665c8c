use std::sync::atomic::{AtomicI64, Ordering};

/// Allocator for auto-assigned entity ids. Ids are small, positive and
/// strictly increasing per store, so fixture runs against a clean store are
/// reproducible.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicI64,
}

impl IdSequence {
    pub fn new() -> Self {
        IdSequence {
            next: AtomicI64::new(1),
        }
    }

    pub fn generate(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
