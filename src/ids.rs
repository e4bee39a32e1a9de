use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of unique, opaque ids for participants and expenses.
pub trait IdSupplier: Send + Sync {
    fn next_id(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UuidSupplier;

impl IdSupplier for UuidSupplier {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Hands out `<prefix>-1`, `<prefix>-2`, ... Useful where ids must be
/// predictable, e.g. in tests.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: &str) -> Self {
        SequentialIds {
            prefix: prefix.to_string(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdSupplier for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}
