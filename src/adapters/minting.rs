//! Id minter adapters.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::ports::IdMinter;

/// Production minter: random UUID v4 strings.
#[derive(Debug, Default)]
pub struct UuidMinter;

impl UuidMinter {
    pub fn new() -> Self {
        Self
    }
}

impl IdMinter for UuidMinter {
    fn mint(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic minter for tests: `prefix-0`, `prefix-1`, ...
///
/// Collision-free as long as a single prefix is used per test.
#[derive(Debug)]
pub struct SequenceMinter {
    prefix: String,
    next: AtomicU64,
}

impl SequenceMinter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(0),
        }
    }

    /// How many ids have been minted so far.
    pub fn minted(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

impl IdMinter for SequenceMinter {
    fn mint(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{}-{}", self.prefix, n)
    }
}
