//! Exclusive ownership of the page's "body scroll suppressed" flag.
//!
//! The wizard is modal: while it is open the page behind it must not scroll,
//! and only one wizard may be open at a time. A [`ScrollLock`] is shared by
//! the page; an open wizard holds the single [`ScrollGuard`] and the flag is
//! released when the guard is dropped, whichever way the wizard closes.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Shared handle to the page's scroll suppression flag.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    suppressed: Arc<AtomicBool>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppresses scrolling, or returns `None` if another guard already
    /// holds the flag.
    pub fn try_acquire(&self) -> Option<ScrollGuard> {
        self.suppressed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ScrollGuard {
                suppressed: Arc::clone(&self.suppressed),
            })
    }

    /// Whether background scrolling is currently suppressed.
    pub fn is_suppressed(&self) -> bool {
        self.suppressed.load(Ordering::Acquire)
    }
}

/// Holds scroll suppression until dropped.
#[derive(Debug)]
pub struct ScrollGuard {
    suppressed: Arc<AtomicBool>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.suppressed.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_guard_at_a_time() {
        let lock = ScrollLock::new();
        let guard = lock.try_acquire().expect("first acquire succeeds");
        assert!(lock.is_suppressed());
        assert!(lock.clone().try_acquire().is_none());

        drop(guard);
        assert!(!lock.is_suppressed());
        assert!(lock.try_acquire().is_some());
    }
}
