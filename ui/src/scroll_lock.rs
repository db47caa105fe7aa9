//! Reference-counted page scroll lock.
//!
//! Overlays that need the page behind them to stay put acquire a
//! [`ScrollLockGuard`]. The page is suppressed while at least one guard is
//! alive and restored when the last one is dropped, so several overlays can
//! share the same document flag without clobbering each other.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use dioxus::logger::tracing::{debug, warn};

/// Whatever actually stops the page from scrolling.
pub trait LockBackend {
    fn suppress(&self);
    fn restore(&self);
}

/// Toggles `overflow` on `document.body`.
///
/// Outside the browser there is no body to style and both calls do nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct BodyOverflow;

impl BodyOverflow {
    #[cfg(target_arch = "wasm32")]
    fn set_overflow(value: &str) -> crate::error::Result<()> {
        use crate::error::DomError;

        let body = web_sys::window()
            .ok_or(DomError::NoWindow)?
            .document()
            .ok_or(DomError::NoDocument)?
            .body()
            .ok_or(DomError::NoBody)?;
        body.style().set_property("overflow", value)?;
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn set_overflow(_value: &str) -> crate::error::Result<()> {
        Ok(())
    }
}

impl LockBackend for BodyOverflow {
    fn suppress(&self) {
        if let Err(e) = Self::set_overflow("hidden") {
            warn!("Failed to suppress page scroll: {}", e);
        }
    }

    fn restore(&self) {
        if let Err(e) = Self::set_overflow("unset") {
            warn!("Failed to restore page scroll: {}", e);
        }
    }
}

/// In-memory backend, useful for hosts without a document and for tests.
#[derive(Debug, Default, Clone)]
pub struct FlagBackend {
    suppressed: Rc<Cell<bool>>,
}

impl FlagBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed.get()
    }
}

impl LockBackend for FlagBackend {
    fn suppress(&self) {
        self.suppressed.set(true);
    }

    fn restore(&self) {
        self.suppressed.set(false);
    }
}

struct Inner {
    holders: Cell<usize>,
    backend: Box<dyn LockBackend>,
}

/// Shared handle to a scroll lock. Clones refer to the same lock.
#[derive(Clone)]
pub struct ScrollLock {
    inner: Rc<Inner>,
}

impl ScrollLock {
    pub fn new(backend: impl LockBackend + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                holders: Cell::new(0),
                backend: Box::new(backend),
            }),
        }
    }

    /// Lock backed by `document.body.style.overflow`.
    pub fn body() -> Self {
        Self::new(BodyOverflow)
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.inner.holders.get() + 1;
        self.inner.holders.set(holders);
        if holders == 1 {
            debug!("Suppressing page scroll");
            self.inner.backend.suppress();
        }
        ScrollLockGuard {
            lock: self.inner.clone(),
        }
    }

    pub fn holders(&self) -> usize {
        self.inner.holders.get()
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }
}

impl Default for ScrollLock {
    fn default() -> Self {
        Self::body()
    }
}

impl PartialEq for ScrollLock {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.holders())
            .finish()
    }
}

/// Keeps the page scroll suppressed until dropped.
#[must_use = "the scroll lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    lock: Rc<Inner>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let holders = self.lock.holders.get().saturating_sub(1);
        self.lock.holders.set(holders);
        if holders == 0 {
            debug!("Restoring page scroll");
            self.lock.backend.restore();
        }
    }
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockGuard")
            .field("holders", &self.lock.holders.get())
            .finish()
    }
}
