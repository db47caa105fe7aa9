use dioxus::logger::tracing::debug;

use crate::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Offset (in CSS pixels) past which the bar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 20.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Per-instance navbar state.
///
/// The mobile menu is open exactly while a scroll lock guard is held, so the
/// page can never be left locked behind a closed menu, and dropping the
/// state releases the lock.
#[derive(Debug)]
pub struct NavState {
    scrolled: bool,
    menu: Option<ScrollLockGuard>,
    lock: ScrollLock,
}

impl NavState {
    pub fn new(lock: ScrollLock) -> Self {
        Self {
            scrolled: false,
            menu: None,
            lock,
        }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_some()
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = is_scrolled(offset);
    }

    pub fn open_menu(&mut self) {
        if self.menu.is_none() {
            debug!("Opening mobile menu");
            self.menu = Some(self.lock.acquire());
        }
    }

    pub fn close_menu(&mut self) {
        if self.menu.take().is_some() {
            debug!("Closing mobile menu");
        }
    }

    pub fn toggle_menu(&mut self) {
        if self.menu_open() {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_lock::FlagBackend;

    fn state() -> (NavState, FlagBackend) {
        let flag = FlagBackend::new();
        (NavState::new(ScrollLock::new(flag.clone())), flag)
    }

    #[test]
    fn starts_closed_at_top() {
        let (state, flag) = state();
        assert!(!state.scrolled());
        assert!(!state.menu_open());
        assert!(!flag.is_suppressed());
    }

    #[test]
    fn threshold_is_exclusive() {
        let (mut state, _) = state();
        state.on_scroll(20.0);
        assert!(!state.scrolled());
        state.on_scroll(21.0);
        assert!(state.scrolled());
        state.on_scroll(20.5);
        assert!(state.scrolled());
        state.on_scroll(0.0);
        assert!(!state.scrolled());
    }

    #[test]
    fn closing_is_idempotent_from_either_state() {
        for open in [false, true] {
            let (mut state, flag) = state();
            if open {
                state.open_menu();
            }
            state.close_menu();
            state.close_menu();
            assert!(!state.menu_open());
            assert!(!flag.is_suppressed());
        }
    }

    #[test]
    fn menu_open_matches_scroll_lock_under_toggling() {
        let (mut state, flag) = state();
        for step in 1..=9 {
            state.toggle_menu();
            assert_eq!(state.menu_open(), step % 2 == 1);
            assert_eq!(state.menu_open(), flag.is_suppressed());
        }

        state.close_menu();
        state.close_menu();
        assert!(!flag.is_suppressed());
        state.open_menu();
        state.open_menu();
        assert!(flag.is_suppressed());
        state.close_menu();
        assert!(!flag.is_suppressed());
    }

    #[test]
    fn double_toggle_restores_previous_lock_state() {
        let (mut state, flag) = state();
        state.open_menu();
        state.toggle_menu();
        state.toggle_menu();
        assert!(state.menu_open());
        assert!(flag.is_suppressed());
    }

    #[test]
    fn scrolling_and_menu_are_independent() {
        let (mut state, _) = state();
        state.open_menu();
        state.on_scroll(300.0);
        assert!(state.menu_open());
        state.close_menu();
        assert!(state.scrolled());
    }

    #[test]
    fn teardown_releases_lock() {
        let flag = FlagBackend::new();
        let lock = ScrollLock::new(flag.clone());
        let mut state = NavState::new(lock.clone());
        state.open_menu();
        assert!(flag.is_suppressed());

        drop(state);
        assert!(!flag.is_suppressed());
        assert_eq!(lock.holders(), 0);
    }

    #[test]
    fn shares_lock_with_other_overlays() {
        let flag = FlagBackend::new();
        let lock = ScrollLock::new(flag.clone());
        let dialog = lock.acquire();

        let mut state = NavState::new(lock.clone());
        state.open_menu();
        state.close_menu();
        assert!(flag.is_suppressed());

        drop(dialog);
        assert!(!flag.is_suppressed());
    }
}
