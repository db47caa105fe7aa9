//! Site chrome shared by every front end of the marketing site.

mod navbar;
pub use navbar::{Navbar, NavItem, CTA_SECTION, HOME_SECTION, NAV_ITEMS, SCROLL_THRESHOLD};

pub mod error;
pub mod scroll;
pub mod scroll_lock;

pub use scroll::{ManualScroll, ScrollSignal, ScrollSource, ScrollSubscription, WindowScroll};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};

mod components;
pub use components::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_table_is_exported_by_name() {
        let ids: Vec<&str> = NAV_ITEMS.iter().map(|item: &NavItem| item.id).collect();
        assert_eq!(ids, ["home", "services", "portfolio", "contact"]);
        assert_eq!(HOME_SECTION, ids[0]);
        assert_eq!(CTA_SECTION, ids[3]);
        assert_eq!(SCROLL_THRESHOLD, 20.0);
    }
}
