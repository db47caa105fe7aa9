use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::scroll::ScrollSignal;
use crate::scroll_lock::ScrollLock;

mod items;
mod state;
mod styles;
mod view;

pub use items::{NavItem, CTA_SECTION, HOME_SECTION, NAV_ITEMS};
pub use state::{is_scrolled, NavState, SCROLL_THRESHOLD};
use view::NavbarView;

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    /// Id of the section currently on screen; the matching item is highlighted
    #[props(into)]
    pub active_section: String,
    /// Called with the id of the selected section
    pub on_navigate: EventHandler<String>,
    #[props(default = "Neptrax".to_string(), into)]
    pub brand: String,
    #[props(default = "Book a Call".to_string(), into)]
    pub cta_label: String,
}

/// Fixed site header with a slide-in menu on narrow screens.
///
/// The scroll source and the scroll lock come from context ([`ScrollSignal`],
/// [`ScrollLock`]) and default to the browser window and `document.body`.
/// Opening the mobile menu holds the lock; closing the menu or unmounting the
/// navbar releases it.
#[component]
pub fn Navbar(props: Props) -> Element {
    let state = use_nav_state();
    let controls = NavControls {
        state,
        on_navigate: props.on_navigate,
    };
    render_navbar(controls, props)
}

/// Navbar state for the current component, kept in sync with the scroll
/// source until the component unmounts.
fn use_nav_state() -> Signal<NavState> {
    let source = use_hook(|| try_consume_context::<ScrollSignal>().unwrap_or_default());
    let mut state = use_signal(|| {
        let mut state = NavState::new(try_consume_context::<ScrollLock>().unwrap_or_default());
        state.on_scroll(source.offset());
        state
    });

    let subscription = use_hook(move || {
        let subscription = source.subscribe(Box::new(move |offset| {
            if is_scrolled(offset) != state.peek().scrolled() {
                state.write().on_scroll(offset);
            }
        }));
        Rc::new(RefCell::new(Some(subscription)))
    });
    use_drop(move || {
        subscription.borrow_mut().take();
    });

    state
}

/// What the navbar's buttons do.
#[derive(Clone, Copy)]
struct NavControls {
    state: Signal<NavState>,
    on_navigate: EventHandler<String>,
}

impl NavControls {
    /// Hands `section` to the owner, then closes the menu.
    fn navigate(mut self, section: &'static str) {
        self.on_navigate.call(section.to_string());
        self.state.write().close_menu();
    }

    fn toggle(mut self) {
        self.state.write().toggle_menu();
    }

    fn close(mut self) {
        self.state.write().close_menu();
    }
}

fn render_navbar(controls: NavControls, props: Props) -> Element {
    let (scrolled, open) = {
        let state = controls.state.read();
        (state.scrolled(), state.menu_open())
    };

    rsx! {
        NavbarView {
            active_section: props.active_section,
            brand: props.brand,
            cta_label: props.cta_label,
            scrolled,
            open,
            on_navigate: move |section: &'static str| controls.navigate(section),
            on_toggle: move |_: ()| controls.toggle(),
            on_close: move |_: ()| controls.close(),
        }
    }
}
