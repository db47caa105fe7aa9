//! Viewport scroll offset as a subscribable signal.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;
use std::rc::{Rc, Weak};

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;

pub type ScrollHandler = Box<dyn FnMut(f64)>;

/// Something that reports the vertical scroll offset of a viewport.
pub trait ScrollSource {
    /// Current vertical offset in CSS pixels.
    fn offset(&self) -> f64;

    /// Registers `handler` to be called with the new offset on every scroll.
    /// The handler stays registered for as long as the returned subscription
    /// is alive.
    fn subscribe(&self, handler: ScrollHandler) -> ScrollSubscription;
}

/// A live registration on a [`ScrollSource`]. Dropping it detaches the
/// handler.
#[must_use = "the scroll handler is detached as soon as the subscription is dropped"]
pub struct ScrollSubscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// A subscription that was never attached to anything.
    pub fn inert() -> Self {
        Self { detach: None }
    }

    pub fn detach(mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

/// The browser window's `scroll` event and `scrollY`.
///
/// Off the web target there is no window: the offset is always zero and
/// subscriptions are inert.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowScroll;

#[cfg(target_arch = "wasm32")]
impl WindowScroll {
    fn attach(mut handler: ScrollHandler) -> crate::error::Result<ScrollSubscription> {
        use crate::error::DomError;
        use wasm_bindgen::{closure::Closure, JsCast};

        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let reader = window.clone();
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            handler(reader.scroll_y().unwrap_or(0.0));
        });
        window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())?;

        Ok(ScrollSubscription::new(move || {
            if let Err(e) = window
                .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            {
                warn!("Failed to remove scroll listener: {}", DomError::from(e));
            }
        }))
    }
}

impl ScrollSource for WindowScroll {
    #[cfg(target_arch = "wasm32")]
    fn offset(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn offset(&self) -> f64 {
        0.0
    }

    #[cfg(target_arch = "wasm32")]
    fn subscribe(&self, handler: ScrollHandler) -> ScrollSubscription {
        Self::attach(handler).unwrap_or_else(|e| {
            warn!("Failed to listen for scroll events: {}", e);
            ScrollSubscription::inert()
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn subscribe(&self, _handler: ScrollHandler) -> ScrollSubscription {
        ScrollSubscription::inert()
    }
}

#[derive(Default)]
struct ManualState {
    offset: f64,
    next_id: u64,
    handlers: BTreeMap<u64, Rc<RefCell<ScrollHandler>>>,
}

/// A scroll source driven by hand, for hosts without a window and for tests.
#[derive(Clone, Default)]
pub struct ManualScroll {
    state: Rc<RefCell<ManualState>>,
}

impl ManualScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the viewport to `offset` and notifies every live subscriber.
    pub fn emit(&self, offset: f64) {
        let handlers: Vec<_> = {
            let mut state = self.state.borrow_mut();
            state.offset = offset;
            state.handlers.values().cloned().collect()
        };
        // Handlers may detach themselves (or others) while running.
        for handler in handlers {
            (handler.borrow_mut())(offset);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().handlers.len()
    }
}

impl PartialEq for ManualScroll {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl ScrollSource for ManualScroll {
    fn offset(&self) -> f64 {
        self.state.borrow().offset
    }

    fn subscribe(&self, handler: ScrollHandler) -> ScrollSubscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.handlers.insert(id, Rc::new(RefCell::new(handler)));
            id
        };

        let state: Weak<RefCell<ManualState>> = Rc::downgrade(&self.state);
        ScrollSubscription::new(move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().handlers.remove(&id);
            }
        })
    }
}

/// Context handle for the scroll source the navbar listens to.
#[derive(Clone)]
pub struct ScrollSignal(Rc<dyn ScrollSource>);

impl ScrollSignal {
    pub fn new(source: impl ScrollSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    pub fn window() -> Self {
        Self::new(WindowScroll)
    }
}

impl Default for ScrollSignal {
    fn default() -> Self {
        Self::window()
    }
}

impl Deref for ScrollSignal {
    type Target = dyn ScrollSource;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn delivers_to_live_subscribers_only() {
        let source = ManualScroll::new();
        let seen = Rc::new(Cell::new(0.0));

        let sink = seen.clone();
        let subscription = source.subscribe(Box::new(move |offset| sink.set(offset)));
        assert_eq!(source.listener_count(), 1);

        source.emit(42.0);
        assert_eq!(seen.get(), 42.0);

        drop(subscription);
        assert_eq!(source.listener_count(), 0);

        source.emit(7.0);
        assert_eq!(seen.get(), 42.0);
        assert_eq!(source.offset(), 7.0);
    }

    #[test]
    fn explicit_detach_releases_listener() {
        let source = ManualScroll::new();
        let first = source.subscribe(Box::new(|_| {}));
        let _second = source.subscribe(Box::new(|_| {}));
        assert_eq!(source.listener_count(), 2);

        first.detach();
        assert_eq!(source.listener_count(), 1);
    }

    #[test]
    fn subscription_outliving_source_is_harmless() {
        let source = ManualScroll::new();
        let subscription = source.subscribe(Box::new(|_| {}));
        drop(source);
        drop(subscription);
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn window_source_is_inert_off_the_web() {
        let signal = ScrollSignal::window();
        assert_eq!(signal.offset(), 0.0);
        let subscription = signal.subscribe(Box::new(|_| panic!("no scroll events off the web")));
        drop(subscription);
    }
}
