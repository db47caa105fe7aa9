//! Moves the viewport to a page section.

#[cfg(target_arch = "wasm32")]
pub fn section(id: &str) {
    use dioxus::logger::tracing::warn;
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("No section with id {}", id),
    }
}

/// Nothing to scroll outside the browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn section(_id: &str) {}
