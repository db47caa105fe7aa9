use dioxus::prelude::*;

use super::items::{CTA_SECTION, HOME_SECTION, NAV_ITEMS};
use super::styles;
use crate::components::{CloseIcon, MenuIcon};

const LOGO: Asset = asset!("/assets/logo.svg");

#[derive(Props, Clone, PartialEq)]
pub struct ViewProps {
    #[props(into)]
    pub active_section: String,
    #[props(into)]
    pub brand: String,
    #[props(into)]
    pub cta_label: String,
    pub scrolled: bool,
    pub open: bool,
    pub on_navigate: EventHandler<&'static str>,
    pub on_toggle: EventHandler,
    pub on_close: EventHandler,
}

/// Button that sends a fixed section id. The id is also rendered as
/// `data-section`.
#[component]
fn NavButton(
    section: &'static str,
    #[props(into)] class: String,
    on_navigate: EventHandler<&'static str>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{class}",
            "data-section": section,
            onclick: move |_| on_navigate.call(section),
            {children}
        }
    }
}

/// Navbar markup for a given `scrolled`/`open` state. Holds no state itself.
#[component]
pub fn NavbarView(props: ViewProps) -> Element {
    let bar = styles::bar(props.scrolled);
    let panel_translate = styles::panel(props.open);
    let brand_text = styles::BRAND_TEXT;
    let cta = styles::CTA;
    let on_navigate = props.on_navigate;
    let on_toggle = props.on_toggle;
    let on_close = props.on_close;
    let active_section = props.active_section;

    rsx! {
      nav { class: "fixed top-0 left-0 right-0 z-50 transition-all duration-300 {bar}",
        div { class: "max-w-7xl mx-auto px-4 sm:px-6 py-3 sm:py-4 flex items-center justify-between",
          // Brand
          NavButton {
            section: HOME_SECTION,
            class: "flex items-center gap-2 sm:gap-3 hover:opacity-90 transition-opacity md:ml-12 cursor-pointer",
            on_navigate,
            img {
              class: "h-10 w-10 sm:h-12 sm:w-12",
              src: LOGO,
              alt: "{props.brand}",
            }
            span { class: "text-xl sm:text-2xl {brand_text}", "{props.brand}" }
          }

          // Desktop links
          div { class: "hidden md:flex items-center gap-4 lg:gap-8",
            for item in NAV_ITEMS {
              NavButton {
                key: "{item.id}",
                section: item.id,
                class: format!(
                    "text-sm lg:text-base font-medium transition-all duration-300 hover-slide-border cursor-pointer {}",
                    styles::desktop_link(item.is_active(&active_section)),
                ),
                on_navigate,
                "{item.label}"
              }
            }
            NavButton {
              section: CTA_SECTION,
              class: format!("px-4 lg:px-6 py-2.5 text-sm lg:text-base {}", cta),
              on_navigate,
              "{props.cta_label}"
            }
          }

          // Mobile toggle
          button {
            class: "md:hidden p-2 rounded-lg bg-[#1e293b]/50 hover:bg-[#1e293b] transition-all cursor-pointer",
            aria_label: "Toggle menu",
            onclick: move |_| on_toggle.call(()),
            if props.open {
              CloseIcon { class: "text-[#f1f5f9]" }
            } else {
              MenuIcon { class: "text-[#f1f5f9]" }
            }
          }
        }
      }

      // Backdrop
      if props.open {
        div {
          class: "fixed inset-0 bg-black/60 backdrop-blur-sm z-40 md:hidden",
          onclick: move |_| on_close.call(()),
        }
      }

      // Mobile panel
      div { class: "fixed top-0 right-0 h-full w-[280px] sm:w-[320px] bg-[#0d1117] shadow-2xl z-50 transform transition-transform duration-300 ease-out md:hidden {panel_translate}",
        div { class: "flex flex-col h-full",
          // Header
          div { class: "flex items-center justify-between px-6 py-6 border-b border-white/10",
            span { class: "text-xl {brand_text}", "Menu" }
            button {
              class: "p-2 rounded-lg hover:bg-[#1e293b] transition-colors cursor-pointer",
              aria_label: "Close menu",
              onclick: move |_| on_close.call(()),
              CloseIcon { class: "text-[#f1f5f9]" }
            }
          }

          // Links
          div { class: "flex-1 px-6 py-8 space-y-2",
            for item in NAV_ITEMS {
              NavButton {
                key: "{item.id}",
                section: item.id,
                class: format!(
                    "w-full text-left px-4 py-4 rounded-xl font-medium transition-all duration-300 cursor-pointer {}",
                    styles::mobile_link(item.is_active(&active_section)),
                ),
                on_navigate,
                "{item.label}"
              }
            }
          }

          // CTA
          div { class: "px-6 py-6 border-t border-white/10",
            NavButton {
              section: CTA_SECTION,
              class: format!("w-full px-6 py-4 text-base {}", cta),
              on_navigate,
              "{props.cta_label}"
            }
          }
        }
      }
    }
}
