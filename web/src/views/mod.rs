use dioxus::prelude::*;

mod contact;
mod home;
mod portfolio;
mod services;

pub use contact::ContactSection;
pub use home::HomeSection;
pub use portfolio::PortfolioSection;
pub use services::ServicesSection;

/// Full-width page block the navbar can scroll to by `id`.
#[component]
fn Section(id: &'static str, title: &'static str, children: Element) -> Element {
    rsx! {
        section { id, class: "scroll-mt-24 py-24 px-4 sm:px-6",
            div { class: "max-w-7xl mx-auto",
                h2 { class: "text-3xl sm:text-4xl font-bold mb-10", "{title}" }
                {children}
            }
        }
    }
}
