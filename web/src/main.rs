use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::{Navbar, HOME_SECTION};
use views::{ContactSection, HomeSection, PortfolioSection, ServicesSection};

mod scroll_to;
mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut active_section = use_signal(|| HOME_SECTION.to_string());

    let on_navigate = move |section: String| {
        info!("Navigating to {}", section);
        scroll_to::section(&section);
        active_section.set(section);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "Neptrax" }

        Navbar { active_section: active_section(), on_navigate }

        main { class: "min-h-screen bg-[#0d1117] text-[#f1f5f9]",
            HomeSection { on_navigate }
            ServicesSection {}
            PortfolioSection {}
            ContactSection {}
        }
    }
}
