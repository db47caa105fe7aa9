use dioxus::prelude::*;
use ui::CTA_SECTION;

#[component]
pub fn HomeSection(on_navigate: EventHandler<String>) -> Element {
    rsx! {
        section { id: "home", class: "min-h-screen flex items-center px-4 sm:px-6 pt-24",
            div { class: "max-w-7xl mx-auto",
                h1 { class: "text-4xl sm:text-6xl font-bold leading-tight",
                    "Software that ships, "
                    span { class: "bg-gradient-to-r from-[#2e69e8] to-[#3b6fc4] bg-clip-text text-transparent",
                        "built to last."
                    }
                }
                p { class: "mt-6 max-w-2xl text-lg text-[#94a3b8]",
                    "We design and build web products, from the first sketch to production."
                }
                button {
                    class: "mt-10 px-8 py-4 rounded-full bg-gradient-to-r from-[#2563eb] to-[#1e3a8a] font-medium hover:scale-105 transition-all duration-300 cursor-pointer",
                    onclick: move |_| on_navigate.call(CTA_SECTION.to_string()),
                    "Start a project"
                }
            }
        }
    }
}
