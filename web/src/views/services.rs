use dioxus::prelude::*;

use super::Section;

const SERVICES: [(&str, &str); 3] = [
    ("Web applications", "Fast, accessible front ends and the APIs behind them."),
    ("Product design", "Interfaces shaped around how your users actually work."),
    ("Cloud & DevOps", "Pipelines, infrastructure and monitoring you can hand over."),
];

#[component]
pub fn ServicesSection() -> Element {
    rsx! {
        Section { id: "services", title: "Services",
            div { class: "grid gap-6 md:grid-cols-3",
                for (name, blurb) in SERVICES {
                    div { class: "p-6 rounded-2xl bg-[#1e293b]/50 border border-white/10",
                        h3 { class: "text-xl font-semibold mb-2", "{name}" }
                        p { class: "text-[#94a3b8]", "{blurb}" }
                    }
                }
            }
        }
    }
}
