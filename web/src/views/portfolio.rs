use dioxus::prelude::*;

use super::Section;

const PROJECTS: [&str; 4] = [
    "Logistics dashboard",
    "Clinic booking platform",
    "Retail analytics suite",
    "Fintech onboarding flow",
];

#[component]
pub fn PortfolioSection() -> Element {
    rsx! {
        Section { id: "portfolio", title: "Portfolio",
            div { class: "grid gap-6 sm:grid-cols-2",
                for project in PROJECTS {
                    div { class: "h-48 flex items-end p-6 rounded-2xl bg-gradient-to-br from-[#1e293b] to-[#0d1117] border border-white/10",
                        span { class: "text-lg font-medium", "{project}" }
                    }
                }
            }
        }
    }
}
