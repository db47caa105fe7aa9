use dioxus::prelude::*;

use super::Section;

#[component]
pub fn ContactSection() -> Element {
    rsx! {
        Section { id: "contact", title: "Contact",
            p { class: "max-w-2xl text-lg text-[#94a3b8]",
                "Tell us about your project and we will get back to you within one business day."
            }
            a {
                class: "inline-block mt-8 px-8 py-4 rounded-full bg-gradient-to-r from-[#2563eb] to-[#1e3a8a] font-medium hover:scale-105 transition-all duration-300",
                href: "mailto:hello@neptrax.com",
                "hello@neptrax.com"
            }
        }
    }
}
