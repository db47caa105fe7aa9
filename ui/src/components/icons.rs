use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    #[props(default = 24)]
    size: u32,
    #[props(optional, into)]
    class: String,
}

/// Three horizontal bars.
#[component]
pub fn MenuIcon(props: Props) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            width: "{props.size}",
            height: "{props.size}",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M4 6h16M4 12h16M4 18h16",
            }
        }
    }
}

#[component]
pub fn CloseIcon(props: Props) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            width: "{props.size}",
            height: "{props.size}",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M6 18L18 6M6 6l12 12",
            }
        }
    }
}
