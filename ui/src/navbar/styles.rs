//! Tailwind class selection for the navbar.

pub const HIGHLIGHT_TEXT: &str = "text-[#2563eb]";

pub const CTA: &str = "rounded-full bg-gradient-to-r from-[#2563eb] to-[#1e3a8a] text-[#f1f5f9] font-medium hover:scale-105 hover:shadow-[0_0_20px_rgba(37,99,235,0.5)] transition-all duration-300 cursor-pointer";

pub const BRAND_TEXT: &str =
    "font-bold bg-gradient-to-r from-[#2e69e8] to-[#3b6fc4] bg-clip-text text-transparent";

pub fn bar(scrolled: bool) -> &'static str {
    if scrolled {
        "bg-[#0d1117]/90 backdrop-blur-lg shadow-lg"
    } else {
        "bg-transparent"
    }
}

pub fn desktop_link(active: bool) -> &'static str {
    if active {
        HIGHLIGHT_TEXT
    } else {
        "text-[#94a3b8] hover:text-[#f1f5f9]"
    }
}

pub fn mobile_link(active: bool) -> &'static str {
    if active {
        "bg-gradient-to-r from-[#2563eb]/20 to-[#1e3a8a]/20 text-[#2563eb] border border-[#2563eb]/30"
    } else {
        "text-[#94a3b8] hover:bg-[#1e293b] hover:text-[#f1f5f9]"
    }
}

/// The mobile panel stays mounted and slides off-screen when closed.
pub fn panel(open: bool) -> &'static str {
    if open {
        "translate-x-0"
    } else {
        "translate-x-full"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_goes_solid_when_scrolled() {
        assert_eq!(bar(false), "bg-transparent");
        assert!(bar(true).contains("backdrop-blur-lg"));
        assert!(bar(true).contains("shadow-lg"));
    }

    #[test]
    fn highlight_only_on_active_links() {
        assert!(desktop_link(true).contains(HIGHLIGHT_TEXT));
        assert!(!desktop_link(false).contains(HIGHLIGHT_TEXT));
        assert!(mobile_link(true).contains(HIGHLIGHT_TEXT));
        assert!(!mobile_link(false).contains(HIGHLIGHT_TEXT));
    }

    #[test]
    fn panel_slides_in_when_open() {
        assert_eq!(panel(true), "translate-x-0");
        assert_eq!(panel(false), "translate-x-full");
    }
}
