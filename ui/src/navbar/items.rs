/// One destination in the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

impl NavItem {
    pub fn is_active(&self, active_section: &str) -> bool {
        self.id == active_section
    }
}

pub const HOME_SECTION: &str = "home";

/// Where both "Book a Call" buttons lead.
pub const CTA_SECTION: &str = "contact";

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        id: HOME_SECTION,
        label: "Home",
    },
    NavItem {
        id: "services",
        label: "Services",
    },
    NavItem {
        id: "portfolio",
        label: "Portfolio",
    },
    NavItem {
        id: CTA_SECTION,
        label: "Contact",
    },
];
