use dioxus::prelude::*;
use landing_core::MobileMenu;

use crate::components::AnchorLink;
use crate::config::LandingConfig;
use crate::dom;

/// Section links shared by the desktop bar and the mobile drawer.
const LINKS: [(&str, &str); 4] = [
    ("#features", "Features"),
    ("#how-it-works", "How it works"),
    ("#roles", "Roles"),
    ("#cta", "Get started"),
];

/// Body class that stops the page scrolling behind the open drawer.
const MENU_OPEN_CLASS: &str = "menu-open";

#[component]
pub fn Navbar(scroll_y: Signal<f64>) -> Element {
    let settings = use_context::<LandingConfig>().page;
    let mut menu = use_signal(MobileMenu::default);

    use_effect(move || dom::set_body_class(MENU_OPEN_CLASS, menu.read().locks_scroll()));
    use_drop(|| dom::set_body_class(MENU_OPEN_CLASS, false));

    let nav_class = if settings.navbar_scrolled(scroll_y()) {
        "navbar scrolled"
    } else {
        "navbar"
    };
    let active = if menu.read().is_open() { "active" } else { "" };

    rsx! {
        nav { id: "navbar", class: nav_class,
            div { class: "nav-container",
                AnchorLink { href: "#hero", label: "Keepsake", class: "nav-logo" }
                div { class: "nav-links",
                    for (href, label) in LINKS {
                        AnchorLink { key: "{href}", href, label }
                    }
                }
                button {
                    id: "mobileMenuBtn",
                    class: "mobile-menu-btn {active}",
                    aria_label: "Toggle menu",
                    onclick: move |_| menu.write().toggle(),
                    span {}
                    span {}
                    span {}
                }
            }
            div { id: "mobileMenu", class: "mobile-menu {active}",
                for (href, label) in LINKS {
                    AnchorLink {
                        key: "{href}",
                        href,
                        label,
                        onfollow: move |_| menu.write().close(),
                    }
                }
            }
        }
    }
}
