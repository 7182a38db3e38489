use dioxus::prelude::*;

use crate::config::LandingConfig;
use crate::dom;

#[component]
pub fn ScrollToTop(scroll_y: Signal<f64>) -> Element {
    let settings = use_context::<LandingConfig>().page;
    let class = if settings.scroll_top_visible(scroll_y()) {
        "scroll-to-top visible"
    } else {
        "scroll-to-top"
    };

    rsx! {
        button {
            class,
            aria_label: "Back to top",
            onclick: move |_| dom::scroll_to(0.0),
            "↑"
        }
    }
}
