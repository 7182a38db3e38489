use dioxus::prelude::*;
use landing_core::reveal::{CARD_REVEAL_MARGIN, CARD_REVEAL_THRESHOLD, CTA_REVEAL_THRESHOLD};

use crate::components::{AnchorLink, Reveal};

const FEATURES: [(&str, &str); 3] = [
    (
        "Guided prompts",
        "Thoughtful questions that help anyone open up about the past.",
    ),
    (
        "Voice and video",
        "Hear the laugh, see the smile. Stories keep their storyteller.",
    ),
    (
        "Private by default",
        "Only the people you invite can listen, watch or add to a story.",
    ),
];

#[component]
pub fn Features(scroll_y: Signal<f64>) -> Element {
    rsx! {
        section { id: "features", class: "features",
            Reveal { id: "features-heading", scroll_y,
                h2 { class: "section-title", "Everything a family story needs" }
            }
            div { class: "feature-grid",
                for (index, (title, body)) in FEATURES.iter().enumerate() {
                    Reveal {
                        key: "{title}",
                        id: format!("feature-{index}"),
                        scroll_y,
                        animation: "scroll-animate",
                        visible_class: "animate-in",
                        threshold: CARD_REVEAL_THRESHOLD,
                        margin: CARD_REVEAL_MARGIN,
                        class: "feature-card",
                        h3 { "{title}" }
                        p { "{body}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CallToAction(scroll_y: Signal<f64>) -> Element {
    rsx! {
        section { id: "cta", class: "cta",
            Reveal { id: "cta-copy", scroll_y, animation: "fade-in-left",
                h2 { "Start keeping your family's stories today" }
                p { "The best time to ask was yesterday. The next best time is now." }
                AnchorLink { href: "#hero", label: "Back to the top", class: "btn btn-primary" }
            }
            Reveal {
                id: "cta-devices",
                scroll_y,
                animation: "hiw-final-cta",
                visible_class: "in-view",
                threshold: CTA_REVEAL_THRESHOLD,
                for name in ["cta-device-desktop", "cta-device-tablet", "cta-device-phone"] {
                    div { key: "{name}", class: "cta-device {name}" }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            p { "Keepsake. Family stories, kept for good." }
        }
    }
}
