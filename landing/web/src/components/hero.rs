use dioxus::prelude::*;
use landing_core::parallax::{device_offset, shape_offset, Throttle};

use crate::components::RotatingWords;
use crate::dom;
use crate::intro::HERO_WORD_ID;
use crate::view::IntroView;

/// Number of hero elements that fade in one after another.
pub const HERO_ELEMENTS: usize = 4;

const HERO_ID: &str = "hero";
const SHAPES: usize = 3;
/// Device class and resting transform, in parallax order.
const DEVICES: [(&str, &str); 3] = [
    ("hero-device-phone", "rotate(-7.01deg)"),
    ("hero-device-desktop", ""),
    ("hero-device-tablet", ""),
];

#[component]
pub fn Hero(intro: Signal<IntroView>, words: Vec<String>, scroll_y: Signal<f64>) -> Element {
    let reduced_motion = use_hook(dom::prefers_reduced_motion);
    let mut throttle = use_signal(Throttle::default);
    let mut pointer = use_signal(|| None::<(f64, f64)>);

    let view = intro.read();
    let fade = |index: usize| {
        if view.element_visible(index) {
            "fade-in-up visible"
        } else {
            "fade-in-up"
        }
    };
    let content_class = if view.content_revealed {
        "hero-content-wrapper revealed"
    } else {
        "hero-content-wrapper"
    };
    let devices_class = if view.devices_revealed {
        "hero-devices-wrapper revealed"
    } else {
        "hero-devices-wrapper"
    };
    let parallax_active = view.devices_revealed && !reduced_motion;

    rsx! {
        section {
            id: HERO_ID,
            class: "hero",
            onmousemove: move |evt: MouseEvent| {
                if !parallax_active || !throttle.write().ready(dom::now()) {
                    return;
                }
                let point = evt.client_coordinates();
                if let Ok(bounds) = dom::bounds(HERO_ID) {
                    pointer.set(Some(bounds.normalize(point.x, point.y)));
                }
            },
            onmouseleave: move |_| pointer.set(None),

            div { class: "hero-shapes",
                for index in 0..SHAPES {
                    div {
                        key: "{index}",
                        class: format!("shape shape-{}", index + 1),
                        style: shape_style(scroll_y(), index),
                    }
                }
            }

            div { class: content_class,
                p { class: fade(0), span { class: "hero-badge", "Family stories, kept for good" } }
                h1 { class: fade(1),
                    "Preserve your family's "
                    RotatingWords {
                        words,
                        state: view.hero_words.clone(),
                        id_prefix: HERO_WORD_ID,
                        wrapper_class: "hero-rotating-wrapper",
                        word_class: "hero-word",
                    }
                }
                p { class: format!("hero-subtitle {}", fade(2)),
                    "Record, collect and share the voices and moments that make your family yours."
                }
                div { class: format!("hero-buttons {}", fade(3)),
                    a { class: "btn btn-primary", href: "#cta", "Start your story" }
                    a { class: "btn btn-secondary", href: "#how-it-works", "See how it works" }
                }
            }

            div { class: devices_class,
                for (index, (name, base)) in DEVICES.iter().enumerate() {
                    div {
                        key: "{name}",
                        class: "hero-device {name}",
                        style: device_style(base, pointer(), index),
                    }
                }
            }
        }
    }
}

fn shape_style(scroll_y: f64, index: usize) -> String {
    format!("transform: translateY({:.2}px);", shape_offset(scroll_y, index))
}

fn device_style(base: &str, pointer: Option<(f64, f64)>, index: usize) -> String {
    match pointer {
        Some(normalized) => format!(
            "transform: {} {}; transition: transform 0.15s ease-out;",
            device_offset(normalized, index).css_translate(),
            base
        ),
        None => format!(
            "transform: {base}; transition: transform 0.5s cubic-bezier(0.4, 0, 0.2, 1);"
        ),
    }
}
