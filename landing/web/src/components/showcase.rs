use dioxus::prelude::*;
use landing_core::parallax::{
    section_pointer_offset, section_progress, section_scroll_offset, Offset, Throttle,
};

use crate::components::Reveal;
use crate::dom;

const SHOWCASE_ID: &str = "how-it-works";

/// Device class, resting transform and parallax speed.
const DEVICES: [(&str, &str, f64); 3] = [
    ("hiw-device-desktop", "translateX(-50%)", 0.03),
    ("hiw-device-tablet", "", 0.06),
    ("hiw-device-phone", "rotate(-5deg)", 0.09),
];

const STEPS: [(&str, &str); 3] = [
    ("Invite", "Ask a parent, grandparent or friend to tell a story."),
    ("Record", "They answer gentle prompts by voice, video or text."),
    ("Keep", "Every story lands in a shared family archive."),
];

/// The "how it works" split hero, whose devices drift with scroll and pointer.
#[component]
pub fn Showcase(scroll_y: Signal<f64>) -> Element {
    let reduced_motion = use_hook(dom::prefers_reduced_motion);
    let mut throttle = use_signal(Throttle::default);
    let mut pointer = use_signal(|| None::<(f64, f64)>);

    let progress = use_memo(move || {
        scroll_y();
        dom::bounds(SHOWCASE_ID)
            .ok()
            .and_then(|bounds| section_progress(&bounds, dom::viewport_height()))
    });

    rsx! {
        section {
            id: SHOWCASE_ID,
            class: "hiw-hero-split",
            onmousemove: move |evt: MouseEvent| {
                if reduced_motion || !throttle.write().ready(dom::now()) {
                    return;
                }
                let point = evt.client_coordinates();
                if let Ok(bounds) = dom::bounds(SHOWCASE_ID) {
                    pointer.set(Some(bounds.normalize(point.x, point.y)));
                }
            },
            onmouseleave: move |_| pointer.set(None),

            div { class: "hiw-copy",
                h2 { "How it works" }
                for (index, (title, body)) in STEPS.iter().enumerate() {
                    Reveal {
                        key: "{title}",
                        id: format!("hiw-step-{index}"),
                        scroll_y,
                        delay_ms: index as u64 * 150,
                        class: "hiw-step",
                        h3 { "{title}" }
                        p { "{body}" }
                    }
                }
            }
            div { class: "hiw-devices",
                for (name, base, speed) in DEVICES {
                    div {
                        key: "{name}",
                        class: "hiw-device {name}",
                        style: device_style(base, speed, progress(), pointer()),
                    }
                }
            }
        }
    }
}

fn device_style(
    base: &str,
    speed: f64,
    progress: Option<f64>,
    pointer: Option<(f64, f64)>,
) -> String {
    let drift = progress.map_or(0.0, |progress| section_scroll_offset(progress, speed));
    let nudge = pointer.map_or(Offset::default(), |normalized| {
        section_pointer_offset(normalized, speed)
    });
    let offset = Offset {
        x: nudge.x,
        y: nudge.y + drift,
    };
    let transition = if pointer.is_some() {
        "transform 0.15s ease-out"
    } else {
        "transform 0.5s cubic-bezier(0.4, 0, 0.2, 1)"
    };
    format!(
        "transform: {base} {}; transition: {transition};",
        offset.css_translate()
    )
}
