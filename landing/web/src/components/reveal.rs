use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use landing_core::{RevealState, ScrollReveal};

use crate::config::LandingConfig;
use crate::dom;
use crate::intro::timeout_millis;

/// Animates its children in the first time enough of them scrolls into view.
///
/// `animation` is the resting class and `visible_class` is added once revealed.
/// Without a `threshold` the page-wide one applies; `margin` insets the viewport.
#[component]
pub fn Reveal(
    id: String,
    scroll_y: Signal<f64>,
    #[props(default)] delay_ms: u64,
    #[props(default = "fade-in-up")] animation: &'static str,
    #[props(default = "visible")] visible_class: &'static str,
    #[props(default)] class: &'static str,
    threshold: Option<f64>,
    #[props(default)] margin: f64,
    children: Element,
) -> Element {
    let page_threshold = use_context::<LandingConfig>().page.reveal_threshold;
    let mut reveal = use_signal(move || {
        ScrollReveal::new(
            threshold.unwrap_or(page_threshold),
            Duration::from_millis(delay_ms),
        )
        .with_margin(margin)
    });

    let target = id.clone();
    use_effect(move || {
        scroll_y();
        if reveal.peek().state() != RevealState::Hidden {
            return;
        }
        let Ok(bounds) = dom::bounds(&target) else {
            return;
        };
        let mut next = reveal.peek().clone();
        let ratio = next.ratio(bounds.top, bounds.height, dom::viewport_height());
        let Some(delay) = next.observe(ratio) else {
            return;
        };
        reveal.set(next);
        spawn(async move {
            TimeoutFuture::new(timeout_millis(delay)).await;
            reveal.write().complete();
        });
    });

    let visible = if reveal.read().is_visible() {
        visible_class
    } else {
        ""
    };
    rsx! {
        div { id, class: "{animation} {class} {visible}", {children} }
    }
}
