//! Thin web-sys helpers for the few browser primitives the page reads or pokes directly.

use std::time::Duration;

use dioxus::prelude::*;
use landing_core::parallax::Bounds;
use thiserror::Error;
use tracing::debug;
use web_sys::{ScrollBehavior, ScrollToOptions};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomError {
    #[error("no browser window")]
    NoWindow,
    #[error("no element with id {0}")]
    MissingElement(String),
}

fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

fn element(id: &str) -> Result<web_sys::Element, DomError> {
    window()?
        .document()
        .and_then(|document| document.get_element_by_id(id))
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}

/// Time since navigation start, as reported by `performance.now()`.
pub fn now() -> Duration {
    window()
        .ok()
        .and_then(|window| window.performance())
        .map(|performance| Duration::from_secs_f64(performance.now().max(0.0) / 1000.0))
        .unwrap_or_default()
}

pub fn scroll_y() -> f64 {
    window()
        .and_then(|window| window.scroll_y().map_err(|_| DomError::NoWindow))
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .ok()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

/// Viewport-relative bounds of the element with `id`.
pub fn bounds(id: &str) -> Result<Bounds, DomError> {
    let rect = element(id)?.get_bounding_client_rect();
    Ok(Bounds::new(rect.left(), rect.top(), rect.width(), rect.height()))
}

/// Natural width of the element with `id`, before any padding.
pub fn natural_width(id: &str) -> Result<f64, DomError> {
    Ok(element(id)?.scroll_width() as f64)
}

/// Adds or removes a class on `<body>`.
pub fn set_body_class(class: &str, on: bool) {
    let Some(body) = window()
        .ok()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let classes = body.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if result.is_err() {
        debug!(class, on, "could not update body class");
    }
}

/// Whether the user asked the system to minimise motion.
pub fn prefers_reduced_motion() -> bool {
    window()
        .ok()
        .and_then(|window| {
            window
                .match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .is_some_and(|query| query.matches())
}

/// Smoothly scrolls the window to `top`.
pub fn scroll_to(top: f64) {
    let Ok(window) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Document offset of the element with `id`.
pub fn offset_top(id: &str) -> Result<f64, DomError> {
    Ok(bounds(id)?.top + scroll_y())
}

/// Live window scroll offset, updated on every `scroll` event.
pub fn use_scroll_y() -> Signal<f64> {
    let mut scroll = use_signal(scroll_y);

    use_future(move || async move {
        let mut events = document::eval(
            r#"
            const send = () => dioxus.send(window.scrollY);
            window.addEventListener("scroll", send, { passive: true });
            window.addEventListener("resize", send);
            send();
            "#,
        );
        while let Ok(y) = events.recv::<f64>().await {
            scroll.set(y);
        }
    });

    scroll
}
