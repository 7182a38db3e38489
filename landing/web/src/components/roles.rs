use dioxus::prelude::*;
use landing_core::RoleSelector;
use tracing::debug;

use crate::config::RoleCopy;
use crate::dom;

const SCROLL_AREA_ID: &str = "roles-scroll-area";

/// Sticky roles list: one role is highlighted, chosen by click or by scroll progress.
#[component]
pub fn RolesSection(roles: Vec<RoleCopy>, scroll_y: Signal<f64>) -> Element {
    let mut selector = use_signal(|| RoleSelector::new(roles.len()));

    use_effect(move || {
        scroll_y();
        match dom::bounds(SCROLL_AREA_ID) {
            Ok(area) => {
                let mut next = selector.peek().clone();
                if next.on_scroll(area.top, area.height, dom::viewport_height()) {
                    selector.set(next);
                }
            }
            Err(e) => debug!("roles section not tracked: {e}"),
        }
    });

    if roles.is_empty() {
        return rsx! {};
    }

    let state = selector.read().clone();
    let item_class = |index: usize| {
        if state.is_active(index) {
            "hiw-role-item active"
        } else {
            "hiw-role-item"
        }
    };
    let image_class = |index: usize| {
        if state.is_active(index) {
            "hiw-role-image active"
        } else {
            "hiw-role-image"
        }
    };

    rsx! {
        section { id: "roles", class: "hiw-roles",
            div {
                id: SCROLL_AREA_ID,
                class: "hiw-roles-scroll-area",
                style: format!("height: {}vh;", roles.len() * 100),
                div { class: "hiw-roles-sticky",
                    div { class: "hiw-roles-list",
                        for (index, role) in roles.iter().enumerate() {
                            div {
                                key: "{index}",
                                class: item_class(index),
                                onclick: move |_| {
                                    selector.write().activate(index);
                                },
                                h3 { "{role.title}" }
                                p { "{role.summary}" }
                            }
                        }
                    }
                    div { class: "hiw-roles-images",
                        for index in 0..roles.len() {
                            div { key: "{index}", class: image_class(index), {(index + 1).to_string()} }
                        }
                    }
                }
            }
        }
    }
}
