use dioxus::prelude::*;
use landing_core::page::anchor_target;
use tracing::debug;

use crate::config::LandingConfig;
use crate::dom;

/// In-page link that scrolls smoothly to its target, clear of the fixed navbar.
#[component]
pub fn AnchorLink(
    href: &'static str,
    label: &'static str,
    #[props(default)] class: &'static str,
    onfollow: Option<EventHandler>,
) -> Element {
    let settings = use_context::<LandingConfig>().page;

    rsx! {
        a {
            href,
            class,
            onclick: move |evt: MouseEvent| {
                if let Some(onfollow) = onfollow {
                    onfollow.call(());
                }
                let Some(id) = anchor_target(href) else {
                    return;
                };
                match dom::offset_top(id) {
                    Ok(top) => {
                        evt.prevent_default();
                        dom::scroll_to(settings.anchor_scroll_top(top));
                    }
                    Err(e) => debug!("anchor {href} not followed: {e}"),
                }
            },
            "{label}"
        }
    }
}
