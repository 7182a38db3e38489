use dioxus::prelude::*;

use crate::components::RotatingWords;
use crate::intro::SPLASH_WORD_ID;
use crate::view::IntroView;

/// Full-screen overlay played on the first visit of a session.
#[component]
pub fn SplashOverlay(intro: Signal<IntroView>, words: Vec<String>) -> Element {
    let splash = intro.read().splash.clone();
    if !splash.present {
        return rsx! {};
    }

    let class = if splash.fading {
        "hero-splash fade-out"
    } else {
        "hero-splash"
    };
    rsx! {
        div { id: "heroSplash", class,
            div { class: "splash-content",
                p { class: "splash-eyebrow", "Every family has" }
                h1 { class: "splash-title",
                    RotatingWords {
                        words,
                        state: splash.words,
                        id_prefix: SPLASH_WORD_ID,
                        wrapper_class: "splash-rotating-wrapper",
                        word_class: "splash-word",
                    }
                }
                p { class: "splash-tagline", "worth keeping." }
            }
        }
    }
}
