//! Runs the core intro against the browser clock and folds its effects into a signal.

use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use landing_core::session::splash_shown;
use landing_core::{HeroIntro, IntroEffect, IntroSetup, SessionStore, Word};
use tracing::{debug, info};

use crate::config::LandingConfig;
use crate::dom;
use crate::state::SessionFlagStore;
use crate::view::IntroView;

/// Body class that locks scrolling and the navbar while the splash plays.
const SPLASH_ACTIVE_CLASS: &str = "splash-active";

/// Id prefix of the splash overlay's words.
pub const SPLASH_WORD_ID: &str = "splash-word";
/// Id prefix of the hero title's words.
pub const HERO_WORD_ID: &str = "hero-word";

pub fn word_id(prefix: &str, index: usize) -> String {
    format!("{prefix}-{index}")
}

fn measure(texts: &[String], prefix: &str) -> Vec<Word> {
    texts
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let width = dom::natural_width(&word_id(prefix, index)).unwrap_or_else(|e| {
                debug!("measuring word {index}: {e}");
                0.0
            });
            Word::measured(text.clone(), width)
        })
        .collect()
}

pub fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

/// Whether the splash will play, as the intro's gate will decide it on start.
///
/// An overlay without words never plays.
pub fn plays_splash<S: SessionStore>(splash: bool, splash_words: usize, store: &S) -> bool {
    splash && splash_words > 0 && !splash_shown(store)
}

fn apply(mut view: Signal<IntroView>, effects: Vec<IntroEffect>) {
    if effects.is_empty() {
        return;
    }
    let mut view = view.write();
    for effect in effects {
        view.apply(effect);
    }
}

/// Plays the splash (or skips it), reveals the hero and keeps its title rotating.
///
/// `hero_elements` is the number of hero elements that fade in one after another.
pub fn use_hero_intro(config: &LandingConfig, hero_elements: usize) -> Signal<IntroView> {
    let splash = config.splash;
    let splash_words = config.splash_words.clone();
    let hero_words = config.hero_words.clone();
    let timing = config.timing.clone();

    let store = use_hook(SessionFlagStore::open);
    let view = use_signal(|| {
        let plays = plays_splash(splash, splash_words.len(), &store);
        IntroView::initial(plays, splash_words.len(), hero_words.len(), hero_elements)
    });

    use_effect(move || dom::set_body_class(SPLASH_ACTIVE_CLASS, view.read().page_locked));
    use_drop(|| dom::set_body_class(SPLASH_ACTIVE_CLASS, false));

    use_future(move || {
        let splash_words = splash_words.clone();
        let hero_words = hero_words.clone();
        let timing = timing.clone();
        let store = store.clone();
        async move {
            // Let the first render land so the words can be measured.
            TimeoutFuture::new(0).await;

            let setup = IntroSetup {
                splash_words: splash.then(|| measure(&splash_words, SPLASH_WORD_ID)),
                hero_words: measure(&hero_words, HERO_WORD_ID),
                hero_elements,
            };
            let origin = dom::now();
            let mut intro = HeroIntro::new(setup, timing, store);
            info!(path = ?intro.path(), "landing intro started");
            apply(view, intro.start());

            while let Some(deadline) = intro.next_deadline() {
                let elapsed = dom::now().saturating_sub(origin);
                if deadline > elapsed {
                    TimeoutFuture::new(timeout_millis(deadline - elapsed)).await;
                }
                let elapsed = dom::now().saturating_sub(origin);
                apply(view, intro.advance_to(elapsed.max(deadline)));
            }
            debug!("landing intro settled");
        }
    });

    view
}
