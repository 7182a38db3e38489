use dioxus::prelude::*;

use crate::components::{
    CallToAction, Features, Footer, Hero, Navbar, RolesSection, ScrollToTop, Showcase,
    SplashOverlay, HERO_ELEMENTS,
};
use crate::config::LandingConfig;
use crate::dom::use_scroll_y;
use crate::intro::use_hero_intro;

#[component]
pub fn Home() -> Element {
    let config = use_context::<LandingConfig>();
    let scroll_y = use_scroll_y();
    let intro = use_hero_intro(&config, HERO_ELEMENTS);

    rsx! {
        SplashOverlay { intro, words: config.splash_words.clone() }
        Navbar { scroll_y }
        main {
            Hero { intro, words: config.hero_words.clone(), scroll_y }
            Features { scroll_y }
            Showcase { scroll_y }
            RolesSection { roles: config.roles.clone(), scroll_y }
            CallToAction { scroll_y }
        }
        Footer {}
        ScrollToTop { scroll_y }
    }
}
