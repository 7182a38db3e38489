use dioxus::prelude::*;

mod components;
mod config;
mod dom;
mod intro;
mod state;
mod view;
mod views;

use crate::config::LandingConfig;
use views::{Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();

    #[cfg(feature = "web")]
    dioxus::launch(App);
}

/// Root component: provides the landing configuration and renders the router.
#[component]
fn App() -> Element {
    use_context_provider(LandingConfig::load);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
