mod anchor_link;
mod features;
mod hero;
mod navbar;
mod reveal;
mod roles;
mod rotating_words;
mod scroll_to_top;
mod showcase;
mod splash;

pub use anchor_link::AnchorLink;
pub use features::{CallToAction, Features, Footer};
pub use hero::{Hero, HERO_ELEMENTS};
pub use navbar::Navbar;
pub use reveal::Reveal;
pub use roles::RolesSection;
pub use rotating_words::RotatingWords;
pub use scroll_to_top::ScrollToTop;
pub use showcase::Showcase;
pub use splash::SplashOverlay;
