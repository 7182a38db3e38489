//! Presentation logic for the landing page: the once-per-session splash intro,
//! the hero reveal and title rotation, and the scroll/pointer driven page effects.
//!
//! Nothing here touches the DOM. Components are driven on a virtual clock and
//! return effects for a rendering layer to apply.
pub mod intro;
pub mod page;
pub mod parallax;
pub mod reveal;
pub mod roles;
pub mod rotator;
pub mod session;
pub mod splash;
pub mod timeline;
pub mod timing;
pub mod words;

pub use intro::{HeroIntro, IntroEffect, IntroPath, IntroSetup};
pub use page::{MobileMenu, PageSettings};
pub use reveal::{HeroReveal, RevealEffect, RevealState, ScrollReveal};
pub use roles::RoleSelector;
pub use rotator::HeroWordRotator;
pub use session::{GateDecision, MemoryStore, SessionGate, SessionStore, StoreError};
pub use splash::{SplashEffect, SplashSequencer, SplashState};
pub use timeline::{Timeline, TimerId};
pub use timing::IntroTiming;
pub use words::{Word, WordCarousel, WordEffect, WordPhase, WordSet, WordSetError};
