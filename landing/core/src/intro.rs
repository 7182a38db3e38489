//! Page-load choreography: session gate → splash (or skip) → hero reveal → title rotation.
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::reveal::{HeroReveal, RevealEffect};
use crate::rotator::HeroWordRotator;
use crate::session::{GateDecision, SessionGate, SessionStore};
use crate::splash::{SplashEffect, SplashSequencer, SplashState};
use crate::timing::IntroTiming;
use crate::words::{Word, WordEffect, WordSet};

/// What the page offers to the intro, gathered once at load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntroSetup {
    /// Words of the splash overlay, or `None` when the page has no splash element.
    pub splash_words: Option<Vec<Word>>,
    pub hero_words: Vec<Word>,
    /// Number of hero elements that fade in one after another.
    pub hero_elements: usize,
}

/// A mutation for the rendering layer, tagged with the part of the page it targets.
#[derive(Debug, Clone, PartialEq)]
pub enum IntroEffect {
    /// Mark the page splash-active: no scrolling, locked navbar.
    LockPage,
    /// The splash already played this session; drop its element unplayed.
    DiscardSplash,
    Splash(SplashEffect),
    SplashWords(WordEffect),
    HeroWords(WordEffect),
    Hero(RevealEffect),
}

impl From<SplashEffect> for IntroEffect {
    fn from(effect: SplashEffect) -> Self {
        match effect {
            SplashEffect::Word(word) => IntroEffect::SplashWords(word),
            other => IntroEffect::Splash(other),
        }
    }
}

/// Which way the gate sent this page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPath {
    NoSplash,
    Skipped,
    Splash,
}

/// Owns every intro component and drives them on one clock.
pub struct HeroIntro<S> {
    timing: IntroTiming,
    path: IntroPath,
    splash: Option<SplashSequencer<S>>,
    reveal: HeroReveal,
    rotator: Option<HeroWordRotator>,
    now: Duration,
    started: bool,
}

impl<S: SessionStore> HeroIntro<S> {
    /// Runs the session gate and builds the components, all at time zero.
    pub fn new(setup: IntroSetup, timing: IntroTiming, store: S) -> Self {
        let now = Duration::ZERO;

        let splash_element = setup.splash_words.is_some();
        let splash_words = match setup.splash_words.map(WordSet::new) {
            Some(Ok(words)) => Some(words),
            Some(Err(e)) => {
                warn!("splash element present but unusable, discarding it: {e}");
                None
            }
            None => None,
        };

        let decision = SessionGate::new(store).decide(splash_words.is_some());
        let (path, splash) = match (decision, splash_words) {
            (GateDecision::Play(store), Some(words)) => (
                IntroPath::Splash,
                Some(SplashSequencer::new(words, timing.clone(), store, now)),
            ),
            _ if splash_element => (IntroPath::Skipped, None),
            _ => (IntroPath::NoSplash, None),
        };

        let rotator = match WordSet::new(setup.hero_words) {
            Ok(words) => Some(HeroWordRotator::new(
                words,
                timing.hero_step(),
                timing.exit_clear(),
                now,
            )),
            Err(e) => {
                debug!("hero title will not rotate: {e}");
                None
            }
        };

        HeroIntro {
            reveal: HeroReveal::new(setup.hero_elements, timing.reveal_stagger(), now),
            timing,
            path,
            splash,
            rotator,
            now,
            started: false,
        }
    }

    pub fn path(&self) -> IntroPath {
        self.path
    }

    /// Applies the initial layout and the gate outcome. Only the first call emits anything.
    pub fn start(&mut self) -> Vec<IntroEffect> {
        if self.started {
            return Vec::new();
        }
        self.started = true;

        let mut effects = Vec::new();
        if let Some(rotator) = self.rotator.as_mut() {
            effects.extend(rotator.initial_layout().into_iter().map(IntroEffect::HeroWords));
        }

        if let Some(splash) = self.splash.as_mut() {
            info!("playing splash intro");
            effects.push(IntroEffect::LockPage);
            effects.extend(splash.initial_layout().into_iter().map(IntroEffect::from));
            return effects;
        }

        if self.path == IntroPath::Skipped {
            effects.push(IntroEffect::DiscardSplash);
        }
        let lead_in = self.timing.hero_fade_lead_in();
        effects.extend(self.reveal_hero(lead_in));
        if let Some(rotator) = self.rotator.as_mut() {
            rotator.arm(self.timing.hero_start_delay());
        }
        effects
    }

    /// Earliest pending deadline across every component.
    pub fn next_deadline(&self) -> Option<Duration> {
        [
            self.splash.as_ref().and_then(SplashSequencer::next_deadline),
            self.reveal.next_deadline(),
            self.rotator.as_ref().and_then(HeroWordRotator::next_deadline),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Runs everything due at or before `until`, in global time order.
    pub fn advance_to(&mut self, until: Duration) -> Vec<IntroEffect> {
        let mut effects = Vec::new();
        while let Some(deadline) = self.next_deadline().filter(|deadline| *deadline <= until) {
            self.now = self.now.max(deadline);

            if let Some(splash) = self.splash.as_mut() {
                let splash_effects = splash.advance_to(deadline);
                for effect in splash_effects {
                    effects.push(effect.clone().into());
                    self.handle_splash(&effect, &mut effects);
                }
            }
            effects.extend(
                self.reveal
                    .advance_to(deadline)
                    .into_iter()
                    .map(IntroEffect::Hero),
            );
            if let Some(rotator) = self.rotator.as_mut() {
                effects.extend(
                    rotator
                        .advance_to(deadline)
                        .into_iter()
                        .map(IntroEffect::HeroWords),
                );
            }
        }
        self.now = self.now.max(until);
        effects
    }

    /// Cancels all pending work.
    pub fn teardown(&mut self) {
        if let Some(splash) = self.splash.as_mut() {
            splash.abort();
        }
        if let Some(rotator) = self.rotator.as_mut() {
            rotator.stop();
        }
        self.reveal.cancel();
    }

    pub fn splash_state(&self) -> Option<SplashState> {
        self.splash.as_ref().map(SplashSequencer::state)
    }

    pub fn splash(&self) -> Option<&SplashSequencer<S>> {
        self.splash.as_ref()
    }

    pub fn reveal(&self) -> &HeroReveal {
        &self.reveal
    }

    pub fn rotator(&self) -> Option<&HeroWordRotator> {
        self.rotator.as_ref()
    }

    fn handle_splash(&mut self, effect: &SplashEffect, effects: &mut Vec<IntroEffect>) {
        match effect {
            SplashEffect::RevealHero => {
                effects.extend(self.reveal_hero(Duration::ZERO));
            }
            SplashEffect::Completed => {
                if let Some(rotator) = self.rotator.as_mut() {
                    rotator.advance_to(self.now);
                    rotator.arm(Duration::ZERO);
                }
            }
            _ => {}
        }
    }

    fn reveal_hero(&mut self, lead_in: Duration) -> Vec<IntroEffect> {
        self.reveal.advance_to(self.now);
        self.reveal
            .reveal(lead_in)
            .into_iter()
            .map(IntroEffect::Hero)
            .collect()
    }
}
