//! Render state of the intro, folded from the effects the core emits.

use landing_core::{IntroEffect, RevealEffect, SplashEffect, WordEffect, WordPhase};

/// Container width and per-word phase of one rotating title.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordsView {
    pub width: Option<f64>,
    pub phases: Vec<WordPhase>,
}

impl WordsView {
    pub fn new(len: usize) -> Self {
        WordsView {
            width: None,
            phases: vec![WordPhase::Idle; len],
        }
    }

    pub fn apply(&mut self, effect: WordEffect) {
        match effect {
            WordEffect::Resize { width } => self.width = Some(width),
            WordEffect::Phase { index, phase } => {
                if let Some(slot) = self.phases.get_mut(index) {
                    *slot = phase;
                }
            }
        }
    }

    /// CSS class of word `index`.
    pub fn class(&self, index: usize) -> &'static str {
        match self.phases.get(index) {
            Some(WordPhase::Active) => "active",
            Some(WordPhase::Exiting) => "exit-up",
            _ => "",
        }
    }

    pub fn style(&self) -> String {
        self.width
            .map(|width| format!("width: {width}px;"))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplashView {
    /// The overlay element is in the document.
    pub present: bool,
    pub fading: bool,
    pub words: WordsView,
}

/// Everything the intro changes on the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntroView {
    /// Scrolling and the navbar are locked while the splash plays.
    pub page_locked: bool,
    pub splash: SplashView,
    pub hero_words: WordsView,
    pub content_revealed: bool,
    pub devices_revealed: bool,
    pub visible_elements: Vec<bool>,
    /// The splash handed over and the hero owns the page.
    pub completed: bool,
}

impl IntroView {
    pub fn new(
        splash_present: bool,
        splash_words: usize,
        hero_words: usize,
        hero_elements: usize,
    ) -> Self {
        IntroView {
            splash: SplashView {
                present: splash_present,
                fading: false,
                words: WordsView::new(splash_words),
            },
            hero_words: WordsView::new(hero_words),
            visible_elements: vec![false; hero_elements],
            ..Default::default()
        }
    }

    /// State of the first render, before the intro has started.
    ///
    /// The overlay is only rendered, and the page only locked, when the splash
    /// will play. On every other path the hero wrappers start out revealed.
    pub fn initial(
        plays_splash: bool,
        splash_words: usize,
        hero_words: usize,
        hero_elements: usize,
    ) -> Self {
        let mut view = Self::new(plays_splash, splash_words, hero_words, hero_elements);
        view.page_locked = plays_splash;
        view.content_revealed = !plays_splash;
        view.devices_revealed = !plays_splash;
        view
    }

    pub fn apply(&mut self, effect: IntroEffect) {
        match effect {
            IntroEffect::LockPage => self.page_locked = true,
            IntroEffect::DiscardSplash => self.splash.present = false,
            IntroEffect::SplashWords(word) => self.splash.words.apply(word),
            IntroEffect::HeroWords(word) => self.hero_words.apply(word),
            IntroEffect::Splash(splash) => self.apply_splash(splash),
            IntroEffect::Hero(RevealEffect::ContentRevealed) => self.content_revealed = true,
            IntroEffect::Hero(RevealEffect::DevicesRevealed) => self.devices_revealed = true,
            IntroEffect::Hero(RevealEffect::ElementVisible(index)) => {
                if let Some(visible) = self.visible_elements.get_mut(index) {
                    *visible = true;
                }
            }
        }
    }

    pub fn element_visible(&self, index: usize) -> bool {
        self.visible_elements.get(index).copied().unwrap_or(false)
    }

    fn apply_splash(&mut self, effect: SplashEffect) {
        match effect {
            SplashEffect::Word(word) => self.splash.words.apply(word),
            SplashEffect::OverlayFadeOut => self.splash.fading = true,
            SplashEffect::UnlockPage => self.page_locked = false,
            SplashEffect::RevealHero => {}
            SplashEffect::RemoveOverlay => self.splash.present = false,
            SplashEffect::Completed => self.completed = true,
        }
    }
}
