use std::time::Duration;

use landing_core::session::splash_shown;
use landing_core::{
    HeroIntro, HeroWordRotator, IntroEffect, IntroPath, IntroSetup, IntroTiming, MemoryStore,
    RevealEffect, SplashEffect, SplashSequencer, SplashState, Word, WordEffect, WordPhase,
    WordSet,
};

const SPLASH_WORDS: [&str; 5] = ["love", "memories", "moments", "stories", "legacy"];

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn words(texts: &[&str]) -> Vec<Word> {
    texts
        .iter()
        .map(|text| Word::measured(*text, text.len() as f64 * 12.0))
        .collect()
}

fn first_visit() -> HeroIntro<MemoryStore> {
    HeroIntro::new(
        IntroSetup {
            splash_words: Some(words(&SPLASH_WORDS)),
            hero_words: words(&["together", "forever", "always"]),
            hero_elements: 4,
        },
        IntroTiming::default(),
        MemoryStore::new(),
    )
}

fn activated_splash_word(effects: &[IntroEffect]) -> Option<usize> {
    effects.iter().find_map(|effect| match effect {
        IntroEffect::SplashWords(WordEffect::Phase {
            index,
            phase: WordPhase::Active,
        }) => Some(*index),
        _ => None,
    })
}

#[test]
fn five_word_splash_follows_the_reference_timeline() {
    let mut splash = SplashSequencer::new(
        WordSet::new(words(&SPLASH_WORDS)).unwrap(),
        IntroTiming::default(),
        MemoryStore::new(),
        Duration::ZERO,
    );
    splash.initial_layout();

    splash.advance_to(ms(1000));
    assert_eq!(splash.state(), SplashState::Rotating(0));

    for (index, at) in [(1, 2800), (2, 4600), (3, 6400)] {
        splash.advance_to(ms(at - 1));
        assert_eq!(splash.carousel().cursor(), index - 1);
        splash.advance_to(ms(at));
        assert_eq!(splash.state(), SplashState::Rotating(index), "at {at} ms");
    }

    splash.advance_to(ms(8200));
    assert_eq!(splash.carousel().cursor(), 4);
    assert_eq!(splash.state(), SplashState::Holding);
    assert!(!splash.is_stepping());
    assert_eq!(splash.steps_taken(), 4);

    splash.advance_to(ms(9699));
    assert!(!splash_shown(splash.store()));

    let effects = splash.advance_to(ms(9700));
    assert_eq!(splash.state(), SplashState::Revealing);
    assert!(effects.contains(&SplashEffect::OverlayFadeOut));
    assert!(splash_shown(splash.store()));
}

#[test]
fn first_visit_plays_the_whole_intro() {
    let mut intro = first_visit();

    let effects = intro.start();
    assert_eq!(intro.path(), IntroPath::Splash);
    assert_eq!(
        effects.first(),
        Some(&IntroEffect::HeroWords(WordEffect::Resize { width: 104.0 }))
    );
    assert!(effects.contains(&IntroEffect::LockPage));
    assert_eq!(activated_splash_word(&effects), Some(0));

    for (expected, at) in [(1, 2800), (2, 4600), (3, 6400), (4, 8200)] {
        let effects = intro.advance_to(ms(at));
        assert_eq!(activated_splash_word(&effects), Some(expected), "at {at} ms");
    }
    assert_eq!(intro.splash_state(), Some(SplashState::Holding));

    let effects = intro.advance_to(ms(9700));
    assert!(effects.contains(&IntroEffect::Splash(SplashEffect::UnlockPage)));
    assert!(!intro.reveal().is_triggered());

    let effects = intro.advance_to(ms(10_500));
    assert!(effects.contains(&IntroEffect::Hero(RevealEffect::ContentRevealed)));
    assert!(effects.contains(&IntroEffect::Hero(RevealEffect::ElementVisible(0))));

    let effects = intro.advance_to(ms(11_000));
    assert!(effects.contains(&IntroEffect::Splash(SplashEffect::RemoveOverlay)));
    assert!(effects.contains(&IntroEffect::Splash(SplashEffect::Completed)));
    assert_eq!(intro.splash_state(), Some(SplashState::Done));
    assert!(intro.splash().is_some_and(|splash| splash_shown(splash.store())));
}

#[test]
fn hero_wrappers_are_revealed_exactly_once() {
    let mut intro = first_visit();

    let mut effects = intro.start();
    effects.extend(intro.advance_to(ms(120_000)));

    let content = effects
        .iter()
        .filter(|effect| **effect == IntroEffect::Hero(RevealEffect::ContentRevealed))
        .count();
    let devices = effects
        .iter()
        .filter(|effect| **effect == IntroEffect::Hero(RevealEffect::DevicesRevealed))
        .count();
    assert_eq!((content, devices), (1, 1));

    let visible = effects
        .iter()
        .filter(|effect| matches!(effect, IntroEffect::Hero(RevealEffect::ElementVisible(_))))
        .count();
    assert_eq!(visible, 4);
}

#[test]
fn hero_rotation_waits_for_splash_completion() {
    let mut intro = first_visit();
    intro.start();

    let before: Vec<_> = intro
        .advance_to(ms(10_999))
        .into_iter()
        .filter(|effect| matches!(effect, IntroEffect::HeroWords(_)))
        .collect();
    assert!(before.is_empty());
    assert!(intro.rotator().is_some_and(|rotator| !rotator.is_armed()));

    intro.advance_to(ms(11_000));
    assert!(intro.rotator().is_some_and(HeroWordRotator::is_running));

    intro.advance_to(ms(11_000 + 2800));
    let rotator = intro.rotator().unwrap();
    assert_eq!(rotator.ticks(), 1);
    assert_eq!(rotator.active_index(), 1);
}

#[test]
fn returning_visitor_sees_the_hero_immediately() {
    let mut intro = HeroIntro::new(
        IntroSetup {
            splash_words: Some(words(&SPLASH_WORDS)),
            hero_words: words(&["together", "forever"]),
            hero_elements: 2,
        },
        IntroTiming::default(),
        MemoryStore::with_splash_shown(),
    );

    let effects = intro.start();

    assert!(intro.splash().is_none());
    assert_eq!(intro.splash_state(), None);
    assert!(effects.contains(&IntroEffect::DiscardSplash));
    assert!(effects.contains(&IntroEffect::Hero(RevealEffect::ContentRevealed)));
    assert!(effects.contains(&IntroEffect::Hero(RevealEffect::DevicesRevealed)));

    // Elements fade in after the short lead-in, not after the splash hand-off delays.
    assert_eq!(
        intro.advance_to(ms(100)),
        vec![IntroEffect::Hero(RevealEffect::ElementVisible(0))]
    );
    assert_eq!(
        intro.advance_to(ms(250)),
        vec![IntroEffect::Hero(RevealEffect::ElementVisible(1))]
    );

    intro.advance_to(ms(1500));
    assert!(intro.rotator().is_some_and(HeroWordRotator::is_running));
}

#[test]
fn page_without_splash_element_reveals_hero_unlocked() {
    let mut intro = HeroIntro::new(
        IntroSetup {
            splash_words: None,
            hero_words: words(&["together"]),
            hero_elements: 1,
        },
        IntroTiming::default(),
        MemoryStore::new(),
    );

    let effects = intro.start();

    assert_eq!(intro.path(), IntroPath::NoSplash);
    assert!(!effects.contains(&IntroEffect::DiscardSplash));
    assert!(!effects.contains(&IntroEffect::LockPage));
    assert!(intro.reveal().is_triggered());
}

#[test]
fn empty_hero_word_set_schedules_nothing() {
    let mut intro = HeroIntro::new(
        IntroSetup {
            splash_words: None,
            hero_words: Vec::new(),
            hero_elements: 0,
        },
        IntroTiming::default(),
        MemoryStore::new(),
    );

    let effects = intro.start();

    assert!(intro.rotator().is_none());
    assert!(
        !effects
            .iter()
            .any(|effect| matches!(effect, IntroEffect::HeroWords(_)))
    );
    assert!(intro.next_deadline().is_none());
    assert!(intro.advance_to(ms(60_000)).is_empty());
}

#[test]
fn hero_active_index_is_ticks_modulo_word_count() {
    for count in 1..=6usize {
        let hero_words: Vec<String> = (0..count).map(|i| format!("word{i}")).collect();
        let hero_words: Vec<&str> = hero_words.iter().map(String::as_str).collect();
        let mut intro = HeroIntro::new(
            IntroSetup {
                splash_words: None,
                hero_words: words(&hero_words),
                hero_elements: 0,
            },
            IntroTiming::default(),
            MemoryStore::new(),
        );
        intro.start();

        for k in 0..20u64 {
            intro.advance_to(ms(1500 + 2800 * k));
            let rotator = intro.rotator().unwrap();
            assert_eq!(rotator.ticks() as u64, k);
            assert_eq!(rotator.active_index(), k as usize % count, "N={count}, k={k}");
        }
    }
}
