//! One-shot splash intro: rotate through every word once, hold, then hand off to the hero.
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::session::{SPLASH_FLAG_KEY, SPLASH_FLAG_VALUE, SessionStore};
use crate::timeline::{Timeline, TimerId};
use crate::timing::IntroTiming;
use crate::words::{WordCarousel, WordEffect, WordSet};

/// Lifecycle of a [`SplashSequencer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashState {
    /// Constructed, waiting for the startup delay.
    Idle,
    /// Showing the word at this index.
    Rotating(usize),
    /// On the last word, step timer cancelled.
    Holding,
    /// Overlay fading out, hero about to appear.
    Revealing,
    Done,
}

/// Mutations requested by the sequencer, in the order they must be applied.
#[derive(Debug, Clone, PartialEq)]
pub enum SplashEffect {
    Word(WordEffect),
    OverlayFadeOut,
    /// Drop the splash-active lock: scrolling and navbar return to normal.
    UnlockPage,
    /// Mark the hero wrappers revealed and start the staggered fade-in.
    RevealHero,
    RemoveOverlay,
    /// The overlay is gone and nothing else will happen.
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Start,
    Step,
    ClearExit(usize),
    Reveal,
    ShowHero,
    RemoveOverlay,
}

/// Drives the splash overlay through `Idle → Rotating(0..N) → Holding → Revealing → Done`.
///
/// The sequencer owns the session store it was handed by the gate and writes
/// the splash flag exactly once, when the reveal begins.
pub struct SplashSequencer<S> {
    carousel: WordCarousel,
    timing: IntroTiming,
    store: S,
    state: SplashState,
    timeline: Timeline<Task>,
    step_timer: Option<TimerId>,
    steps_taken: usize,
    flag_written: bool,
}

impl<S: SessionStore> SplashSequencer<S> {
    /// Creates a sequencer at time `now` and schedules its start.
    pub fn new(words: WordSet, timing: IntroTiming, store: S, now: Duration) -> Self {
        let mut timeline = Timeline::starting_at(now);
        timeline.after(timing.splash_start_delay(), Task::Start);
        debug!(words = words.len(), "splash sequencer created");

        SplashSequencer {
            carousel: WordCarousel::new(words),
            timing,
            store,
            state: SplashState::Idle,
            timeline,
            step_timer: None,
            steps_taken: 0,
            flag_written: false,
        }
    }

    /// Container size and active word before the first step.
    pub fn initial_layout(&mut self) -> Vec<SplashEffect> {
        self.carousel
            .initial_layout()
            .into_iter()
            .map(SplashEffect::Word)
            .collect()
    }

    pub fn state(&self) -> SplashState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == SplashState::Done
    }

    /// Number of word transitions performed so far.
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn carousel(&self) -> &WordCarousel {
        &self.carousel
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the repeating step timer is still armed.
    pub fn is_stepping(&self) -> bool {
        self.step_timer
            .is_some_and(|id| self.timeline.is_scheduled(id))
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timeline.next_deadline()
    }

    /// Runs every task due at or before `until`, in time order.
    pub fn advance_to(&mut self, until: Duration) -> Vec<SplashEffect> {
        let mut effects = Vec::new();
        while let Some((_, task)) = self.timeline.pop_due(until) {
            self.run(task, &mut effects);
        }
        self.timeline.advance_clock(until);
        effects
    }

    /// Cancels every pending task, e.g. when the page is torn down mid-splash.
    pub fn abort(&mut self) {
        if !self.timeline.is_idle() {
            debug!(state = ?self.state, "splash sequencer aborted");
        }
        self.timeline.clear();
        self.step_timer = None;
    }

    fn run(&mut self, task: Task, effects: &mut Vec<SplashEffect>) {
        match task {
            Task::Start => self.start(),
            Task::Step => self.step(effects),
            Task::ClearExit(index) => {
                effects.extend(self.carousel.clear_exit(index).map(SplashEffect::Word));
            }
            Task::Reveal => self.reveal(effects),
            Task::ShowHero => {
                effects.push(SplashEffect::RevealHero);
                self.timeline
                    .after(self.timing.overlay_removal(), Task::RemoveOverlay);
            }
            Task::RemoveOverlay => {
                effects.push(SplashEffect::RemoveOverlay);
                effects.push(SplashEffect::Completed);
                self.state = SplashState::Done;
                info!(steps = self.steps_taken, "splash intro completed");
            }
        }
    }

    fn start(&mut self) {
        if self.state != SplashState::Idle {
            return;
        }
        self.state = SplashState::Rotating(0);
        self.step_timer = Some(self.timeline.every(self.timing.splash_step(), Task::Step));
        debug!("splash rotation started");
    }

    fn step(&mut self, effects: &mut Vec<SplashEffect>) {
        let SplashState::Rotating(current) = self.state else {
            return;
        };

        let next = current + 1;
        if next < self.carousel.len() {
            effects.extend(self.carousel.step_to(next).into_iter().map(SplashEffect::Word));
            self.timeline
                .after(self.timing.exit_clear(), Task::ClearExit(current));
            self.steps_taken += 1;
            self.state = SplashState::Rotating(next);
            debug!(index = next, "splash word advanced");
        }

        if self.carousel.is_on_last() {
            if let Some(id) = self.step_timer.take() {
                self.timeline.cancel(id);
            }
            self.state = SplashState::Holding;
            self.timeline.after(self.timing.splash_hold(), Task::Reveal);
            debug!("splash holding on last word");
        }
    }

    fn reveal(&mut self, effects: &mut Vec<SplashEffect>) {
        if self.state != SplashState::Holding {
            return;
        }
        self.state = SplashState::Revealing;
        effects.push(SplashEffect::OverlayFadeOut);
        self.mark_shown();
        effects.push(SplashEffect::UnlockPage);
        self.timeline
            .after(self.timing.overlay_fade(), Task::ShowHero);
    }

    fn mark_shown(&mut self) {
        if self.flag_written {
            return;
        }
        self.flag_written = true;
        if let Err(e) = self.store.set(SPLASH_FLAG_KEY, SPLASH_FLAG_VALUE) {
            warn!("could not persist splash flag: {e}");
        }
    }
}
