//! Endless rotation of the hero title words.
use std::time::Duration;
use tracing::debug;

use crate::timeline::{Timeline, TimerId};
use crate::words::{WordCarousel, WordEffect, WordSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Start,
    Tick,
    ClearExit(usize),
}

/// Cycles `Rotating(i) → Rotating((i + 1) mod N)` every interval, with no terminal state.
///
/// The rotator is created unarmed so its container can be sized straight away;
/// [`HeroWordRotator::arm`] starts the clock.
#[derive(Debug)]
pub struct HeroWordRotator {
    carousel: WordCarousel,
    interval: Duration,
    exit_clear: Duration,
    timeline: Timeline<Task>,
    start_timer: Option<TimerId>,
    tick_timer: Option<TimerId>,
    ticks: usize,
}

impl HeroWordRotator {
    pub fn new(words: WordSet, interval: Duration, exit_clear: Duration, now: Duration) -> Self {
        HeroWordRotator {
            carousel: WordCarousel::new(words),
            interval,
            exit_clear,
            timeline: Timeline::starting_at(now),
            start_timer: None,
            tick_timer: None,
            ticks: 0,
        }
    }

    pub fn initial_layout(&mut self) -> Vec<WordEffect> {
        self.carousel.initial_layout()
    }

    /// Starts the repeating tick after `delay`. Arming twice has no effect.
    pub fn arm(&mut self, delay: Duration) {
        if self.is_armed() {
            return;
        }
        self.start_timer = Some(self.timeline.after(delay, Task::Start));
        debug!(delay_ms = delay.as_millis() as u64, "hero rotator armed");
    }

    pub fn is_armed(&self) -> bool {
        self.start_timer.is_some() || self.tick_timer.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.tick_timer.is_some()
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn active_index(&self) -> usize {
        self.carousel.cursor()
    }

    pub fn carousel(&self) -> &WordCarousel {
        &self.carousel
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timeline.next_deadline()
    }

    pub fn advance_to(&mut self, until: Duration) -> Vec<WordEffect> {
        let mut effects = Vec::new();
        while let Some((_, task)) = self.timeline.pop_due(until) {
            match task {
                Task::Start => {
                    self.start_timer = None;
                    self.tick_timer = Some(self.timeline.every(self.interval, Task::Tick));
                }
                Task::Tick => self.tick(&mut effects),
                Task::ClearExit(index) => effects.extend(self.carousel.clear_exit(index)),
            }
        }
        self.timeline.advance_clock(until);
        effects
    }

    /// Stops the rotation, e.g. when the page is torn down.
    pub fn stop(&mut self) {
        self.timeline.clear();
        self.start_timer = None;
        self.tick_timer = None;
    }

    fn tick(&mut self, effects: &mut Vec<WordEffect>) {
        let current = self.carousel.cursor();
        let next = (current + 1) % self.carousel.len();
        effects.extend(self.carousel.step_to(next));
        if next != current {
            self.timeline.after(self.exit_clear, Task::ClearExit(current));
        }
        self.ticks += 1;
    }
}
