//! One-way hidden → visible transitions: the hero reveal and scroll-triggered reveals.
use std::time::Duration;
use tracing::debug;

use crate::timeline::Timeline;

/// Default share of an element that must be on screen before it reveals.
pub const SCROLL_REVEAL_THRESHOLD: f64 = 0.15;
/// Threshold of the feature cards, which reveal once.
pub const CARD_REVEAL_THRESHOLD: f64 = 0.1;
/// Pixels the viewport is shrunk by on every side when watching feature cards.
pub const CARD_REVEAL_MARGIN: f64 = 50.0;
/// Threshold of the closing call-to-action device stack.
pub const CTA_REVEAL_THRESHOLD: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    /// Scheduled to appear.
    Revealing,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEffect {
    ContentRevealed,
    DevicesRevealed,
    /// Staggered hero element `i` becomes visible.
    ElementVisible(usize),
}

/// The hero's content wrapper, device wrapper and its staggered fade-in elements.
#[derive(Debug)]
pub struct HeroReveal {
    content: RevealState,
    devices: RevealState,
    elements: Vec<RevealState>,
    stagger: Duration,
    timeline: Timeline<usize>,
}

impl HeroReveal {
    pub fn new(element_count: usize, stagger: Duration, now: Duration) -> Self {
        HeroReveal {
            content: RevealState::Hidden,
            devices: RevealState::Hidden,
            elements: vec![RevealState::Hidden; element_count],
            stagger,
            timeline: Timeline::starting_at(now),
        }
    }

    /// Reveals both wrappers now and schedules element `i` at `lead_in + i × stagger`.
    ///
    /// Only the first call has any effect.
    pub fn reveal(&mut self, lead_in: Duration) -> Vec<RevealEffect> {
        if self.is_triggered() {
            return Vec::new();
        }

        self.content = RevealState::Revealed;
        self.devices = RevealState::Revealed;
        for (index, element) in self.elements.iter_mut().enumerate() {
            *element = RevealState::Revealing;
            let offset = self
                .stagger
                .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
            self.timeline.after(lead_in.saturating_add(offset), index);
        }
        debug!(elements = self.elements.len(), "hero reveal triggered");

        vec![RevealEffect::ContentRevealed, RevealEffect::DevicesRevealed]
    }

    pub fn is_triggered(&self) -> bool {
        self.content != RevealState::Hidden
    }

    pub fn content(&self) -> RevealState {
        self.content
    }

    pub fn devices(&self) -> RevealState {
        self.devices
    }

    pub fn element(&self, index: usize) -> Option<RevealState> {
        self.elements.get(index).copied()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timeline.next_deadline()
    }

    pub fn advance_to(&mut self, until: Duration) -> Vec<RevealEffect> {
        let mut effects = Vec::new();
        while let Some((_, index)) = self.timeline.pop_due(until) {
            if let Some(element) = self.elements.get_mut(index) {
                *element = RevealState::Revealed;
                effects.push(RevealEffect::ElementVisible(index));
            }
        }
        self.timeline.advance_clock(until);
        effects
    }

    /// Drops any fade-ins that have not happened yet.
    pub fn cancel(&mut self) {
        self.timeline.clear();
    }
}

/// Share of an element of height `height` at viewport offset `top` that is on screen.
pub fn intersection_ratio(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 {
        return if top >= 0.0 && top <= viewport_height { 1.0 } else { 0.0 };
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

/// Like [`intersection_ratio`], against a viewport shrunk by `margin` on every side.
pub fn inset_intersection_ratio(top: f64, height: f64, viewport_height: f64, margin: f64) -> f64 {
    let inner_height = (viewport_height - 2.0 * margin).max(0.0);
    intersection_ratio(top - margin, height, inner_height)
}

/// An element that becomes visible once enough of it scrolls into view.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollReveal {
    threshold: f64,
    margin: f64,
    delay: Duration,
    state: RevealState,
}

impl Default for ScrollReveal {
    fn default() -> Self {
        Self::new(SCROLL_REVEAL_THRESHOLD, Duration::ZERO)
    }
}

impl ScrollReveal {
    pub fn new(threshold: f64, delay: Duration) -> Self {
        ScrollReveal {
            threshold,
            margin: 0.0,
            delay,
            state: RevealState::Hidden,
        }
    }

    /// Watches the element against a viewport inset by `margin` pixels.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    /// Share of the element inside the watched part of the viewport.
    pub fn ratio(&self, top: f64, height: f64, viewport_height: f64) -> f64 {
        inset_intersection_ratio(top, height, viewport_height, self.margin)
    }

    /// Reports a new intersection ratio. Returns the delay after which the element
    /// should be shown the first time the threshold is crossed.
    pub fn observe(&mut self, ratio: f64) -> Option<Duration> {
        if self.state != RevealState::Hidden || ratio <= 0.0 || ratio < self.threshold {
            return None;
        }
        self.state = RevealState::Revealing;
        Some(self.delay)
    }

    /// Called once the delay has elapsed.
    pub fn complete(&mut self) {
        self.state = RevealState::Revealed;
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn reveals_wrappers_immediately_and_staggers_elements() {
        let mut hero = HeroReveal::new(3, ms(150), ms(1000));

        let effects = hero.reveal(ms(100));

        assert_eq!(
            effects,
            vec![RevealEffect::ContentRevealed, RevealEffect::DevicesRevealed]
        );
        assert_eq!(hero.element(0), Some(RevealState::Revealing));

        assert_eq!(hero.advance_to(ms(1100)), vec![RevealEffect::ElementVisible(0)]);
        assert!(hero.advance_to(ms(1249)).is_empty());
        assert_eq!(
            hero.advance_to(ms(1400)),
            vec![RevealEffect::ElementVisible(1), RevealEffect::ElementVisible(2)]
        );
        assert_eq!(hero.element(2), Some(RevealState::Revealed));
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut hero = HeroReveal::new(2, ms(150), Duration::ZERO);

        assert_eq!(hero.reveal(Duration::ZERO).len(), 2);
        assert!(hero.reveal(Duration::ZERO).is_empty());

        let visible = hero.advance_to(ms(10_000));
        assert_eq!(visible.len(), 2);
        assert_eq!(hero.content(), RevealState::Revealed);
        assert_eq!(hero.devices(), RevealState::Revealed);
    }

    #[test]
    fn hero_without_elements_only_reveals_wrappers() {
        let mut hero = HeroReveal::new(0, ms(150), Duration::ZERO);

        hero.reveal(Duration::ZERO);

        assert!(hero.next_deadline().is_none());
    }

    #[test]
    fn oversized_stagger_pushes_later_elements_to_the_end_of_the_clock() {
        let mut hero = HeroReveal::new(3, Duration::MAX, Duration::ZERO);

        hero.reveal(ms(100));

        assert_eq!(hero.advance_to(ms(100)), vec![RevealEffect::ElementVisible(0)]);
        assert_eq!(hero.next_deadline(), Some(Duration::MAX));
        assert_eq!(hero.element(1), Some(RevealState::Revealing));
    }

    #[test]
    fn intersection_ratio_accounts_for_partial_visibility() {
        assert_eq!(intersection_ratio(0.0, 100.0, 800.0), 1.0);
        assert_eq!(intersection_ratio(750.0, 100.0, 800.0), 0.5);
        assert_eq!(intersection_ratio(-80.0, 100.0, 800.0), 0.2);
        assert_eq!(intersection_ratio(900.0, 100.0, 800.0), 0.0);
        assert_eq!(intersection_ratio(-300.0, 100.0, 800.0), 0.0);
    }

    #[test]
    fn inset_viewport_hides_the_edges() {
        // 40px of a 100px card pokes into an 800px viewport, but only the inner 700px count.
        assert_eq!(intersection_ratio(760.0, 100.0, 800.0), 0.4);
        assert_eq!(inset_intersection_ratio(760.0, 100.0, 800.0, 50.0), 0.0);
        assert_eq!(inset_intersection_ratio(700.0, 100.0, 800.0, 50.0), 0.5);
        assert_eq!(inset_intersection_ratio(0.0, 100.0, 80.0, 50.0), 0.0);
    }

    #[test]
    fn card_reveal_waits_for_the_inset_viewport() {
        let mut card = ScrollReveal::new(CARD_REVEAL_THRESHOLD, Duration::ZERO)
            .with_margin(CARD_REVEAL_MARGIN);

        let ratio = card.ratio(745.0, 100.0, 800.0);
        assert_eq!(card.observe(ratio), None);

        let ratio = card.ratio(720.0, 100.0, 800.0);
        assert_eq!(card.observe(ratio), Some(Duration::ZERO));
        card.complete();

        let ratio = card.ratio(2000.0, 100.0, 800.0);
        assert_eq!(card.observe(ratio), None);
        assert!(card.is_visible());
    }

    #[test]
    fn scroll_reveal_fires_once_past_threshold() {
        let mut reveal = ScrollReveal::new(0.15, ms(200));

        assert_eq!(reveal.observe(0.1), None);
        assert_eq!(reveal.observe(0.5), Some(ms(200)));
        assert_eq!(reveal.observe(0.9), None);
        assert_eq!(reveal.state(), RevealState::Revealing);

        reveal.complete();
        assert!(reveal.is_visible());
    }
}
