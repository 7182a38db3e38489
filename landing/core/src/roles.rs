//! The sticky roles section: one item active at a time, picked by click or by scroll progress.
use tracing::debug;

/// Which of `count` items is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSelector {
    count: usize,
    active: usize,
}

impl RoleSelector {
    pub fn new(count: usize) -> Self {
        RoleSelector { count, active: 0 }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.count > 0 && self.active == index
    }

    /// Activates `index`. Returns `true` if the selection changed; out-of-range
    /// indices are ignored.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.count || index == self.active {
            return false;
        }
        debug!(from = self.active, to = index, "role activated");
        self.active = index;
        true
    }

    /// Activates the item matching how far the scroll area has been scrolled
    /// through. Returns `true` if the selection changed.
    pub fn on_scroll(&mut self, area_top: f64, area_height: f64, viewport_height: f64) -> bool {
        if self.count == 0 {
            return false;
        }
        let progress = scroll_progress(area_top, area_height, viewport_height);
        self.activate(index_for_progress(progress, self.count))
    }
}

/// Progress through a sticky scroll area: 0 when its top reaches the top of the
/// viewport, 1 when its bottom reaches the bottom.
pub fn scroll_progress(area_top: f64, area_height: f64, viewport_height: f64) -> f64 {
    let scrollable = area_height - viewport_height;
    if scrollable <= 0.0 {
        return if area_top < 0.0 { 1.0 } else { 0.0 };
    }
    (-area_top / scrollable).clamp(0.0, 1.0)
}

/// Splits progress into `count` equal segments and returns the segment index.
pub fn index_for_progress(progress: f64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let index = (progress * count as f64).floor();
    (index.max(0.0) as usize).min(count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_role() {
        let roles = RoleSelector::new(4);

        assert_eq!(roles.active(), 0);
        assert!(roles.is_active(0));
    }

    #[test]
    fn click_activates_role() {
        let mut roles = RoleSelector::new(4);

        assert!(roles.activate(2));
        assert!(!roles.activate(2));
        assert!(!roles.activate(9));
        assert_eq!(roles.active(), 2);
    }

    #[test]
    fn scroll_progress_selects_segment() {
        let mut roles = RoleSelector::new(4);

        // 4000px area in an 1000px viewport: 3000px of travel, 750px per role.
        assert!(!roles.on_scroll(0.0, 4000.0, 1000.0));
        assert!(roles.on_scroll(-800.0, 4000.0, 1000.0));
        assert_eq!(roles.active(), 1);
        assert!(roles.on_scroll(-3000.0, 4000.0, 1000.0));
        assert_eq!(roles.active(), 3);
        assert!(!roles.on_scroll(-5000.0, 4000.0, 1000.0));
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(500.0, 4000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(-9000.0, 4000.0, 1000.0), 1.0);
        assert_eq!(index_for_progress(1.0, 4), 3);
    }

    #[test]
    fn empty_selector_never_activates() {
        let mut roles = RoleSelector::new(0);

        assert!(!roles.activate(0));
        assert!(!roles.on_scroll(-100.0, 4000.0, 1000.0));
        assert!(!roles.is_active(0));
    }
}
