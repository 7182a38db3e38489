//! Navbar, mobile menu, in-page anchors and the scroll-to-top button.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scroll thresholds and offsets used across the page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageSettings {
    /// Scroll offset past which the navbar takes its "scrolled" look.
    pub navbar_scrolled_threshold: f64,
    /// Scroll offset past which the scroll-to-top button shows.
    pub scroll_top_threshold: f64,
    /// Height of the fixed navbar, kept clear when jumping to an anchor.
    pub anchor_offset: f64,
    /// Minimum visible share before a scroll-reveal element appears.
    pub reveal_threshold: f64,
}

impl Default for PageSettings {
    fn default() -> Self {
        PageSettings {
            navbar_scrolled_threshold: 50.0,
            scroll_top_threshold: 500.0,
            anchor_offset: 80.0,
            reveal_threshold: crate::reveal::SCROLL_REVEAL_THRESHOLD,
        }
    }
}

impl PageSettings {
    pub fn navbar_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.navbar_scrolled_threshold
    }

    pub fn scroll_top_visible(&self, scroll_y: f64) -> bool {
        scroll_y > self.scroll_top_threshold
    }

    /// Scroll position that puts an anchor target just below the navbar.
    pub fn anchor_scroll_top(&self, target_offset_top: f64) -> f64 {
        (target_offset_top - self.anchor_offset).max(0.0)
    }
}

/// Fragment id an in-page link points at. Bare `#` and external links have none.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Open/closed state of the mobile navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Closes the menu, e.g. after one of its links was followed.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The body must not scroll while the menu covers the page.
    pub fn locks_scroll(&self) -> bool {
        self.open
    }
}
