//! Scroll and pointer driven offsets for the decorative shapes and device mockups.
use std::time::Duration;

/// Pointer intensity per hero device, in document order: phone, desktop, tablet.
pub const DEVICE_INTENSITIES: [f64; 3] = [15.0, 5.0, 10.0];
/// Intensity for any device beyond [`DEVICE_INTENSITIES`].
pub const FALLBACK_INTENSITY: f64 = 8.0;
/// Speed used when a section device does not declare one.
pub const DEFAULT_SECTION_SPEED: f64 = 0.05;
/// Minimum time between two pointer-driven updates.
pub const POINTER_THROTTLE: Duration = Duration::from_millis(16);

/// A viewport-relative rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Bounds {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Maps a pointer position to `[-0.5, 0.5]` on both axes, centred on the rectangle.
    pub fn normalize(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return (0.0, 0.0);
        }
        (
            (client_x - self.left) / self.width - 0.5,
            (client_y - self.top) / self.height - 0.5,
        )
    }
}

/// A translation in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn css_translate(&self) -> String {
        format!("translate({:.2}px, {:.2}px)", self.x, self.y)
    }
}

/// Vertical drift of the `index`-th background shape; later shapes move faster.
pub fn shape_offset(scroll_y: f64, index: usize) -> f64 {
    scroll_y * (0.05 + index as f64 * 0.02)
}

pub fn device_intensity(index: usize) -> f64 {
    DEVICE_INTENSITIES
        .get(index)
        .copied()
        .unwrap_or(FALLBACK_INTENSITY)
}

/// Offset of hero device `index` for a normalised pointer position.
pub fn device_offset(normalized: (f64, f64), index: usize) -> Offset {
    let intensity = device_intensity(index);
    Offset {
        x: normalized.0 * intensity,
        y: normalized.1 * intensity,
    }
}

/// How far a section has travelled through the viewport, from 0 (just entering
/// at the bottom) to 1 (just leaving at the top). `None` while it is off screen.
pub fn section_progress(section: &Bounds, viewport_height: f64) -> Option<f64> {
    if section.bottom() < 0.0 || section.top > viewport_height {
        return None;
    }
    let span = viewport_height + section.height;
    if span <= 0.0 {
        return None;
    }
    Some((viewport_height - section.top) / span)
}

/// Vertical scroll parallax for a device travelling at `speed`.
pub fn section_scroll_offset(progress: f64, speed: f64) -> f64 {
    (progress - 0.5) * speed * 300.0
}

/// Pointer parallax for a device travelling at `speed`.
pub fn section_pointer_offset(normalized: (f64, f64), speed: f64) -> Offset {
    let intensity = speed * 150.0;
    Offset {
        x: normalized.0 * intensity,
        y: normalized.1 * intensity,
    }
}

/// Lets an action through at most once per `limit`.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    last: Option<Duration>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Throttle { limit, last: None }
    }

    /// Returns whether the action may run at `now`, recording it if so.
    pub fn ready(&mut self, now: Duration) -> bool {
        match self.last {
            Some(last) if now.saturating_sub(last) < self.limit => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(POINTER_THROTTLE)
    }
}
