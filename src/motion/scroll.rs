//! Scroll-derived state.
//!
//! A [`ScrollSample`] holds the latest vertical scroll position, coalesced
//! to at most one update per animation frame by the watcher that produces
//! it. Everything derived from it is a pure function of `scroll_y`, fully
//! reversible when the user scrolls back up.

/// Scroll depth past which the navbar switches to its compact style.
pub const NAVBAR_COMPACT_AT: f64 = 100.0;

/// Scroll depth past which the back-to-top button appears.
pub const BACK_TO_TOP_AT: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSample {
    pub scroll_y: f64,
}

impl ScrollSample {
    pub fn new(scroll_y: f64) -> Self {
        ScrollSample { scroll_y }
    }

    pub fn navbar_compact(&self) -> bool {
        self.scroll_y > NAVBAR_COMPACT_AT
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.scroll_y > BACK_TO_TOP_AT
    }
}

/// Normalized progress through a trigger band, for continuous effects like
/// parallax: 0 before the band, 1 past it, linear in between. A degenerate
/// band reports 0.
pub fn band_progress(scroll_y: f64, band_top: f64, band_height: f64) -> f64 {
    if band_height <= 0.0 {
        return 0.0;
    }
    ((scroll_y - band_top) / band_height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_compact_threshold_is_exclusive_and_reversible() {
        assert!(!ScrollSample::new(0.0).navbar_compact());
        assert!(!ScrollSample::new(100.0).navbar_compact());
        assert!(ScrollSample::new(100.1).navbar_compact());
        // scrolling back up releases the compact style
        assert!(!ScrollSample::new(40.0).navbar_compact());
    }

    #[test]
    fn back_to_top_threshold_is_exclusive_and_reversible() {
        assert!(!ScrollSample::new(300.0).back_to_top_visible());
        assert!(ScrollSample::new(301.0).back_to_top_visible());
        assert!(!ScrollSample::new(299.0).back_to_top_visible());
    }

    #[test]
    fn band_progress_clamps_to_unit_interval() {
        assert_eq!(band_progress(-50.0, 0.0, 800.0), 0.0);
        assert_eq!(band_progress(0.0, 0.0, 800.0), 0.0);
        assert_eq!(band_progress(400.0, 0.0, 800.0), 0.5);
        assert_eq!(band_progress(800.0, 0.0, 800.0), 1.0);
        assert_eq!(band_progress(2000.0, 0.0, 800.0), 1.0);
    }

    #[test]
    fn band_progress_handles_offset_and_degenerate_bands() {
        assert_eq!(band_progress(150.0, 100.0, 100.0), 0.5);
        assert_eq!(band_progress(500.0, 0.0, 0.0), 0.0);
        assert_eq!(band_progress(500.0, 0.0, -10.0), 0.0);
    }
}
