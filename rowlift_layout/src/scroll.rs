// Copyright 2026 the Rowlift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-scroll regulation while a drag point nears the viewport edges.

/// Scroll delta per tick in the outer edge regions, in pixels.
pub const SLOW_SCROLL_SPEED: f64 = 4.0;

/// Scroll delta per tick close to the very top or bottom, in pixels.
pub const FAST_SCROLL_SPEED: f64 = 16.0;

/// How far below the viewport midpoint to re-probe for a scroll anchor when
/// the first probe lands in a gap between rows, in pixels.
pub const ANCHOR_RETRY_OFFSET: f64 = 64.0;

/// The vertical band within which no auto-scroll happens.
///
/// Initialized at grab time from the grab point and a touch-slop tolerance,
/// then progressively locked to the middle third of the viewport as the drag
/// point crosses into it. Within one drag the band only tightens; it never
/// reopens, which prevents scroll oscillation around the thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollBounds {
    /// Upper edge of the no-scroll band; dragging above it scrolls up.
    pub upper: f64,
    /// Lower edge of the no-scroll band; dragging below it scrolls down.
    pub lower: f64,
}

impl ScrollBounds {
    /// Bounds for a drag grabbed at y-coordinate `y` in a viewport of the
    /// given height: `[min(y - slop, h/3), max(y + slop, 2h/3)]`.
    #[must_use]
    pub fn at_grab(y: f64, touch_slop: f64, viewport_height: f64) -> Self {
        Self {
            upper: (y - touch_slop).min(viewport_height / 3.0),
            lower: (y + touch_slop).max(viewport_height * 2.0 / 3.0),
        }
    }

    /// Locks the bounds to the viewport thirds once the drag point has
    /// crossed them.
    pub fn tighten(&mut self, y: f64, viewport_height: f64) {
        if y >= viewport_height / 3.0 {
            self.upper = viewport_height / 3.0;
        }
        if y <= viewport_height * 2.0 / 3.0 {
            self.lower = viewport_height * 2.0 / 3.0;
        }
    }

    /// Signed scroll delta for the current drag point, in pixels.
    ///
    /// Zero inside `[upper, lower]`. Above the band the list scrolls up
    /// (negative delta), below it down (positive delta); the fast tier kicks
    /// in within the outer half of either edge region.
    #[must_use]
    pub fn speed(&self, y: f64, viewport_height: f64) -> f64 {
        if y > self.lower {
            if y > (viewport_height + self.lower) / 2.0 {
                FAST_SCROLL_SPEED
            } else {
                SLOW_SCROLL_SPEED
            }
        } else if y < self.upper {
            if y < self.upper / 2.0 {
                -FAST_SCROLL_SPEED
            } else {
                -SLOW_SCROLL_SPEED
            }
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grab_in_viewport_middle_initializes_to_thirds() {
        // Viewport 300, slop 10, grab at y = 150:
        // upper = min(140, 100) = 100, lower = max(160, 200) = 200.
        let bounds = ScrollBounds::at_grab(150.0, 10.0, 300.0);
        assert_eq!(bounds.upper, 100.0);
        assert_eq!(bounds.lower, 200.0);
    }

    #[test]
    fn grab_near_top_keeps_slop_band_until_crossed() {
        let mut bounds = ScrollBounds::at_grab(20.0, 10.0, 300.0);
        assert_eq!(bounds.upper, 10.0);
        assert_eq!(bounds.lower, 200.0);

        // No scroll just below the grab point.
        assert_eq!(bounds.speed(25.0, 300.0), 0.0);

        // Crossing into the middle third locks the upper bound.
        bounds.tighten(120.0, 300.0);
        assert_eq!(bounds.upper, 100.0);
    }

    #[test]
    fn bounds_only_tighten_across_calls() {
        let mut bounds = ScrollBounds::at_grab(150.0, 10.0, 300.0);
        let mut last = bounds;
        for y in [150.0, 40.0, 250.0, 10.0, 290.0, 150.0] {
            bounds.tighten(y, 300.0);
            assert!(bounds.upper >= last.upper, "upper bound loosened");
            assert!(bounds.lower <= last.lower, "lower bound loosened");
            last = bounds;
        }
        assert_eq!(bounds.upper, 100.0);
        assert_eq!(bounds.lower, 200.0);
    }

    #[test]
    fn speed_tiers_mirror_at_both_edges() {
        let bounds = ScrollBounds {
            upper: 100.0,
            lower: 200.0,
        };
        // Inside the band: no scroll.
        assert_eq!(bounds.speed(150.0, 300.0), 0.0);
        assert_eq!(bounds.speed(100.0, 300.0), 0.0);
        assert_eq!(bounds.speed(200.0, 300.0), 0.0);
        // Edge regions: slow tier.
        assert_eq!(bounds.speed(80.0, 300.0), -SLOW_SCROLL_SPEED);
        assert_eq!(bounds.speed(220.0, 300.0), SLOW_SCROLL_SPEED);
        // Outer halves: fast tier (y < 50 above, y > 250 below).
        assert_eq!(bounds.speed(30.0, 300.0), -FAST_SCROLL_SPEED);
        assert_eq!(bounds.speed(270.0, 300.0), FAST_SCROLL_SPEED);
    }
}
