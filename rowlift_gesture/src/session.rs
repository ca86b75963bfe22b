// Copyright 2026 the Rowlift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-gesture drag session state and slide-remove geometry.

use rowlift_layout::ScrollBounds;

use crate::config::RemoveMode;

/// State for one drag gesture, created on a qualifying press and destroyed
/// on release, cancel, or removal.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DragSession {
    /// Row index where the drag began. Never changes for the gesture.
    pub origin_index: usize,
    /// Row index the drag currently hovers over; `None` means no target.
    pub target_index: Option<usize>,
    /// Vertical offset between the finger and the row top at grab time.
    pub grab_offset_y: f64,
    /// Difference between screen and view-local y-coordinates at grab time.
    pub coord_offset: f64,
    /// Viewport height captured at grab time.
    pub viewport_height: f64,
    /// The current no-auto-scroll band; only tightens during the gesture.
    pub bounds: ScrollBounds,
    /// Set until the overlay's first paint; the initial expansion is
    /// deferred to that moment to avoid a one-frame flicker.
    pub awaiting_first_paint: bool,
}

impl DragSession {
    pub(crate) fn begin(
        origin_index: usize,
        grab_offset_y: f64,
        coord_offset: f64,
        viewport_height: f64,
        bounds: ScrollBounds,
    ) -> Self {
        Self {
            origin_index,
            target_index: Some(origin_index),
            grab_offset_y,
            coord_offset,
            viewport_height,
            bounds,
            awaiting_first_paint: true,
        }
    }

    /// Screen y-coordinate for the overlay's top edge given the drag point.
    pub(crate) fn overlay_y(&self, y: f64) -> f64 {
        y - self.grab_offset_y + self.coord_offset
    }
}

/// Overlay opacity for the current drag x-position under a slide remove
/// mode: fully opaque until the row midline, fading linearly to transparent
/// at the delete edge.
pub(crate) fn slide_alpha(mode: RemoveMode, x: f64, width: f64) -> f64 {
    let half = width / 2.0;
    if half <= 0.0 {
        return 1.0;
    }
    let alpha = match mode {
        RemoveMode::SlideRight if x > half => (width - x) / half,
        RemoveMode::SlideLeft if x < half => x / half,
        _ => 1.0,
    };
    alpha.clamp(0.0, 1.0)
}

/// Whether a release at `release_x` lands in the configured slide delete
/// zone: past three-quarters of the row width for [`RemoveMode::SlideRight`],
/// before one-quarter for [`RemoveMode::SlideLeft`].
pub(crate) fn slide_remove_hit(mode: RemoveMode, release_x: f64, width: f64) -> bool {
    match mode {
        RemoveMode::SlideRight => release_x > width * 3.0 / 4.0,
        RemoveMode::SlideLeft => release_x < width / 4.0,
        RemoveMode::None | RemoveMode::Fling => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_begins_targeting_its_origin() {
        let bounds = ScrollBounds::at_grab(150.0, 10.0, 300.0);
        let session = DragSession::begin(2, 12.0, 40.0, 300.0, bounds);
        assert_eq!(session.origin_index, 2);
        assert_eq!(session.target_index, Some(2));
        assert!(session.awaiting_first_paint);
        // Overlay tracks the finger minus the grab offset, in screen space.
        assert_eq!(session.overlay_y(150.0), 178.0);
    }

    #[test]
    fn slide_right_fades_past_the_midline() {
        let mode = RemoveMode::SlideRight;
        assert_eq!(slide_alpha(mode, 0.0, 200.0), 1.0);
        assert_eq!(slide_alpha(mode, 100.0, 200.0), 1.0);
        assert_eq!(slide_alpha(mode, 150.0, 200.0), 0.5);
        assert_eq!(slide_alpha(mode, 200.0, 200.0), 0.0);
        // Past the edge: clamped, not negative.
        assert_eq!(slide_alpha(mode, 250.0, 200.0), 0.0);
    }

    #[test]
    fn slide_left_fades_toward_the_left_edge() {
        let mode = RemoveMode::SlideLeft;
        assert_eq!(slide_alpha(mode, 150.0, 200.0), 1.0);
        assert_eq!(slide_alpha(mode, 50.0, 200.0), 0.5);
        assert_eq!(slide_alpha(mode, 0.0, 200.0), 0.0);
    }

    #[test]
    fn non_slide_modes_stay_opaque() {
        assert_eq!(slide_alpha(RemoveMode::None, 190.0, 200.0), 1.0);
        assert_eq!(slide_alpha(RemoveMode::Fling, 10.0, 200.0), 1.0);
    }

    #[test]
    fn slide_zones_sit_at_the_outer_quarters() {
        // Row width 200: right zone starts past 150, left zone before 50.
        assert!(slide_remove_hit(RemoveMode::SlideRight, 170.0, 200.0));
        assert!(!slide_remove_hit(RemoveMode::SlideRight, 150.0, 200.0));
        assert!(slide_remove_hit(RemoveMode::SlideLeft, 30.0, 200.0));
        assert!(!slide_remove_hit(RemoveMode::SlideLeft, 50.0, 200.0));
        assert!(!slide_remove_hit(RemoveMode::None, 170.0, 200.0));
        assert!(!slide_remove_hit(RemoveMode::Fling, 170.0, 200.0));
    }
}
