// Copyright 2026 the Rowlift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag list configuration and composition rules.

use core::fmt;

/// How (and whether) a drag gesture can remove the dragged row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RemoveMode {
    /// Rows can only be reordered, never removed.
    #[default]
    None,
    /// A fast horizontal fling toward the right edge removes the row.
    Fling,
    /// Sliding the row past the left quarter of its width removes it.
    SlideLeft,
    /// Sliding the row past the right three-quarter mark removes it.
    SlideRight,
}

impl RemoveMode {
    /// Whether this is one of the slide-to-remove modes.
    #[must_use]
    pub const fn is_slide(self) -> bool {
        matches!(self, Self::SlideLeft | Self::SlideRight)
    }
}

/// Immutable configuration for a drag list, read once at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragListConfig {
    /// Height of a row in its normal state, in pixels.
    pub normal_row_height: f64,
    /// Height of the row that expands to show the insertion gap, in pixels.
    pub expanded_row_height: f64,
    /// ARGB background color painted behind the floating drag image.
    pub overlay_background: u32,
    /// Platform touch-slop tolerance used when seeding scroll bounds.
    pub touch_slop: f64,
    /// The configured remove gesture.
    pub remove_mode: RemoveMode,
}

impl DragListConfig {
    /// Creates a configuration with the given normal row height.
    ///
    /// The expanded height defaults to the normal height (no visible gap),
    /// the overlay background to transparent, the touch slop to 8 px, and
    /// the remove mode to [`RemoveMode::None`].
    #[must_use]
    pub const fn new(normal_row_height: f64) -> Self {
        Self {
            normal_row_height,
            expanded_row_height: normal_row_height,
            overlay_background: 0x0000_0000,
            touch_slop: 8.0,
            remove_mode: RemoveMode::None,
        }
    }

    /// Sets the expanded row height.
    #[must_use]
    pub const fn with_expanded_height(mut self, height: f64) -> Self {
        self.expanded_row_height = height;
        self
    }

    /// Sets the overlay background color (ARGB).
    #[must_use]
    pub const fn with_overlay_background(mut self, argb: u32) -> Self {
        self.overlay_background = argb;
        self
    }

    /// Sets the platform touch-slop tolerance.
    #[must_use]
    pub const fn with_touch_slop(mut self, slop: f64) -> Self {
        self.touch_slop = slop;
        self
    }

    /// Sets the remove gesture mode.
    #[must_use]
    pub const fn with_remove_mode(mut self, mode: RemoveMode) -> Self {
        self.remove_mode = mode;
        self
    }
}

/// A list composition the drag gesture cannot support.
///
/// These are configuration-time programming errors, rejected loudly rather
/// than silently ignored: an accepted header or footer would corrupt the
/// gesture's index arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositionError {
    /// Header rows above the draggable content are never supported.
    HeaderRows,
    /// Footer rows cannot be combined with a slide remove mode; the slide
    /// zones assume the dragged row spans the full list width.
    FooterRowsWithSlideRemove,
}

impl fmt::Display for CompositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeaderRows => write!(f, "header rows are not supported with a drag list"),
            Self::FooterRowsWithSlideRemove => write!(
                f,
                "footer rows are not supported in combination with a slide remove mode"
            ),
        }
    }
}

impl core::error::Error for CompositionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_normal_height_and_no_remove() {
        let config = DragListConfig::new(48.0);
        assert_eq!(config.expanded_row_height, 48.0);
        assert_eq!(config.remove_mode, RemoveMode::None);
        assert_eq!(config.overlay_background, 0);
    }

    #[test]
    fn builder_setters_compose() {
        let config = DragListConfig::new(48.0)
            .with_expanded_height(72.0)
            .with_overlay_background(0x8000_0000)
            .with_touch_slop(12.0)
            .with_remove_mode(RemoveMode::SlideRight);
        assert_eq!(config.expanded_row_height, 72.0);
        assert_eq!(config.overlay_background, 0x8000_0000);
        assert_eq!(config.touch_slop, 12.0);
        assert!(config.remove_mode.is_slide());
    }

    #[test]
    fn only_slide_modes_report_as_slide() {
        assert!(!RemoveMode::None.is_slide());
        assert!(!RemoveMode::Fling.is_slide());
        assert!(RemoveMode::SlideLeft.is_slide());
        assert!(RemoveMode::SlideRight.is_slide());
    }
}
