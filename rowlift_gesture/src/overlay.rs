// Copyright 2026 the Rowlift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The floating drag-image overlay collaborator trait.

use kurbo::Point;

/// The compositor surface that floats the dragged row's image above the
/// list.
///
/// At most one overlay is ever showing; the drag session dismisses any
/// leftover overlay before presenting a new one. Dismissal hands the
/// captured image back so the caller can release it (in Rust terms: drop
/// it) exactly once.
///
/// The presentation layer must call
/// [`DragList::overlay_painted`](crate::DragList::overlay_painted) once
/// after the first frame containing a newly shown overlay — the session
/// defers the initial row expansion to that moment to avoid a one-frame
/// flicker.
pub trait Overlay {
    /// The row image type this overlay displays.
    type Image;

    /// Presents `image` at `origin` (screen coordinates, top-left) over the
    /// given ARGB background.
    fn show(&mut self, image: Self::Image, origin: Point, background: u32);

    /// Moves the overlay so its top edge sits at screen y-coordinate `y`.
    fn move_to(&mut self, y: f64);

    /// Sets the overlay's opacity, `0.0` (transparent) to `1.0` (opaque).
    fn set_alpha(&mut self, alpha: f64);

    /// The overlay's current width in pixels (the dragged row's width).
    fn width(&self) -> f64;

    /// Removes the overlay from the compositor, returning the image for
    /// release. Returns `None` when nothing is showing.
    fn dismiss(&mut self) -> Option<Self::Image>;

    /// Whether an overlay is currently showing.
    fn is_showing(&self) -> bool;
}
