// Copyright 2026 the Rowlift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The list widget collaborator trait.

use kurbo::Rect;
use rowlift_layout::{LayoutSnapshot, RowStyle};

/// The scrolling list widget the drag gesture operates on.
///
/// Rowlift never lays out, recycles, or renders rows itself; it queries the
/// widget's current geometry and asks it to restyle rows, re-run layout, and
/// re-anchor its scroll position. All methods are expected to complete
/// synchronously — hit testing after a restyle depends on fresh rectangles.
pub trait ListHost {
    /// Opaque snapshot of one row's rendered appearance, shown in the
    /// floating overlay while the row is dragged.
    type RowImage;

    /// The rows currently laid out, with the first visible index and total
    /// row count.
    fn snapshot(&self) -> LayoutSnapshot;

    /// The widget's viewport rectangle in screen coordinates.
    fn viewport(&self) -> Rect;

    /// Captures the rendered appearance of the row at child position
    /// `child`, or `None` if the widget cannot produce one right now.
    fn capture_row_image(&mut self, child: usize) -> Option<Self::RowImage>;

    /// Applies (height, visibility) overrides to the given children.
    fn apply_styles(&mut self, styles: &[(usize, RowStyle)]);

    /// Synchronously re-runs the widget's layout pass.
    fn layout_now(&mut self);

    /// Anchors the scroll position so that row `index` sits with its top
    /// edge at view-local y-coordinate `top`.
    fn scroll_to(&mut self, index: usize, top: f64);

    /// Reattaches the row data adapter, refreshing the widget's cached row
    /// count after a removal.
    fn reattach_rows(&mut self);
}
