// Copyright 2026 the Rowlift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row layout snapshots and point-to-row queries.

use alloc::vec::Vec;
use kurbo::{Point, Rect};

bitflags::bitflags! {
    /// Per-row flags controlling visibility and drag capability.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RowFlags: u8 {
        /// Row is currently visible (not hidden by the expansion engine).
        const VISIBLE   = 0b0000_0001;
        /// Row exposes a grab hotspot and participates in drag-to-reorder.
        const DRAGGABLE = 0b0000_0010;
    }
}

impl Default for RowFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// One row as the list widget currently has it laid out.
#[derive(Clone, Debug, PartialEq)]
pub struct LaidOutRow {
    /// The row's frame in view-local coordinates.
    pub frame: Rect,
    /// Grab hotspot frame in view-local coordinates, if the row has one.
    ///
    /// Presence of a hotspot is what makes a row draggable; rows without one
    /// are never restyled or picked up.
    pub grab: Option<Rect>,
    /// Visibility and capability flags.
    pub flags: RowFlags,
}

impl LaidOutRow {
    /// Creates a visible, non-draggable row with the given frame.
    #[must_use]
    pub const fn new(frame: Rect) -> Self {
        Self {
            frame,
            grab: None,
            flags: RowFlags::VISIBLE,
        }
    }

    /// Attaches a grab hotspot, marking the row draggable.
    #[must_use]
    pub fn with_grab(mut self, hotspot: Rect) -> Self {
        self.grab = Some(hotspot);
        self.flags |= RowFlags::DRAGGABLE;
        self
    }

    /// Marks the row as currently hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.flags -= RowFlags::VISIBLE;
        self
    }

    /// Whether the row participates in drag-to-reorder.
    #[must_use]
    pub fn is_draggable(&self) -> bool {
        self.flags.contains(RowFlags::DRAGGABLE)
    }

    /// Whether the row is currently visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.flags.contains(RowFlags::VISIBLE)
    }
}

/// Snapshot of the rows a list widget currently has laid out.
///
/// Rows are stored in child order (index 0 is the topmost laid-out child);
/// child `i` corresponds to absolute row index `first_visible + i`. The
/// snapshot also records the total row count of the underlying data so
/// policy code can recognize the last row.
#[derive(Clone, Debug, Default)]
pub struct LayoutSnapshot {
    rows: Vec<LaidOutRow>,
    first_visible: usize,
    row_count: usize,
}

impl LayoutSnapshot {
    /// Creates an empty snapshot for a list whose first laid-out child is
    /// absolute row `first_visible` out of `row_count` rows.
    #[must_use]
    pub const fn new(first_visible: usize, row_count: usize) -> Self {
        Self {
            rows: Vec::new(),
            first_visible,
            row_count,
        }
    }

    /// Appends the next laid-out row, in child order.
    pub fn push_row(&mut self, row: LaidOutRow) {
        self.rows.push(row);
    }

    /// The laid-out rows, in child order.
    #[must_use]
    pub fn rows(&self) -> &[LaidOutRow] {
        &self.rows
    }

    /// The row at child position `child`, if laid out.
    #[must_use]
    pub fn row(&self, child: usize) -> Option<&LaidOutRow> {
        self.rows.get(child)
    }

    /// Absolute index of the first laid-out child.
    #[must_use]
    pub const fn first_visible(&self) -> usize {
        self.first_visible
    }

    /// Total row count of the underlying data.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.row_count
    }

    /// Converts an absolute row index to a child position, if laid out.
    #[must_use]
    pub fn child_of(&self, index: usize) -> Option<usize> {
        let child = index.checked_sub(self.first_visible)?;
        (child < self.rows.len()).then_some(child)
    }

    /// Returns the absolute index of the row whose frame contains `point`,
    /// scanning back-to-front (topmost z-order first).
    ///
    /// Rows hidden by the expansion engine still register hits here; their
    /// frames remain valid and the gesture needs them. Use
    /// [`visible_row_at`](Self::visible_row_at) when hidden rows must not
    /// answer, e.g. when picking a scroll anchor.
    #[must_use]
    pub fn row_at(&self, point: Point) -> Option<usize> {
        self.rows
            .iter()
            .enumerate()
            .rev()
            .find(|(_, row)| row.frame.contains(point))
            .map(|(child, _)| self.first_visible + child)
    }

    /// Like [`row_at`](Self::row_at), but skips hidden rows.
    #[must_use]
    pub fn visible_row_at(&self, point: Point) -> Option<usize> {
        self.rows
            .iter()
            .enumerate()
            .rev()
            .find(|(_, row)| row.is_visible() && row.frame.contains(point))
            .map(|(child, _)| self.first_visible + child)
    }

    /// Whether `point` lands on the grab hotspot of child `child`.
    ///
    /// Only the horizontal span of the hotspot is tested; the caller has
    /// already established that the point hits this row, which constrains y.
    #[must_use]
    pub fn grab_hit(&self, child: usize, point: Point) -> bool {
        self.rows
            .get(child)
            .and_then(|row| row.grab)
            .is_some_and(|grab| grab.x0 < point.x && point.x < grab.x1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_row_snapshot() -> LayoutSnapshot {
        let mut snapshot = LayoutSnapshot::new(5, 20);
        for i in 0..3 {
            let top = 40.0 * i as f64;
            snapshot.push_row(
                LaidOutRow::new(Rect::new(0.0, top, 200.0, top + 40.0))
                    .with_grab(Rect::new(160.0, top, 200.0, top + 40.0)),
            );
        }
        snapshot
    }

    #[test]
    fn row_at_maps_children_to_absolute_indices() {
        let snapshot = three_row_snapshot();
        assert_eq!(snapshot.row_at(Point::new(10.0, 5.0)), Some(5));
        assert_eq!(snapshot.row_at(Point::new(10.0, 45.0)), Some(6));
        assert_eq!(snapshot.row_at(Point::new(10.0, 115.0)), Some(7));
        assert_eq!(snapshot.row_at(Point::new(10.0, 500.0)), None);
    }

    #[test]
    fn row_at_hits_hidden_rows_but_visible_row_at_does_not() {
        let mut snapshot = LayoutSnapshot::new(0, 2);
        snapshot.push_row(LaidOutRow::new(Rect::new(0.0, 0.0, 200.0, 40.0)).hidden());
        snapshot.push_row(LaidOutRow::new(Rect::new(0.0, 40.0, 200.0, 80.0)));

        let p = Point::new(10.0, 20.0);
        assert_eq!(snapshot.row_at(p), Some(0));
        assert_eq!(snapshot.visible_row_at(p), None);
        assert_eq!(snapshot.visible_row_at(Point::new(10.0, 60.0)), Some(1));
    }

    #[test]
    fn overlapping_rows_resolve_back_to_front() {
        // Second child overlaps the first; the later (topmost) child wins.
        let mut snapshot = LayoutSnapshot::new(0, 2);
        snapshot.push_row(LaidOutRow::new(Rect::new(0.0, 0.0, 200.0, 50.0)));
        snapshot.push_row(LaidOutRow::new(Rect::new(0.0, 30.0, 200.0, 80.0)));

        assert_eq!(snapshot.row_at(Point::new(10.0, 40.0)), Some(1));
    }

    #[test]
    fn grab_hit_tests_horizontal_span_only() {
        let snapshot = three_row_snapshot();
        assert!(snapshot.grab_hit(0, Point::new(170.0, 10.0)));
        // Outside the hotspot's x-span.
        assert!(!snapshot.grab_hit(0, Point::new(100.0, 10.0)));
        // Edges are exclusive, as in the span check.
        assert!(!snapshot.grab_hit(0, Point::new(160.0, 10.0)));
        // Rows without a hotspot never match.
        let mut plain = LayoutSnapshot::new(0, 1);
        plain.push_row(LaidOutRow::new(Rect::new(0.0, 0.0, 200.0, 40.0)));
        assert!(!plain.grab_hit(0, Point::new(100.0, 10.0)));
    }

    #[test]
    fn child_of_round_trips_laid_out_indices() {
        let snapshot = three_row_snapshot();
        assert_eq!(snapshot.child_of(5), Some(0));
        assert_eq!(snapshot.child_of(7), Some(2));
        assert_eq!(snapshot.child_of(8), None);
        assert_eq!(snapshot.child_of(4), None);
    }

    #[test]
    fn with_grab_marks_row_draggable() {
        let row = LaidOutRow::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(!row.is_draggable());
        let row = row.with_grab(Rect::new(0.0, 0.0, 5.0, 10.0));
        assert!(row.is_draggable());
        assert!(row.is_visible());
    }
}
