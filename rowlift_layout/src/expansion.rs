// Copyright 2026 the Rowlift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row restyle planning: opening a gap at the drop target and closing it.

use smallvec::SmallVec;

use crate::LayoutSnapshot;

/// Height assigned to the origin row while the drag hovers elsewhere.
///
/// One unit rather than zero: a zero-height child trips measurement edge
/// cases in list widgets, while one unit is visually indistinguishable from
/// a removed row.
pub const COLLAPSED_ROW_HEIGHT: f64 = 1.0;

/// A (height, visibility) override for one laid-out row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowStyle {
    /// Height override in pixels.
    pub height: f64,
    /// Whether the row is visible.
    pub visible: bool,
}

impl RowStyle {
    /// A visible row at the given height.
    #[must_use]
    pub const fn visible(height: f64) -> Self {
        Self {
            height,
            visible: true,
        }
    }

    /// A hidden row at the given height.
    #[must_use]
    pub const fn hidden(height: f64) -> Self {
        Self {
            height,
            visible: false,
        }
    }
}

/// Restyle commands, as (child position, style) pairs in child order.
///
/// Inline capacity covers a typical screenful of rows without allocating.
pub type RestylePlan = SmallVec<[(usize, RowStyle); 16]>;

/// Plans the row styles that make the list visually open a gap for the
/// dragged row at `target_index`.
///
/// - The row in the origin slot becomes invisible at normal height while the
///   drag hovers over its own starting slot, and otherwise collapses to
///   [`COLLAPSED_ROW_HEIGHT`] as a hidden spacer.
/// - The row at the target slot (shifted by one when the target sits below
///   the origin, mirroring the probe's occupied-slot adjustment) expands,
///   unless the target is the last row in the data — there is no room to
///   expand past the end.
/// - Every other draggable row gets normal height and visibility.
/// - Non-draggable rows are never restyled and do not appear in the plan.
///
/// The caller must re-run the widget's layout pass after applying the plan;
/// hit rectangles are stale until it does.
#[must_use]
pub fn drag_layout(
    snapshot: &LayoutSnapshot,
    origin_index: usize,
    target_index: usize,
    normal_height: f64,
    expanded_height: f64,
) -> RestylePlan {
    let first = snapshot.first_visible();
    let origin_child = origin_index.checked_sub(first);
    let gap = if target_index > origin_index {
        target_index + 1
    } else {
        target_index
    };
    let gap_child = gap.checked_sub(first);

    let mut plan = RestylePlan::new();
    for (child, row) in snapshot.rows().iter().enumerate() {
        if !row.is_draggable() {
            continue;
        }
        let style = if Some(child) == origin_child {
            if target_index == origin_index {
                // Hovering over its own slot: keep the gap, hide the row.
                RowStyle::hidden(normal_height)
            } else {
                RowStyle::visible(COLLAPSED_ROW_HEIGHT)
            }
        } else if Some(child) == gap_child && target_index + 1 < snapshot.row_count() {
            RowStyle::visible(expanded_height)
        } else {
            RowStyle::visible(normal_height)
        };
        plan.push((child, style));
    }
    plan
}

/// Plans the styles that restore every draggable row to its normal state.
///
/// Applying this plan twice yields the same row states as applying it once.
#[must_use]
pub fn restore_layout(snapshot: &LayoutSnapshot, normal_height: f64) -> RestylePlan {
    snapshot
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| row.is_draggable())
        .map(|(child, _)| (child, RowStyle::visible(normal_height)))
        .collect()
}
