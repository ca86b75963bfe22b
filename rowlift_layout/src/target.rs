// Copyright 2026 the Rowlift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop-target resolution for an in-flight drag.

use kurbo::Point;

use crate::LayoutSnapshot;

/// Resolves the row index the dragged row would land on for drag
/// y-coordinate `y`.
///
/// The comparison point is the vertical center of where the dragged row
/// would sit: `y` minus the grab offset minus half the normal row height.
/// That point is probed against the snapshot (hidden rows included). A hit
/// at or above `origin_index` is shifted down by one, because the origin row
/// still occupies its slot during the drag. When the probe misses and the
/// adjusted point is above the list, the target collapses to index 0.
///
/// Returns `None` when the probe misses below the laid-out rows. For a fixed
/// snapshot the result is monotonic in `y`.
#[must_use]
pub fn drop_target_for_y(
    snapshot: &LayoutSnapshot,
    y: f64,
    grab_offset_y: f64,
    normal_row_height: f64,
    origin_index: usize,
) -> Option<usize> {
    let adjusted = y - grab_offset_y - normal_row_height / 2.0;
    match snapshot.row_at(Point::new(0.0, adjusted)) {
        Some(hit) if hit <= origin_index => Some(hit + 1),
        Some(hit) => Some(hit),
        None if adjusted < 0.0 => Some(0),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LaidOutRow;
    use alloc::vec::Vec;
    use kurbo::Rect;

    /// Five 40px rows starting at absolute index 0, grab points at row tops.
    fn snapshot() -> LayoutSnapshot {
        let mut snapshot = LayoutSnapshot::new(0, 5);
        for i in 0..5 {
            let top = 40.0 * i as f64;
            snapshot.push_row(
                LaidOutRow::new(Rect::new(0.0, top, 200.0, top + 40.0))
                    .with_grab(Rect::new(0.0, top, 40.0, top + 40.0)),
            );
        }
        snapshot
    }

    #[test]
    fn hit_at_or_above_origin_shifts_down_by_one() {
        // Adjusted y = 80 - 10 - 20 = 50 → row 1; 1 <= 3 → target 2.
        let target = drop_target_for_y(&snapshot(), 80.0, 10.0, 40.0, 3);
        assert_eq!(target, Some(2));
    }

    #[test]
    fn hit_below_origin_is_unshifted() {
        // Adjusted y = 170 - 10 - 20 = 140 → row 3; 3 > 1 → target 3.
        let target = drop_target_for_y(&snapshot(), 170.0, 10.0, 40.0, 1);
        assert_eq!(target, Some(3));
    }

    #[test]
    fn dragging_above_the_list_targets_row_zero() {
        // Adjusted y is negative, no row hit.
        let target = drop_target_for_y(&snapshot(), 5.0, 10.0, 40.0, 2);
        assert_eq!(target, Some(0));
    }

    #[test]
    fn miss_below_laid_out_rows_yields_no_target() {
        let target = drop_target_for_y(&snapshot(), 400.0, 10.0, 40.0, 2);
        assert_eq!(target, None);
    }

    #[test]
    fn hit_on_origin_row_itself_also_shifts() {
        // Adjusted y = 100 - 20 - 20 = 60 → row 1 == origin → target 2.
        let target = drop_target_for_y(&snapshot(), 100.0, 20.0, 40.0, 1);
        assert_eq!(target, Some(2));
    }

    #[test]
    fn holding_still_resolves_to_origin() {
        // Grabbed row 2 at 10px below its top (y = 90). The comparison point
        // 90 - 10 - 20 = 60 lands in row 1, which shifts to the origin.
        let target = drop_target_for_y(&snapshot(), 90.0, 10.0, 40.0, 2);
        assert_eq!(target, Some(2));
    }

    #[test]
    fn target_is_monotonic_in_y() {
        let snapshot = snapshot();
        let mut last = 0_usize;
        let targets: Vec<usize> = (0..200)
            .filter_map(|i| drop_target_for_y(&snapshot, f64::from(i) * 2.0, 10.0, 40.0, 2))
            .collect();
        for target in targets {
            assert!(
                target >= last,
                "target index decreased while dragging further down"
            );
            last = target;
        }
    }
}
