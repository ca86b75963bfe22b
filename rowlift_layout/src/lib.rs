// Copyright 2026 the Rowlift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rowlift Layout: geometry and layout policy for drag-to-reorder lists.
//!
//! This crate is the pure half of Rowlift. Given a [`LayoutSnapshot`] of the
//! rows a list widget currently has laid out, it answers the geometric
//! questions a drag-and-reorder gesture needs:
//!
//! - [`LayoutSnapshot::row_at`]: which row is under a point, *including* rows
//!   that have been temporarily hidden while the gesture rearranges the list.
//! - [`drop_target_for_y`]: which row index the dragged row would land on for
//!   a given drag y-coordinate.
//! - [`ScrollBounds`]: whether (and how fast) the list should auto-scroll
//!   while the drag point is near a viewport edge.
//! - [`drag_layout`] / [`restore_layout`]: per-row (height, visibility)
//!   restyle commands that make the list visually open a gap at the current
//!   drop target, and that put everything back afterwards.
//!
//! This crate deliberately does **not** know about widgets, overlays, or
//! pointer events. Gesture orchestration lives in `rowlift_gesture`; host
//! frameworks apply the restyle commands produced here to their own row
//! views and re-run layout.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use rowlift_layout::{LaidOutRow, LayoutSnapshot, drop_target_for_y};
//!
//! // Three 48px rows laid out at the top of the list, all draggable.
//! let mut snapshot = LayoutSnapshot::new(0, 3);
//! for i in 0..3 {
//!     let top = 48.0 * i as f64;
//!     snapshot.push_row(
//!         LaidOutRow::new(Rect::new(0.0, top, 320.0, top + 48.0))
//!             .with_grab(Rect::new(280.0, top, 320.0, top + 48.0)),
//!     );
//! }
//!
//! assert_eq!(snapshot.row_at(Point::new(10.0, 60.0)), Some(1));
//!
//! // Dragging row 0 (grabbed 10px below its top) down to y = 130 targets row 2.
//! assert_eq!(drop_target_for_y(&snapshot, 130.0, 10.0, 48.0, 0), Some(2));
//! ```
//!
//! All coordinates live in the list widget's view-local space (typically
//! logical pixels), y growing downward.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod expansion;
mod scroll;
mod snapshot;
mod target;

pub use expansion::{COLLAPSED_ROW_HEIGHT, RestylePlan, RowStyle, drag_layout, restore_layout};
pub use scroll::{ANCHOR_RETRY_OFFSET, FAST_SCROLL_SPEED, SLOW_SCROLL_SPEED, ScrollBounds};
pub use snapshot::{LaidOutRow, LayoutSnapshot, RowFlags};
pub use target::drop_target_for_y;
