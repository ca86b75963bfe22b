// Copyright 2026 the Rowlift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rowlift Gesture: drag-to-reorder orchestration for scrolling lists.
//!
//! This crate turns the pure geometry of `rowlift_layout` into a working
//! gesture. A [`DragList`] owns the lifecycle of one drag: it decides which
//! pointer events belong to a drag ([`Disposition::Consumed`]) and which
//! should fall through to the widget's default handling
//! ([`Disposition::PassThrough`]), floats an image of the grabbed row in an
//! [`Overlay`], opens and moves the insertion gap, auto-scrolls near the
//! viewport edges, and fires the registered drag, drop, and remove
//! listeners.
//!
//! Rowlift is host-agnostic: it renders nothing and owns no widget tree.
//! The embedding framework implements two traits —
//!
//! - [`ListHost`]: the scrolling list widget (row geometry queries, restyle
//!   and layout commands, scroll anchoring);
//! - [`Overlay`]: the compositor surface that floats the dragged row's
//!   image;
//!
//! — and feeds every pointer event the list receives to
//! [`DragList::handle_event`].
//!
//! ## Wiring sketch
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use rowlift_gesture::{DragList, DragListConfig, ListHost, Overlay, PointerEvent};
//! use rowlift_layout::{LaidOutRow, LayoutSnapshot, RowStyle};
//!
//! /// Three fixed 48px rows with grab handles on their right edge.
//! struct Rows {
//!     styles: Vec<RowStyle>,
//! }
//!
//! impl ListHost for Rows {
//!     type RowImage = ();
//!
//!     fn snapshot(&self) -> LayoutSnapshot {
//!         let mut snapshot = LayoutSnapshot::new(0, self.styles.len());
//!         let mut top = 0.0;
//!         for style in &self.styles {
//!             let mut row = LaidOutRow::new(Rect::new(0.0, top, 320.0, top + style.height))
//!                 .with_grab(Rect::new(280.0, top, 320.0, top + style.height));
//!             if !style.visible {
//!                 row = row.hidden();
//!             }
//!             snapshot.push_row(row);
//!             top += style.height;
//!         }
//!         snapshot
//!     }
//!
//!     fn viewport(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 320.0, 480.0)
//!     }
//!
//!     fn capture_row_image(&mut self, _child: usize) -> Option<()> {
//!         Some(())
//!     }
//!
//!     fn apply_styles(&mut self, styles: &[(usize, RowStyle)]) {
//!         for &(child, style) in styles {
//!             self.styles[child] = style;
//!         }
//!     }
//!
//!     fn layout_now(&mut self) {}
//!     fn scroll_to(&mut self, _index: usize, _top: f64) {}
//!     fn reattach_rows(&mut self) {}
//! }
//!
//! #[derive(Default)]
//! struct FloatingRow {
//!     showing: bool,
//! }
//!
//! impl Overlay for FloatingRow {
//!     type Image = ();
//!
//!     fn show(&mut self, _image: (), _origin: Point, _background: u32) {
//!         self.showing = true;
//!     }
//!     fn move_to(&mut self, _y: f64) {}
//!     fn set_alpha(&mut self, _alpha: f64) {}
//!     fn width(&self) -> f64 {
//!         320.0
//!     }
//!     fn dismiss(&mut self) -> Option<()> {
//!         self.showing.then(|| self.showing = false)
//!     }
//!     fn is_showing(&self) -> bool {
//!         self.showing
//!     }
//! }
//!
//! let mut host = Rows {
//!     styles: vec![RowStyle::visible(48.0); 3],
//! };
//! let mut list = DragList::new(DragListConfig::new(48.0), FloatingRow::default());
//! list.set_drop_listener(|from, to| println!("row {from} dropped at {to}"));
//!
//! // Press on row 0's grab handle, drag down a row, release.
//! list.handle_event(&mut host, &PointerEvent::down(Point::new(300.0, 10.0), 10.0, 0));
//! list.overlay_painted(&mut host);
//! list.handle_event(&mut host, &PointerEvent::moved(Point::new(300.0, 120.0), 120.0, 50));
//! list.handle_event(&mut host, &PointerEvent::up(Point::new(300.0, 120.0), 120.0, 80));
//! assert!(!list.is_dragging());
//! ```
//!
//! Sessions are strictly per-instance: two `DragList`s never share state,
//! and a single instance never runs two drags at once.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod dispatcher;
mod fling;
mod host;
mod overlay;
mod session;

pub use config::{CompositionError, DragListConfig, RemoveMode};
pub use dispatcher::{Disposition, DragList, PointerEvent, PointerPhase};
pub use fling::{FLING_REMOVE_VELOCITY, FlingTracker};
pub use host::ListHost;
pub use overlay::Overlay;
