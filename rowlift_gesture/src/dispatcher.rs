// Copyright 2026 the Rowlift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer event classification and drag orchestration.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Point;
use rowlift_layout::{ANCHOR_RETRY_OFFSET, ScrollBounds, drag_layout, drop_target_for_y, restore_layout};

use crate::config::{CompositionError, DragListConfig, RemoveMode};
use crate::fling::{FLING_REMOVE_VELOCITY, FlingTracker};
use crate::host::ListHost;
use crate::overlay::Overlay;
use crate::session::{DragSession, slide_alpha, slide_remove_hit};

/// Phase of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// Pointer made contact.
    Down,
    /// Pointer moved while in contact.
    Move,
    /// Pointer lifted.
    Up,
    /// The gesture was canceled by the platform.
    Cancel,
}

/// One pointer event in the list widget's view-local coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// The event phase.
    pub phase: PointerPhase,
    /// Pointer position in view-local coordinates.
    pub position: Point,
    /// Pointer y-coordinate in raw screen coordinates.
    pub raw_y: f64,
    /// Event timestamp in milliseconds from a monotonic host clock.
    pub time_ms: u64,
}

impl PointerEvent {
    /// Creates an event with the given phase.
    #[must_use]
    pub const fn new(phase: PointerPhase, position: Point, raw_y: f64, time_ms: u64) -> Self {
        Self {
            phase,
            position,
            raw_y,
            time_ms,
        }
    }

    /// A [`PointerPhase::Down`] event.
    #[must_use]
    pub const fn down(position: Point, raw_y: f64, time_ms: u64) -> Self {
        Self::new(PointerPhase::Down, position, raw_y, time_ms)
    }

    /// A [`PointerPhase::Move`] event.
    #[must_use]
    pub const fn moved(position: Point, raw_y: f64, time_ms: u64) -> Self {
        Self::new(PointerPhase::Move, position, raw_y, time_ms)
    }

    /// A [`PointerPhase::Up`] event.
    #[must_use]
    pub const fn up(position: Point, raw_y: f64, time_ms: u64) -> Self {
        Self::new(PointerPhase::Up, position, raw_y, time_ms)
    }

    /// A [`PointerPhase::Cancel`] event.
    #[must_use]
    pub const fn cancel(position: Point, raw_y: f64, time_ms: u64) -> Self {
        Self::new(PointerPhase::Cancel, position, raw_y, time_ms)
    }
}

/// What the dispatcher decided about an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// The event is not part of a drag gesture; the host should run its
    /// default handling (selection, scrolling).
    PassThrough,
    /// The event was consumed by the drag gesture and must not also receive
    /// default handling.
    Consumed,
}

type IndexPairListener = Box<dyn FnMut(usize, usize)>;
type IndexListener = Box<dyn FnMut(usize)>;

/// Drag-to-reorder controller for one list widget instance.
///
/// Feed every pointer event the widget receives to
/// [`handle_event`](Self::handle_event); events that belong to a drag
/// gesture come back [`Disposition::Consumed`], everything else
/// [`Disposition::PassThrough`]. The controller owns the floating overlay
/// and at most one [`DragSession`] at a time; session state is per-instance,
/// never global.
pub struct DragList<O: Overlay> {
    config: DragListConfig,
    overlay: O,
    session: Option<DragSession>,
    fling: FlingTracker,
    on_drag: Option<IndexPairListener>,
    on_drop: Option<IndexPairListener>,
    on_remove: Option<IndexListener>,
}

impl<O: Overlay> DragList<O> {
    /// Creates a controller with the given configuration and overlay
    /// surface.
    #[must_use]
    pub fn new(config: DragListConfig, overlay: O) -> Self {
        Self {
            config,
            overlay,
            session: None,
            fling: FlingTracker::new(),
            on_drag: None,
            on_drop: None,
            on_remove: None,
        }
    }

    /// The configuration this controller was built with.
    #[must_use]
    pub fn config(&self) -> &DragListConfig {
        &self.config
    }

    /// Whether a drag session is currently active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Registers the reorder-in-progress listener, fired with
    /// `(previous_target, new_target)` on every target index change.
    pub fn set_drag_listener(&mut self, listener: impl FnMut(usize, usize) + 'static) {
        self.on_drag = Some(Box::new(listener));
    }

    /// Registers the drop listener, fired once with `(origin, target)` when
    /// a drag ends in a normal drop.
    pub fn set_drop_listener(&mut self, listener: impl FnMut(usize, usize) + 'static) {
        self.on_drop = Some(Box::new(listener));
    }

    /// Registers the removal listener, fired with the origin index when a
    /// remove gesture completes.
    pub fn set_remove_listener(&mut self, listener: impl FnMut(usize) + 'static) {
        self.on_remove = Some(Box::new(listener));
    }

    /// Rejects header rows: the gesture's index arithmetic assumes row 0 is
    /// draggable content.
    pub fn add_header_row(&self) -> Result<(), CompositionError> {
        Err(CompositionError::HeaderRows)
    }

    /// Accepts a footer row unless a slide remove mode is configured.
    pub fn add_footer_row(&self) -> Result<(), CompositionError> {
        if self.config.remove_mode.is_slide() {
            Err(CompositionError::FooterRowsWithSlideRemove)
        } else {
            Ok(())
        }
    }

    /// Classifies and handles one pointer event.
    pub fn handle_event<H>(&mut self, host: &mut H, event: &PointerEvent) -> Disposition
    where
        H: ListHost<RowImage = O::Image>,
    {
        match event.phase {
            PointerPhase::Down => self.on_down(host, event),
            PointerPhase::Move => {
                if self.session.is_none() {
                    return Disposition::PassThrough;
                }
                self.fling.push(event.time_ms, event.position.x);
                self.update_drag(host, event);
                Disposition::Consumed
            }
            PointerPhase::Up => self.on_up(host, event),
            PointerPhase::Cancel => {
                if self.session.take().is_none() {
                    return Disposition::PassThrough;
                }
                // Same teardown as Up, but no drop/remove callbacks.
                self.fling.clear();
                drop(self.overlay.dismiss());
                self.restore_rows(host, false);
                Disposition::Consumed
            }
        }
    }

    /// Notifies the controller that the first frame containing a newly shown
    /// overlay has been produced.
    ///
    /// The initial row expansion is deferred to this moment so the list does
    /// not rearrange before the floating image is on screen (a visible
    /// flicker otherwise). The presentation layer fires this exactly once
    /// per shown overlay; later calls are no-ops.
    pub fn overlay_painted<H>(&mut self, host: &mut H)
    where
        H: ListHost<RowImage = O::Image>,
    {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.awaiting_first_paint {
            return;
        }
        session.awaiting_first_paint = false;
        let target = session.target_index.unwrap_or(session.origin_index);
        let snapshot = host.snapshot();
        let plan = drag_layout(
            &snapshot,
            session.origin_index,
            target,
            self.config.normal_row_height,
            self.config.expanded_row_height,
        );
        host.apply_styles(&plan);
        host.layout_now();
    }

    fn on_down<H>(&mut self, host: &mut H, event: &PointerEvent) -> Disposition
    where
        H: ListHost<RowImage = O::Image>,
    {
        if self.session.is_some() {
            // Single-drag invariant: never start a second session.
            return Disposition::Consumed;
        }
        if self.on_drag.is_none() && self.on_drop.is_none() {
            return Disposition::PassThrough;
        }
        let snapshot = host.snapshot();
        let Some(index) = snapshot.row_at(event.position) else {
            return Disposition::PassThrough;
        };
        let Some(child) = snapshot.child_of(index) else {
            return Disposition::PassThrough;
        };
        let Some(row) = snapshot.row(child) else {
            return Disposition::PassThrough;
        };
        if !row.is_draggable() || !snapshot.grab_hit(child, event.position) {
            return Disposition::PassThrough;
        }
        let Some(image) = host.capture_row_image(child) else {
            return Disposition::PassThrough;
        };

        let grab_offset_y = event.position.y - row.frame.y0;
        let coord_offset = event.raw_y - event.position.y;
        let viewport = host.viewport();
        let viewport_height = viewport.height();

        // A leftover overlay means a missed finish; tear it down first.
        drop(self.overlay.dismiss());

        let session = DragSession::begin(
            index,
            grab_offset_y,
            coord_offset,
            viewport_height,
            ScrollBounds::at_grab(event.position.y, self.config.touch_slop, viewport_height),
        );
        self.overlay.show(
            image,
            Point::new(viewport.x0, session.overlay_y(event.position.y)),
            self.config.overlay_background,
        );
        self.fling.clear();
        self.fling.push(event.time_ms, event.position.x);
        self.session = Some(session);
        Disposition::Consumed
    }

    fn update_drag<H>(&mut self, host: &mut H, event: &PointerEvent)
    where
        H: ListHost<RowImage = O::Image>,
    {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        self.overlay.move_to(session.overlay_y(event.position.y));
        if self.config.remove_mode.is_slide() {
            let alpha = slide_alpha(
                self.config.remove_mode,
                event.position.x,
                self.overlay.width(),
            );
            self.overlay.set_alpha(alpha);
        }

        let snapshot = host.snapshot();
        let Some(target) = drop_target_for_y(
            &snapshot,
            event.position.y,
            session.grab_offset_y,
            self.config.normal_row_height,
            session.origin_index,
        ) else {
            return;
        };

        if session.target_index != Some(target) {
            let previous = session.target_index.unwrap_or(session.origin_index);
            session.target_index = Some(target);
            if let Some(on_drag) = self.on_drag.as_mut() {
                on_drag(previous, target);
            }
            if !session.awaiting_first_paint {
                let plan = drag_layout(
                    &snapshot,
                    session.origin_index,
                    target,
                    self.config.normal_row_height,
                    self.config.expanded_row_height,
                );
                host.apply_styles(&plan);
                host.layout_now();
            }
        }

        session.bounds.tighten(event.position.y, session.viewport_height);
        let speed = session.bounds.speed(event.position.y, session.viewport_height);
        if speed != 0.0 {
            apply_scroll(host, session.viewport_height, speed);
        }
    }

    fn on_up<H>(&mut self, host: &mut H, event: &PointerEvent) -> Disposition
    where
        H: ListHost<RowImage = O::Image>,
    {
        let Some(session) = self.session.take() else {
            return Disposition::PassThrough;
        };

        self.fling.push(event.time_ms, event.position.x);
        let velocity = self.fling.horizontal_velocity();
        self.fling.clear();

        let width = self.overlay.width();
        // Dismissal hands the captured image back; dropping it here is the
        // single release point for every exit path through this function.
        drop(self.overlay.dismiss());

        let fling_remove = self.config.remove_mode == RemoveMode::Fling
            && self.on_remove.is_some()
            && velocity > FLING_REMOVE_VELOCITY
            && event.position.x > width * 2.0 / 3.0;

        if fling_remove || slide_remove_hit(self.config.remove_mode, event.position.x, width) {
            if let Some(on_remove) = self.on_remove.as_mut() {
                on_remove(session.origin_index);
            }
            self.restore_rows(host, true);
        } else {
            if let Some(target) = session.target_index
                && target < host.snapshot().row_count()
                && let Some(on_drop) = self.on_drop.as_mut()
            {
                on_drop(session.origin_index, target);
            }
            self.restore_rows(host, false);
        }
        Disposition::Consumed
    }

    fn restore_rows<H>(&mut self, host: &mut H, removed: bool)
    where
        H: ListHost<RowImage = O::Image>,
    {
        let snapshot = host.snapshot();
        if removed {
            // Removal invalidates the widget's cached row count; reattach
            // the adapter and reapply the scroll anchor before layout.
            let first = snapshot.first_visible();
            let top = snapshot.row(0).map_or(0.0, |row| row.frame.y0);
            host.reattach_rows();
            host.scroll_to(first, top);
        }
        let plan = restore_layout(&snapshot, self.config.normal_row_height);
        host.apply_styles(&plan);
        host.layout_now();
    }
}

impl<O: Overlay> fmt::Debug for DragList<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragList")
            .field("config", &self.config)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

/// Re-anchors the scroll position by `speed` pixels around the row nearest
/// the viewport's vertical midpoint.
///
/// When the midpoint probe lands in a gap (divider or hidden spacer), one
/// retry is made [`ANCHOR_RETRY_OFFSET`] further down; if that also misses,
/// the tick is skipped.
fn apply_scroll<H: ListHost>(host: &mut H, viewport_height: f64, speed: f64) {
    let snapshot = host.snapshot();
    let mid = viewport_height / 2.0;
    let anchor = snapshot
        .visible_row_at(Point::new(0.0, mid))
        .or_else(|| snapshot.visible_row_at(Point::new(0.0, mid + ANCHOR_RETRY_OFFSET)));
    let Some(index) = anchor else {
        return;
    };
    let Some(child) = snapshot.child_of(index) else {
        return;
    };
    if let Some(row) = snapshot.row(child) {
        host.scroll_to(index, row.frame.y0 - speed);
    }
}
