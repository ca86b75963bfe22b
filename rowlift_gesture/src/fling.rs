// Copyright 2026 the Rowlift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal fling velocity tracking for the fling remove gesture.

use smallvec::SmallVec;

/// Horizontal velocity above which a release counts as a remove fling, in
/// pixels per second.
pub const FLING_REMOVE_VELOCITY: f64 = 1000.0;

/// How far back in time samples contribute to the velocity estimate.
const SAMPLE_WINDOW_MS: u64 = 100;

/// Tracks recent pointer x-positions and estimates horizontal velocity.
///
/// Samples older than a short window are discarded so the estimate reflects
/// the velocity at release rather than the whole gesture. Timestamps are
/// milliseconds from any monotonic host clock.
#[derive(Clone, Debug, Default)]
pub struct FlingTracker {
    samples: SmallVec<[(u64, f64); 8]>,
}

impl FlingTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards all samples, e.g. when a new gesture begins.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Records the pointer x-position at `time_ms`.
    pub fn push(&mut self, time_ms: u64, x: f64) {
        let cutoff = time_ms.saturating_sub(SAMPLE_WINDOW_MS);
        self.samples.retain(|&mut (t, _)| t >= cutoff);
        self.samples.push((time_ms, x));
    }

    /// Estimated horizontal velocity in pixels per second; positive is
    /// rightward. Zero until two samples with distinct timestamps exist.
    #[must_use]
    pub fn horizontal_velocity(&self) -> f64 {
        let (Some(&(t0, x0)), Some(&(t1, x1))) = (self.samples.first(), self.samples.last())
        else {
            return 0.0;
        };
        let dt = t1.saturating_sub(t0);
        if dt == 0 {
            return 0.0;
        }
        (x1 - x0) / dt as f64 * 1000.0
    }
}
