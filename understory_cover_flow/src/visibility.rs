// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility culling over the strip of rows.

use core::ops::Range;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Rect;
use tracing::trace;

use crate::CoverFlowGeometry;

/// Result of a visibility query: a contiguous, ascending run of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleRows {
    /// First visible row (inclusive).
    pub start: usize,
    /// One past the last visible row (exclusive).
    pub end: usize,
}

impl VisibleRows {
    /// No visible rows.
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Returns `true` if there are no visible rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Number of visible rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// The first visible row, if any.
    #[must_use]
    pub const fn first(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.start)
        }
    }

    /// The last visible row, if any.
    #[must_use]
    pub const fn last(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end - 1)
        }
    }

    /// Returns `true` if `row` is among the visible rows.
    #[must_use]
    pub const fn contains(&self, row: usize) -> bool {
        row >= self.start && row < self.end
    }

    /// The visible rows as a range.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl IntoIterator for VisibleRows {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.range()
    }
}

/// Compute which of `len` rows may intersect `rect`.
///
/// Rows are first picked by the viewport-wide slots that `rect` overlaps. Because
/// covered items reach past their own slot, the row just before and the row just
/// after are then added whenever their conservative bounds
/// ([`CoverFlowGeometry::max_x_for_row`] / [`CoverFlowGeometry::min_x_for_row`])
/// still reach into `rect`. This margin keeps items from popping in late while
/// scrolling.
///
/// Only the horizontal extent of `rect` is considered. The result is always a
/// contiguous run within `0..len`, and is empty when:
/// - `len == 0`,
/// - the viewport has zero width (there are no slots to resolve against),
/// - or `rect` lies entirely outside the content and its margins.
#[must_use]
pub fn compute_visible_rows(geometry: &CoverFlowGeometry, rect: Rect, len: usize) -> VisibleRows {
    if len == 0 {
        return VisibleRows::EMPTY;
    }

    let slot_width = geometry.viewport().width;
    if slot_width.is_nan() || slot_width <= 0.0 {
        trace!(len, "zero-width viewport, no visible rows");
        return VisibleRows::EMPTY;
    }

    let rect = rect.abs();
    let last = len as isize - 1;

    // Rows whose own slot overlaps the rect.
    let mut min_row = slot_at(rect.x0, slot_width).max(0);
    let mut max_row = slot_at(rect.x1, slot_width);

    let candidate_min = (min_row - 1).max(0);
    if geometry.max_x_for_slot(candidate_min as f64) >= rect.x0 {
        min_row = candidate_min;
    }

    let candidate_max = max_row.saturating_add(1).min(last);
    if candidate_max > max_row && geometry.min_x_for_slot(candidate_max as f64) <= rect.x1 {
        max_row = candidate_max;
    }

    let max_row = max_row.min(last);
    if min_row > max_row {
        return VisibleRows::EMPTY;
    }

    // Both bounds are non-negative here.
    VisibleRows {
        start: min_row as usize,
        end: max_row as usize + 1,
    }
}

/// Index of the slot containing `x`. Slots left of the content are negative.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Float-to-int casts saturate; callers clamp into the row range"
)]
fn slot_at(x: f64, slot_width: f64) -> isize {
    (x / slot_width).floor() as isize
}
