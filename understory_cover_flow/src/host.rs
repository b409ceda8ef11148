// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between a hosting list widget and [`CoverFlowLayout`](crate::CoverFlowLayout).

use kurbo::Size;

/// Scroll axis reported by a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollAxis {
    /// Content scrolls left and right.
    Horizontal,
    /// Content scrolls up and down.
    Vertical,
}

/// State a host widget exposes to a cover flow layout.
///
/// Implement this on whatever owns the scroll view (or an adapter around it) and
/// hand it to [`CoverFlowLayout::sync_from_host`](crate::CoverFlowLayout::sync_from_host)
/// before each layout pass.
pub trait CoverFlowHost {
    /// Number of sections in the hosted collection. Cover flow supports exactly one.
    fn section_count(&self) -> usize;

    /// Axis the host scrolls along. Cover flow supports [`ScrollAxis::Horizontal`] only.
    fn scroll_axis(&self) -> ScrollAxis;

    /// Current size of the visible viewport.
    fn viewport_size(&self) -> Size;

    /// Number of items in the single section.
    fn item_count(&self) -> usize;

    /// Current horizontal scroll offset. May be negative or past the end during overscroll.
    fn scroll_offset(&self) -> f64;
}
