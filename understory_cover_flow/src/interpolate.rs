// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping a scroll offset to a resolved [`ItemTransform`] for one row.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;
use tracing::trace;

use crate::CoverFlowGeometry;
use crate::transform::{ItemTransform, cover_transform};

/// Computes the transform of `row` when the strip is scrolled to `offset`.
///
/// A row is "in play" while the offset moves through the two viewport widths
/// around its own slot. Over that range its center travels linearly from
/// [`CoverFlowGeometry::min_x_center_for_row`] to
/// [`CoverFlowGeometry::max_x_center_for_row`] (and is clamped there outside
/// it). From that position:
///
/// - the rotation goes linearly from `-max_cover_degree` to `+max_cover_degree`,
/// - scale and opacity follow a tent that is `1` at the middle of the interval
///   and `min_cover_scale` / `min_cover_opacity` at both ends.
///
/// Offsets outside the content, negative offsets, and rows past the end of the
/// data are all valid inputs.
///
/// If the interval collapses (zero span, zero-width viewport, or non-finite
/// bounds) the row is reported frontal: angle `0`, scale `1`, opacity `1`,
/// centered in the middle of whatever interval is left.
#[must_use]
pub fn interpolate_row(geometry: &CoverFlowGeometry, row: usize, offset: f64) -> ItemTransform {
    let config = geometry.config();
    let viewport = geometry.viewport();
    let center_y = viewport.height / 2.0;

    let min_interval = (row as f64 - 1.0) * viewport.width;
    let max_interval = (row as f64 + 1.0) * viewport.width;
    let interval = max_interval - min_interval;

    let min_x = geometry.min_x_center_for_row(row);
    let max_x = geometry.max_x_center_for_row(row);
    let span_x = max_x - min_x;

    if span_x == 0.0 || !span_x.is_finite() || interval == 0.0 {
        trace!(row, span_x, interval, "degenerate cover interval, using frontal transform");
        let mid = (min_x + max_x) / 2.0;
        let center_x = if mid.is_finite() {
            mid
        } else {
            geometry.slot_center_x(row as f64)
        };
        return ItemTransform {
            row,
            center: Point::new(center_x, center_y),
            size: geometry.item_size(),
            angle_degrees: 0.0,
            scale: 1.0,
            opacity: 1.0,
            transform: cover_transform(0.0, 1.0),
        };
    }

    // `max` then `min` rather than `clamp`: a negative span (very dense covers
    // on wide items) must not panic, and resolves to `max_x`.
    let interpolated_x = (min_x + span_x / interval * (offset - min_interval))
        .max(min_x)
        .min(max_x);
    let progress = (interpolated_x - min_x) / span_x;

    let max_degree = config.max_cover_degree();
    let angle_degrees = -max_degree + progress * 2.0 * max_degree;
    let scale = tent(progress, config.min_cover_scale());
    let opacity = tent(progress, config.min_cover_opacity());

    ItemTransform {
        row,
        center: Point::new(interpolated_x, center_y),
        size: geometry.item_size(),
        angle_degrees,
        scale,
        opacity,
        transform: cover_transform(angle_degrees, scale),
    }
}

/// `1 - |1 - floor - 2 * progress * (1 - floor)|`: `floor` at both ends, `1` in the middle.
fn tent(progress: f64, floor: f64) -> f64 {
    1.0 - (1.0 - floor - progress * 2.0 * (1.0 - floor)).abs()
}
