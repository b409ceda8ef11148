// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cover flow geometry solver.
//!
//! Each row rests centered in its own viewport-wide *slot*: the layout pages by
//! the viewport width, not by the item width. Slot `-1` (row 0's left
//! neighbour) is a valid input for the bound computations below.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};

use crate::transform::PROJECTION_PLANE_DISTANCE;
use crate::{CoverFlowConfig, ItemTransform, VisibleRows, compute_visible_rows, interpolate_row};

/// Configuration plus the two sizes the cover flow math depends on.
///
/// This is a plain value: every query is a pure function of it and its
/// arguments. Hosts that want scroll state and caching on top should use
/// [`CoverFlowLayout`](crate::CoverFlowLayout).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverFlowGeometry {
    config: CoverFlowConfig,
    viewport: Size,
    item_size: Size,
}

impl CoverFlowGeometry {
    /// Creates a geometry for the given configuration, viewport, and item size.
    ///
    /// Negative dimensions are clamped to zero.
    #[must_use]
    pub fn new(config: CoverFlowConfig, viewport: Size, item_size: Size) -> Self {
        Self {
            config,
            viewport: non_negative_size(viewport),
            item_size: non_negative_size(item_size),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &CoverFlowConfig {
        &self.config
    }

    /// Returns a mutable reference to the configuration.
    pub fn config_mut(&mut self) -> &mut CoverFlowConfig {
        &mut self.config
    }

    /// Returns the viewport size.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Sets the viewport size. Negative dimensions are clamped to zero.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = non_negative_size(viewport);
    }

    /// Returns the nominal item size.
    #[must_use]
    pub const fn item_size(&self) -> Size {
        self.item_size
    }

    /// Sets the nominal item size. Negative dimensions are clamped to zero.
    pub fn set_item_size(&mut self, item_size: Size) {
        self.item_size = non_negative_size(item_size);
    }

    /// Size of the scrollable content for `len` items: one viewport width per item.
    #[must_use]
    pub fn content_size(&self, len: usize) -> Size {
        if len == 0 {
            return Size::ZERO;
        }
        Size::new(self.viewport.width * len as f64, self.viewport.height)
    }

    /// Scroll offset at which `row` sits frontal in the middle of the viewport.
    #[must_use]
    pub fn offset_for_row(&self, row: usize) -> f64 {
        row as f64 * self.viewport.width
    }

    /// Reference center of `row`, ignoring cover overlap.
    #[must_use]
    pub fn item_center_for_row(&self, row: usize) -> Point {
        Point::new(self.slot_center_x(row as f64), self.viewport.height / 2.0)
    }

    /// Conservative left bound of `row`'s influence, for culling only.
    #[must_use]
    pub fn min_x_for_row(&self, row: usize) -> f64 {
        self.min_x_for_slot(row as f64)
    }

    /// Conservative right bound of `row`'s influence, for culling only.
    #[must_use]
    pub fn max_x_for_row(&self, row: usize) -> f64 {
        self.max_x_for_slot(row as f64)
    }

    /// Lower bound of the interval over which `row`'s center travels.
    ///
    /// This is where the item sits when fully turned away to the left: the
    /// previous item's trailing edge, pulled in by the cover density, plus the
    /// projected half width of an item rotated by the maximum angle.
    #[must_use]
    pub fn min_x_center_for_row(&self, row: usize) -> f64 {
        let half_width = self.item_size.width / 2.0;
        let rad = self.config.max_cover_degree().to_radians();
        let d = PROJECTION_PLANE_DISTANCE;

        let prev_item_right_edge = self.slot_center_x(row as f64 - 1.0) + half_width;
        let projected_left_edge =
            half_width * rad.cos() * d / (d + half_width * rad.sin());

        prev_item_right_edge - self.config.cover_density() * self.item_size.width
            + projected_left_edge
    }

    /// Upper bound of the interval over which `row`'s center travels.
    ///
    /// Mirror image of [`min_x_center_for_row`](Self::min_x_center_for_row)
    /// against the next item's leading edge. The projected term is taken by
    /// magnitude so it cannot flip sign as the angle approaches ±90°.
    #[must_use]
    pub fn max_x_center_for_row(&self, row: usize) -> f64 {
        let half_width = self.item_size.width / 2.0;
        let rad = self.config.max_cover_degree().to_radians();
        let d = PROJECTION_PLANE_DISTANCE;

        let next_item_left_edge = self.slot_center_x(row as f64 + 1.0) - half_width;
        let projected_right_edge =
            (half_width * rad.cos() * d / (-half_width * rad.sin() - d)).abs();

        next_item_left_edge + self.config.cover_density() * self.item_size.width
            - projected_right_edge
    }

    /// Transform of `row` at scroll `offset`. See [`interpolate_row`].
    #[must_use]
    pub fn transform_for_row(&self, row: usize, offset: f64) -> ItemTransform {
        interpolate_row(self, row, offset)
    }

    /// Rows that may intersect `rect` out of `len`. See [`compute_visible_rows`].
    #[must_use]
    pub fn visible_rows(&self, rect: Rect, len: usize) -> VisibleRows {
        compute_visible_rows(self, rect, len)
    }

    pub(crate) fn slot_center_x(&self, slot: f64) -> f64 {
        slot * self.viewport.width + self.viewport.width / 2.0
    }

    pub(crate) fn min_x_for_slot(&self, slot: f64) -> f64 {
        self.slot_center_x(slot - 1.0) + self.density_inset()
    }

    pub(crate) fn max_x_for_slot(&self, slot: f64) -> f64 {
        self.slot_center_x(slot + 1.0) - self.density_inset()
    }

    fn density_inset(&self) -> f64 {
        (0.5 - self.config.cover_density()) * self.item_size.width
    }
}

fn non_negative_size(size: Size) -> Size {
    debug_assert!(
        size.is_finite(),
        "cover flow sizes must be finite; got {size:?}"
    );
    Size::new(size.width.max(0.0), size.height.max(0.0))
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "std"))]
    use kurbo::common::FloatFuncs as _;
    use kurbo::{Point, Size};

    use super::CoverFlowGeometry;
    use crate::CoverFlowConfig;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn geometry() -> CoverFlowGeometry {
        CoverFlowGeometry::new(
            CoverFlowConfig::default(),
            Size::new(300.0, 200.0),
            Size::new(100.0, 150.0),
        )
    }

    #[test]
    fn item_centers_page_by_viewport_width() {
        let g = geometry();
        assert_eq!(g.item_center_for_row(0), Point::new(150.0, 100.0));
        assert_eq!(g.item_center_for_row(1), Point::new(450.0, 100.0));
        assert_eq!(g.item_center_for_row(4), Point::new(1350.0, 100.0));
    }

    #[test]
    fn culling_bounds_use_density_only() {
        let g = geometry();
        // (0.5 - 0.25) * 100 = 25.
        assert!(approx(g.min_x_for_row(1), 150.0 + 25.0));
        assert!(approx(g.max_x_for_row(1), 750.0 - 25.0));
        // Row 0 looks at slot -1.
        assert!(approx(g.min_x_for_row(0), -150.0 + 25.0));
    }

    #[test]
    fn interval_bounds_follow_projection_formula() {
        let g = geometry();
        let half = 50.0;
        let rad = 45.0_f64.to_radians();
        let projected = half * rad.cos() * 500.0 / (500.0 + half * rad.sin());

        let expected_min = 150.0 + half - 0.25 * 100.0 + projected;
        let expected_max = 750.0 - half + 0.25 * 100.0 - projected;
        assert!(approx(g.min_x_center_for_row(1), expected_min));
        assert!(approx(g.max_x_center_for_row(1), expected_max));
    }

    #[test]
    fn interval_is_symmetric_around_reference_center() {
        let g = geometry();
        for row in [0, 1, 7] {
            let mid = (g.min_x_center_for_row(row) + g.max_x_center_for_row(row)) / 2.0;
            assert!(approx(mid, g.item_center_for_row(row).x));
        }
    }

    #[test]
    fn zero_rotation_reduces_to_density_offsets() {
        let config = CoverFlowConfig::default().with_max_cover_degree(0.0);
        let g = CoverFlowGeometry::new(config, Size::new(300.0, 200.0), Size::new(100.0, 150.0));
        // Projected half width is the plain half width when unrotated.
        assert!(approx(g.min_x_center_for_row(1), 150.0 + 50.0 - 25.0 + 50.0));
        assert!(approx(g.max_x_center_for_row(1), 750.0 - 50.0 + 25.0 - 50.0));
    }

    #[test]
    fn content_size_spans_one_viewport_per_item() {
        let g = geometry();
        assert_eq!(g.content_size(0), Size::ZERO);
        assert_eq!(g.content_size(9), Size::new(2700.0, 200.0));
        assert!(approx(g.offset_for_row(3), 900.0));
    }

    #[test]
    fn negative_sizes_are_clamped() {
        let mut g = CoverFlowGeometry::new(
            CoverFlowConfig::default(),
            Size::new(-10.0, 20.0),
            Size::new(30.0, -40.0),
        );
        assert_eq!(g.viewport(), Size::new(0.0, 20.0));
        assert_eq!(g.item_size(), Size::new(30.0, 0.0));

        g.set_viewport(Size::new(50.0, -1.0));
        assert_eq!(g.viewport(), Size::new(50.0, 0.0));
    }
}
