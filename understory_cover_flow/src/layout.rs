// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that owns cover flow geometry and scroll state.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};
use tracing::debug;

use crate::{
    CoverFlowConfig, CoverFlowGeometry, CoverFlowHost, ItemSizing, ItemTransform, ScrollAxis,
    VisibleRows,
};

/// Controller for a cover flow strip.
///
/// This type:
/// - owns a [`CoverFlowGeometry`] and the [`ItemSizing`] policy that feeds it,
/// - stores the item count and the horizontal scroll offset,
/// - caches the [`VisibleRows`] of the current viewport,
/// - exposes paging helpers for snapping a row to the middle of the viewport.
///
/// Every transform depends on the scroll offset, so hosts should re-query
/// [`CoverFlowLayout::visible_transforms`] on every bounds change, not only
/// when the visible rows change.
#[derive(Debug, Clone)]
pub struct CoverFlowLayout {
    geometry: CoverFlowGeometry,
    item_sizing: ItemSizing,
    len: usize,
    scroll_offset: f64,

    dirty: bool,
    last_rows: VisibleRows,
}

impl CoverFlowLayout {
    /// Creates a layout with no items, scrolled to the start.
    #[must_use]
    pub fn new(config: CoverFlowConfig, viewport: Size, item_sizing: impl Into<ItemSizing>) -> Self {
        let item_sizing = item_sizing.into();
        let item_size = item_sizing.resolve(viewport);
        Self {
            geometry: CoverFlowGeometry::new(config, viewport, item_size),
            item_sizing,
            len: 0,
            scroll_offset: 0.0,
            dirty: true,
            last_rows: VisibleRows::EMPTY,
        }
    }

    /// Returns the underlying geometry.
    #[must_use]
    pub const fn geometry(&self) -> &CoverFlowGeometry {
        &self.geometry
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &CoverFlowConfig {
        self.geometry.config()
    }

    /// Returns a mutable reference to the configuration, marking the cached rows dirty.
    pub fn config_mut(&mut self) -> &mut CoverFlowConfig {
        self.dirty = true;
        self.geometry.config_mut()
    }

    /// Returns the number of items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets the number of items.
    pub fn set_len(&mut self, len: usize) {
        if len != self.len {
            debug!(old = self.len, new = len, "cover flow item count changed");
            self.len = len;
            self.dirty = true;
        }
    }

    /// Returns the current viewport size.
    #[must_use]
    pub const fn viewport_size(&self) -> Size {
        self.geometry.viewport()
    }

    /// Sets the viewport size and re-resolves the item size from the sizing policy.
    pub fn set_viewport_size(&mut self, viewport: Size) {
        if viewport != self.geometry.viewport() {
            debug!(
                width = viewport.width,
                height = viewport.height,
                "cover flow viewport resized"
            );
            self.geometry.set_viewport(viewport);
            self.geometry
                .set_item_size(self.item_sizing.resolve(self.geometry.viewport()));
            self.dirty = true;
        }
    }

    /// Returns the item sizing policy.
    #[must_use]
    pub const fn item_sizing(&self) -> ItemSizing {
        self.item_sizing
    }

    /// Replaces the item sizing policy.
    pub fn set_item_sizing(&mut self, item_sizing: impl Into<ItemSizing>) {
        self.item_sizing = item_sizing.into();
        let item_size = self.item_sizing.resolve(self.geometry.viewport());
        if item_size != self.geometry.item_size() {
            debug!(
                width = item_size.width,
                height = item_size.height,
                "cover flow item size changed"
            );
            self.geometry.set_item_size(item_size);
            self.dirty = true;
        }
    }

    /// Returns the resolved nominal item size.
    #[must_use]
    pub const fn item_size(&self) -> Size {
        self.geometry.item_size()
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Sets the scroll offset.
    ///
    /// Offsets are not clamped: hosts may overscroll past either end.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        debug_assert!(
            offset.is_finite(),
            "cover flow scroll offsets must be finite; got {offset:?}"
        );
        if offset != self.scroll_offset {
            self.scroll_offset = offset;
            self.dirty = true;
        }
    }

    /// Adjusts the scroll offset by `delta`.
    pub fn scroll_by(&mut self, delta: f64) {
        self.set_scroll_offset(self.scroll_offset + delta);
    }

    /// Pulls viewport size, item count, and scroll offset from `host`.
    ///
    /// # Panics
    ///
    /// Panics if the host has more or fewer than one section, or does not
    /// scroll horizontally. Cover flow has no meaningful layout in either case.
    pub fn sync_from_host<H: CoverFlowHost + ?Sized>(&mut self, host: &H) {
        assert_eq!(
            host.section_count(),
            1,
            "cover flow layout supports exactly one section"
        );
        assert_eq!(
            host.scroll_axis(),
            ScrollAxis::Horizontal,
            "cover flow layout supports horizontal scrolling only"
        );
        self.set_viewport_size(host.viewport_size());
        self.set_len(host.item_count());
        self.set_scroll_offset(host.scroll_offset());
    }

    /// The viewport in content coordinates.
    #[must_use]
    pub fn viewport_rect(&self) -> Rect {
        Rect::from_origin_size(Point::new(self.scroll_offset, 0.0), self.geometry.viewport())
    }

    /// Size of the scrollable content.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.geometry.content_size(self.len)
    }

    /// Computes or returns the cached rows visible in the viewport.
    #[must_use]
    pub fn visible_rows(&mut self) -> VisibleRows {
        if self.dirty {
            self.last_rows = self.geometry.visible_rows(self.viewport_rect(), self.len);
            self.dirty = false;
        }
        self.last_rows
    }

    /// Rows that may intersect an arbitrary `rect`, for example a prefetch region.
    #[must_use]
    pub fn rows_in_rect(&self, rect: Rect) -> VisibleRows {
        self.geometry.visible_rows(rect, self.len)
    }

    /// Transform of `row` at the current scroll offset.
    #[must_use]
    pub fn item_transform(&self, row: usize) -> ItemTransform {
        self.geometry.transform_for_row(row, self.scroll_offset)
    }

    /// Transforms of every row that may intersect `rect`, in row order.
    #[must_use]
    pub fn transforms_in_rect(&self, rect: Rect) -> Vec<ItemTransform> {
        self.rows_in_rect(rect)
            .into_iter()
            .map(|row| self.item_transform(row))
            .collect()
    }

    /// Transforms of every row visible in the viewport, in row order.
    #[must_use]
    pub fn visible_transforms(&mut self) -> Vec<ItemTransform> {
        let rows = self.visible_rows();
        rows.into_iter().map(|row| self.item_transform(row)).collect()
    }

    /// Scroll offset at which `row` sits frontal in the middle of the viewport.
    #[must_use]
    pub fn offset_for_row(&self, row: usize) -> f64 {
        self.geometry.offset_for_row(row)
    }

    /// Scrolls so that `row` (clamped to the last row) sits frontal in the middle of the viewport.
    pub fn scroll_to_row(&mut self, row: usize) {
        if self.len == 0 {
            self.set_scroll_offset(0.0);
            return;
        }
        let row = row.min(self.len - 1);
        self.set_scroll_offset(self.offset_for_row(row));
    }

    /// The row closest to the middle of the viewport, if any.
    ///
    /// This is the row a host would snap to when scrolling settles.
    #[must_use]
    pub fn centered_row(&self) -> Option<usize> {
        let width = self.geometry.viewport().width;
        if self.len == 0 || width.is_nan() || width <= 0.0 {
            return None;
        }
        let slot = (self.scroll_offset / width).round().max(0.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Slot is non-negative and clamped to the row range right after the cast"
        )]
        let row = slot as usize;
        Some(row.min(self.len - 1))
    }

    /// Clamps the scroll offset so that the viewport stays within the content.
    ///
    /// The valid range runs from row 0 frontal to the last row frontal.
    pub fn clamp_scroll_to_content(&mut self) {
        let max_offset = match self.len {
            0 => 0.0,
            len => self.offset_for_row(len - 1),
        };
        let clamped = self.scroll_offset.max(0.0).min(max_offset);
        self.set_scroll_offset(clamped);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    #[cfg(not(feature = "std"))]
    use kurbo::common::FloatFuncs as _;
    use kurbo::{Rect, Size};

    use crate::{CoverFlowConfig, CoverFlowHost, CoverFlowLayout, ItemSizing, ScrollAxis};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    struct Host {
        sections: usize,
        axis: ScrollAxis,
        viewport: Size,
        items: usize,
        offset: f64,
    }

    impl Host {
        fn new(items: usize, offset: f64) -> Self {
            Self {
                sections: 1,
                axis: ScrollAxis::Horizontal,
                viewport: Size::new(300.0, 400.0),
                items,
                offset,
            }
        }
    }

    impl CoverFlowHost for Host {
        fn section_count(&self) -> usize {
            self.sections
        }

        fn scroll_axis(&self) -> ScrollAxis {
            self.axis
        }

        fn viewport_size(&self) -> Size {
            self.viewport
        }

        fn item_count(&self) -> usize {
            self.items
        }

        fn scroll_offset(&self) -> f64 {
            self.offset
        }
    }

    fn strip(len: usize) -> CoverFlowLayout {
        let mut layout = CoverFlowLayout::new(
            CoverFlowConfig::default(),
            Size::new(300.0, 400.0),
            Size::new(200.0, 300.0),
        );
        layout.set_len(len);
        layout
    }

    #[test]
    fn nine_items_at_start_show_first_row_frontal() {
        let mut layout = strip(9);
        let rows = layout.visible_rows();
        assert!(rows.contains(0));
        assert!(rows.last().unwrap() <= 1);

        let first = layout.item_transform(0);
        assert!(approx(first.center.x, 150.0));
        assert!(approx(first.center.y, 200.0));
        assert!(approx(first.angle_degrees, 0.0));
        assert!(approx(first.scale, 1.0));
        assert!(approx(first.opacity, 1.0));

        // Row 1 sits at the start of its interval, turned away.
        let second = layout.item_transform(1);
        assert!(approx(second.angle_degrees, -45.0));
    }

    #[test]
    fn visible_rows_track_scroll() {
        let mut layout = strip(9);
        layout.scroll_to_row(4);
        assert!(approx(layout.scroll_offset(), 1200.0));
        let rows = layout.visible_rows();
        assert!(rows.contains(4));
        assert_eq!(layout.centered_row(), Some(4));

        let transforms = layout.visible_transforms();
        assert_eq!(transforms.len(), rows.len());
        assert!(transforms.windows(2).all(|w| w[0].row + 1 == w[1].row));
        let centered = transforms.iter().find(|t| t.row == 4).unwrap();
        assert!(approx(centered.angle_degrees, 0.0));
    }

    #[test]
    fn cache_is_invalidated_by_every_input() {
        let mut layout = strip(9);
        let at_start = layout.visible_rows();

        layout.scroll_by(1500.0);
        let scrolled = layout.visible_rows();
        assert_ne!(at_start, scrolled);

        layout.set_len(1);
        assert!(layout.visible_rows().is_empty());

        layout.set_len(9);
        layout.config_mut().set_cover_density(1.0);
        let denser = layout.visible_rows();
        assert!(denser.len() >= scrolled.len());
    }

    #[test]
    fn transforms_in_rect_cover_prefetch_regions() {
        let layout = strip(9);
        let prefetch = Rect::new(900.0, 0.0, 1500.0, 400.0);
        let ahead = layout.transforms_in_rect(prefetch);
        let rows: Vec<usize> = ahead.iter().map(|t| t.row).collect();
        let expected: Vec<usize> = layout.rows_in_rect(prefetch).into_iter().collect();
        assert_eq!(rows, expected);
        assert!(rows.contains(&3));
        assert!(rows.contains(&4));
    }

    #[test]
    fn content_size_and_clamping() {
        let mut layout = strip(9);
        assert_eq!(layout.content_size(), Size::new(2700.0, 400.0));

        layout.set_scroll_offset(10_000.0);
        layout.clamp_scroll_to_content();
        assert!(approx(layout.scroll_offset(), 2400.0));

        layout.set_scroll_offset(-80.0);
        layout.clamp_scroll_to_content();
        assert!(approx(layout.scroll_offset(), 0.0));

        let mut empty = strip(0);
        assert_eq!(empty.content_size(), Size::ZERO);
        assert!(empty.visible_rows().is_empty());
        assert_eq!(empty.centered_row(), None);
        empty.scroll_to_row(3);
        assert!(approx(empty.scroll_offset(), 0.0));
    }

    #[test]
    fn centered_row_rounds_and_clamps() {
        let mut layout = strip(5);
        layout.set_scroll_offset(440.0);
        assert_eq!(layout.centered_row(), Some(1));
        layout.set_scroll_offset(460.0);
        assert_eq!(layout.centered_row(), Some(2));
        layout.set_scroll_offset(-500.0);
        assert_eq!(layout.centered_row(), Some(0));
        layout.set_scroll_offset(9_000.0);
        assert_eq!(layout.centered_row(), Some(4));
    }

    #[test]
    fn relative_item_sizing_follows_viewport() {
        let mut layout = CoverFlowLayout::new(
            CoverFlowConfig::default(),
            Size::new(320.0, 480.0),
            ItemSizing::RelativeToViewport {
                reference_item: Size::new(240.0, 320.0),
                reference_viewport: Size::new(320.0, 480.0),
            },
        );
        assert_eq!(layout.item_size(), Size::new(240.0, 320.0));

        layout.set_viewport_size(Size::new(480.0, 320.0));
        assert_eq!(layout.item_size(), Size::new(360.0, 320.0 * 320.0 / 480.0));

        layout.set_item_sizing(Size::new(100.0, 100.0));
        assert_eq!(layout.item_size(), Size::new(100.0, 100.0));
    }

    #[test]
    fn sync_pulls_host_state() {
        let mut layout = strip(0);
        let host = Host::new(7, 600.0);
        layout.sync_from_host(&host);
        assert_eq!(layout.len(), 7);
        assert!(approx(layout.scroll_offset(), 600.0));
        assert_eq!(layout.viewport_size(), Size::new(300.0, 400.0));
        assert_eq!(layout.centered_row(), Some(2));
    }

    #[test]
    #[should_panic(expected = "exactly one section")]
    fn sync_rejects_multiple_sections() {
        let mut host = Host::new(3, 0.0);
        host.sections = 2;
        strip(0).sync_from_host(&host);
    }

    #[test]
    #[should_panic(expected = "horizontal scrolling only")]
    fn sync_rejects_vertical_hosts() {
        let mut host = Host::new(3, 0.0);
        host.axis = ScrollAxis::Vertical;
        strip(0).sync_from_host(&host);
    }
}
