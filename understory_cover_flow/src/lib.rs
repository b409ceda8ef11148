// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_cover_flow --heading-base-level=0

//! Understory Cover Flow: geometry for a horizontally scrolling cover flow strip.
//!
//! Given a scroll offset, this crate works out how each item of a single-row
//! strip should be presented: where its center goes, how far it is turned
//! about the vertical axis, how much it is shrunk and faded. It also tells the
//! host which items can be seen through a given rectangle so that only those
//! need to be realized.
//!
//! The core concepts are:
//!
//! - [`CoverFlowConfig`]: the four tunables (maximum rotation, cover density,
//!   minimum opacity, minimum scale). Writes are clamped into range, never rejected.
//! - [`CoverFlowGeometry`]: configuration plus viewport and item sizes. All queries
//!   are pure functions of it:
//!   - [`CoverFlowGeometry::transform_for_row`] / [`interpolate_row`] produce an
//!     [`ItemTransform`] for one row at one scroll offset,
//!   - [`CoverFlowGeometry::visible_rows`] / [`compute_visible_rows`] produce the
//!     contiguous [`VisibleRows`] for a rectangle,
//!   - [`CoverFlowGeometry::content_size`] sizes the scrollable content.
//! - [`CoverFlowLayout`]: a small controller that owns a geometry, item count,
//!   and scroll offset, caches the visible rows, and offers paging helpers. It can
//!   pull its inputs from any [`CoverFlowHost`].
//! - [`Transform3D`]: the 4×4 perspective/rotation/scale matrix carried by each
//!   [`ItemTransform`], ready to hand to a compositor.
//!
//! ## Layout model
//!
//! Each item rests centered in its own slot, one viewport wide, so the content is
//! `viewport_width * len` wide and row `r` is frontal when the scroll offset is
//! `r * viewport_width`. While the offset moves one viewport width either side of
//! that, the item slides between its neighbours and turns from
//! `-max_cover_degree` to `+max_cover_degree`; scale and opacity dip to their
//! configured minimums at both ends.
//!
//! This crate deliberately does **not** know about widgets, cells, or gestures.
//! Host frameworks are responsible for:
//!
//! - Owning the item data and views.
//! - Feeding viewport size, item count, and scroll offset in on every bounds change.
//! - Applying each [`ItemTransform`] (center, matrix, opacity) to a view.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_cover_flow::{CoverFlowConfig, CoverFlowLayout};
//!
//! // A 300×400 viewport showing 200×300 covers.
//! let config = CoverFlowConfig::default().with_min_cover_scale(0.8);
//! let mut layout = CoverFlowLayout::new(config, Size::new(300.0, 400.0), Size::new(200.0, 300.0));
//! layout.set_len(9);
//!
//! // Bring the fifth item to the middle.
//! layout.scroll_to_row(4);
//!
//! for item in layout.visible_transforms() {
//!     // Hosts would now position the view for `item.row` at `item.center`,
//!     // apply `item.transform`, and set its opacity.
//!     assert!(item.scale >= 0.8 - 1e-9 && item.scale <= 1.0 + 1e-9);
//! }
//! assert_eq!(layout.centered_row(), Some(4));
//! ```
//!
//! ## Using the geometry directly
//!
//! Hosts that keep their own scroll state can skip the controller:
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_cover_flow::{CoverFlowConfig, CoverFlowGeometry};
//!
//! let geometry = CoverFlowGeometry::new(
//!     CoverFlowConfig::default(),
//!     Size::new(300.0, 400.0),
//!     Size::new(200.0, 300.0),
//! );
//! let offset = 150.0;
//! let viewport = Rect::new(offset, 0.0, offset + 300.0, 400.0);
//!
//! let rows = geometry.visible_rows(viewport, 9);
//! assert_eq!(rows.first(), Some(0));
//! for row in rows {
//!     let item = geometry.transform_for_row(row, offset);
//!     assert!(item.angle_degrees.abs() <= 45.0);
//! }
//! ```
//!
//! ## Degenerate inputs
//!
//! No query fails. A zero-width viewport yields no visible rows, and a row whose
//! travel interval collapses is reported frontal (angle `0`, scale `1`, opacity
//! `1`) rather than as `NaN`. Rotations close to ±90° combined with very wide
//! items push the perspective divisor toward zero; keep `max_cover_degree` well
//! away from those angles.
//!
//! ## Features
//!
//! - `std` *(default)*: use `std` floating-point functions.
//! - `libm`: use `libm` for floating-point functions in `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod geometry;
mod host;
mod interpolate;
mod layout;
mod sizing;
mod transform;
mod visibility;

pub use config::CoverFlowConfig;
pub use geometry::CoverFlowGeometry;
pub use host::{CoverFlowHost, ScrollAxis};
pub use interpolate::interpolate_row;
pub use layout::CoverFlowLayout;
pub use sizing::ItemSizing;
pub use transform::{ItemTransform, PROJECTION_PLANE_DISTANCE, Transform3D};
pub use visibility::{VisibleRows, compute_visible_rows};
