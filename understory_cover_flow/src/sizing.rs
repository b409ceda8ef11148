// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! How the nominal item size follows the viewport.

use kurbo::Size;

/// Policy for deriving the nominal item size from the viewport size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemSizing {
    /// Items keep this size regardless of the viewport.
    Fixed(Size),
    /// Items scale with the viewport, per axis, keeping the proportions they
    /// had against a reference viewport.
    ///
    /// Useful when the host rotates or resizes: an item that was 240×320 in a
    /// 320×480 viewport becomes 360×320 in a 480×480 one.
    RelativeToViewport {
        /// Item size measured against `reference_viewport`.
        reference_item: Size,
        /// Viewport size `reference_item` was designed for.
        reference_viewport: Size,
    },
}

impl ItemSizing {
    /// Resolves the item size for `viewport`.
    ///
    /// A zero reference dimension keeps the reference item dimension on that
    /// axis rather than dividing by zero. Negative results are clamped to zero.
    #[must_use]
    pub fn resolve(&self, viewport: Size) -> Size {
        let size = match *self {
            Self::Fixed(size) => size,
            Self::RelativeToViewport {
                reference_item,
                reference_viewport,
            } => Size::new(
                rescale(reference_item.width, reference_viewport.width, viewport.width),
                rescale(
                    reference_item.height,
                    reference_viewport.height,
                    viewport.height,
                ),
            ),
        };
        Size::new(size.width.max(0.0), size.height.max(0.0))
    }
}

impl Default for ItemSizing {
    fn default() -> Self {
        Self::Fixed(Size::ZERO)
    }
}

impl From<Size> for ItemSizing {
    fn from(size: Size) -> Self {
        Self::Fixed(size)
    }
}

fn rescale(item: f64, reference: f64, current: f64) -> f64 {
    if reference > 0.0 {
        current * item / reference
    } else {
        item
    }
}
