// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item output: a resolved cover transform and the 4×4 matrix behind it.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};

/// Distance from the eye to the projection plane, in layout units.
///
/// Controls how strongly a rotated item is foreshortened. Shared by the
/// geometry solver and the perspective term of every [`ItemTransform`].
pub const PROJECTION_PLANE_DISTANCE: f64 = 500.0;

/// A 3D homogeneous transform using row vectors.
///
/// Points are transformed as `[x, y, z, 1] * M`, so `a.then(b)` applies `a`
/// first and `b` second. The field layout matches the `m11..m44` convention
/// used by common compositors, which makes the matrix easy to hand to a host
/// renderer as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3D {
    rows: [[f64; 4]; 4],
}

impl Transform3D {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a transform from row-major coefficients.
    #[must_use]
    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self { rows }
    }

    /// Returns the row-major coefficients.
    #[must_use]
    pub const fn as_rows(&self) -> [[f64; 4]; 4] {
        self.rows
    }

    /// The perspective coefficient (`m34`): `-1 / distance` for a perspective
    /// transform, `0` for an affine one.
    #[must_use]
    pub const fn m34(&self) -> f64 {
        self.rows[2][3]
    }

    /// A perspective projection onto the `z = 0` plane seen from `distance`.
    #[must_use]
    pub fn perspective(distance: f64) -> Self {
        let mut t = Self::IDENTITY;
        t.rows[2][3] = -1.0 / distance;
        t
    }

    /// A rotation of `radians` about the Y axis.
    ///
    /// Positive angles move the `+x` side of an item away from the viewer.
    #[must_use]
    pub fn rotation_y(radians: f64) -> Self {
        let s = radians.sin();
        let c = radians.cos();
        Self::from_rows([
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// A uniform scale on all three axes.
    #[must_use]
    pub fn scale(factor: f64) -> Self {
        Self::from_rows([
            [factor, 0.0, 0.0, 0.0],
            [0.0, factor, 0.0, 0.0],
            [0.0, 0.0, factor, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Returns the transform that applies `self` and then `other`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        let mut rows = [[0.0; 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.rows[i][k] * other.rows[k][j]).sum();
            }
        }
        Self { rows }
    }

    /// Maps a local 3D point and projects it back onto the plane.
    ///
    /// Returns `None` when the point lands at or behind the eye (`w <= 0`),
    /// where the projection has no meaningful 2D position.
    #[must_use]
    pub fn map_point(&self, x: f64, y: f64, z: f64) -> Option<Point> {
        let v = [x, y, z, 1.0];
        let column = |j: usize| -> f64 { (0..4).map(|i| v[i] * self.rows[i][j]).sum() };
        let w = column(3);
        if w.is_nan() || w <= 0.0 {
            return None;
        }
        Some(Point::new(column(0) / w, column(1) / w))
    }

    /// Returns `true` if this is exactly the identity transform.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Builds the cover transform for an item: perspective, then rotation about Y,
/// then uniform scale, as seen by a point in item-local coordinates.
pub(crate) fn cover_transform(angle_degrees: f64, scale: f64) -> Transform3D {
    Transform3D::scale(scale)
        .then(&Transform3D::rotation_y(angle_degrees.to_radians()))
        .then(&Transform3D::perspective(PROJECTION_PLANE_DISTANCE))
}

/// The fully resolved presentation of one row at one scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemTransform {
    /// The row this transform was computed for.
    pub row: usize,
    /// Screen-space center of the item, in content coordinates.
    pub center: Point,
    /// Nominal, untransformed item size.
    pub size: Size,
    /// Rotation about the vertical axis, in degrees.
    pub angle_degrees: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// The composed item-local transform (perspective, rotation, scale),
    /// applied around [`ItemTransform::center`].
    pub transform: Transform3D,
}

impl ItemTransform {
    /// Nominal frame of the item before its transform is applied.
    #[must_use]
    pub fn frame(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }

    /// Axis-aligned bounds of the item after projection.
    ///
    /// The box is conservative: it contains all four projected corners but is
    /// not a tight fit for the trapezoid they span. Returns `None` if any corner
    /// projects at or behind the eye.
    #[must_use]
    pub fn projected_bounds(&self) -> Option<Rect> {
        let hw = self.size.width / 2.0;
        let hh = self.size.height / 2.0;
        let corners = [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)];
        let mut bounds: Option<Rect> = None;
        for (x, y) in corners {
            let p = self.transform.map_point(x, y, 0.0)?;
            let p = Point::new(p.x + self.center.x, p.y + self.center.y);
            bounds = Some(match bounds {
                Some(r) => r.union_pt(p),
                None => Rect::from_points(p, p),
            });
        }
        bounds
    }
}
