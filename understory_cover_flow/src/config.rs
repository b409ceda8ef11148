// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable parameters for the cover flow effect.

use tracing::debug;

/// The four tunables that shape the cover flow effect.
///
/// Every field has a bounded range. Writes outside that range are clamped to the
/// nearest bound instead of being rejected, so a host can wire sliders or other
/// free-form inputs straight into the setters.
///
/// Non-finite writes are ignored and keep the previous value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverFlowConfig {
    max_cover_degree: f64,
    cover_density: f64,
    min_cover_opacity: f64,
    min_cover_scale: f64,
}

impl CoverFlowConfig {
    /// Largest magnitude accepted for [`CoverFlowConfig::max_cover_degree`].
    pub const MAX_COVER_DEGREE_LIMIT: f64 = 360.0;

    /// Default maximum rotation, in degrees.
    pub const DEFAULT_MAX_COVER_DEGREE: f64 = 45.0;
    /// Default cover density.
    pub const DEFAULT_COVER_DENSITY: f64 = 0.25;
    /// Default minimum opacity (fully opaque, so no fading).
    pub const DEFAULT_MIN_COVER_OPACITY: f64 = 1.0;
    /// Default minimum scale (no shrinking).
    pub const DEFAULT_MIN_COVER_SCALE: f64 = 1.0;

    /// Creates a configuration with the default tunables.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_cover_degree: Self::DEFAULT_MAX_COVER_DEGREE,
            cover_density: Self::DEFAULT_COVER_DENSITY,
            min_cover_opacity: Self::DEFAULT_MIN_COVER_OPACITY,
            min_cover_scale: Self::DEFAULT_MIN_COVER_SCALE,
        }
    }

    /// Maximum rotation applied to an item at the edge of its interval, in degrees.
    ///
    /// Always within `[-360, 360]`.
    #[must_use]
    pub const fn max_cover_degree(&self) -> f64 {
        self.max_cover_degree
    }

    /// How much neighbouring items cover each other, as a fraction of the item width.
    ///
    /// `0` places items on a continuous line; `0.5` hides half of each neighbour
    /// behind the centered item. Always within `[0, 1]`.
    #[must_use]
    pub const fn cover_density(&self) -> f64 {
        self.cover_density
    }

    /// Opacity of an item at the edge of its interval. Always within `[0, 1]`.
    #[must_use]
    pub const fn min_cover_opacity(&self) -> f64 {
        self.min_cover_opacity
    }

    /// Scale of an item at the edge of its interval. Always within `[0, 1]`.
    #[must_use]
    pub const fn min_cover_scale(&self) -> f64 {
        self.min_cover_scale
    }

    /// Sets the maximum rotation, clamped to `[-360, 360]`.
    pub fn set_max_cover_degree(&mut self, degrees: f64) {
        self.max_cover_degree = clamp_field(
            "max_cover_degree",
            degrees,
            self.max_cover_degree,
            -Self::MAX_COVER_DEGREE_LIMIT,
            Self::MAX_COVER_DEGREE_LIMIT,
        );
    }

    /// Sets the cover density, clamped to `[0, 1]`.
    pub fn set_cover_density(&mut self, density: f64) {
        self.cover_density = clamp_field("cover_density", density, self.cover_density, 0.0, 1.0);
    }

    /// Sets the minimum opacity, clamped to `[0, 1]`.
    pub fn set_min_cover_opacity(&mut self, opacity: f64) {
        self.min_cover_opacity = clamp_field("min_cover_opacity", opacity, self.min_cover_opacity, 0.0, 1.0);
    }

    /// Sets the minimum scale, clamped to `[0, 1]`.
    pub fn set_min_cover_scale(&mut self, scale: f64) {
        self.min_cover_scale = clamp_field("min_cover_scale", scale, self.min_cover_scale, 0.0, 1.0);
    }

    /// Returns a copy with [`set_max_cover_degree`](Self::set_max_cover_degree) applied.
    #[must_use]
    pub fn with_max_cover_degree(mut self, degrees: f64) -> Self {
        self.set_max_cover_degree(degrees);
        self
    }

    /// Returns a copy with [`set_cover_density`](Self::set_cover_density) applied.
    #[must_use]
    pub fn with_cover_density(mut self, density: f64) -> Self {
        self.set_cover_density(density);
        self
    }

    /// Returns a copy with [`set_min_cover_opacity`](Self::set_min_cover_opacity) applied.
    #[must_use]
    pub fn with_min_cover_opacity(mut self, opacity: f64) -> Self {
        self.set_min_cover_opacity(opacity);
        self
    }

    /// Returns a copy with [`set_min_cover_scale`](Self::set_min_cover_scale) applied.
    #[must_use]
    pub fn with_min_cover_scale(mut self, scale: f64) -> Self {
        self.set_min_cover_scale(scale);
        self
    }
}

impl Default for CoverFlowConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_field(field: &'static str, value: f64, current: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        debug!(
            field,
            requested = value,
            kept = current,
            "ignored non-finite cover flow tunable"
        );
        return current;
    }
    let clamped = value.max(min).min(max);
    if clamped != value {
        debug!(field, requested = value, clamped, "clamped cover flow tunable");
    }
    clamped
}
