// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cover flow over a small photo strip, driven the way a host widget would drive it.
//!
//! This example shows how to:
//! - adapt a host list to [`CoverFlowHost`] and sync a [`CoverFlowLayout`] from it,
//! - sweep the scroll offset and log what each visible cover looks like,
//! - retune the effect on the fly, as live sliders would,
//! - keep covers proportional to the viewport across a resize.
//!
//! Run:
//! - `cargo run -p understory_demos --example cover_flow_sweep`
//! - `RUST_LOG=info,understory_cover_flow=debug cargo run -p understory_demos --example cover_flow_sweep`

use kurbo::Size;
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_cover_flow::{
    CoverFlowConfig, CoverFlowHost, CoverFlowLayout, ItemSizing, ScrollAxis,
};

/// Stand-in for a scrolling list widget showing photos.
struct PhotoStrip {
    captions: Vec<&'static str>,
    viewport: Size,
    offset: f64,
}

impl CoverFlowHost for PhotoStrip {
    fn section_count(&self) -> usize {
        1
    }

    fn scroll_axis(&self) -> ScrollAxis {
        ScrollAxis::Horizontal
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn item_count(&self) -> usize {
        self.captions.len()
    }

    fn scroll_offset(&self) -> f64 {
        self.offset
    }
}

fn print_frame(strip: &PhotoStrip, layout: &mut CoverFlowLayout) {
    layout.sync_from_host(strip);
    let rows = layout.visible_rows();
    info!(
        offset = layout.scroll_offset(),
        rows = ?rows.range(),
        centered = ?layout.centered_row(),
        "frame"
    );
    for item in layout.visible_transforms() {
        let bounds = item
            .projected_bounds()
            .map(|r| format!("[{:.1}, {:.1}]", r.x0, r.x1))
            .unwrap_or_else(|| "behind eye".to_owned());
        info!(
            caption = strip.captions[item.row],
            x = format_args!("{:.2}", item.center.x),
            angle = format_args!("{:.2}", item.angle_degrees),
            scale = format_args!("{:.3}", item.scale),
            opacity = format_args!("{:.3}", item.opacity),
            projected = %bounds,
            "  cover"
        );
    }
}

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut strip = PhotoStrip {
        captions: vec![
            "Lake and forest.",
            "Beautiful bench.",
            "Sun rays going through trees.",
            "Autumn Road.",
            "Outstanding Waterfall.",
            "Different Seasons.",
            "Home near lake.",
            "Perfect Mirror.",
            "Interesting formula.",
        ],
        viewport: Size::new(320.0, 480.0),
        offset: 0.0,
    };

    // Covers are designed as 200×300 in a 320×480 viewport and follow resizes.
    let sizing = ItemSizing::RelativeToViewport {
        reference_item: Size::new(200.0, 300.0),
        reference_viewport: strip.viewport,
    };
    let mut layout = CoverFlowLayout::new(CoverFlowConfig::default(), strip.viewport, sizing);

    info!(
        content = ?layout.geometry().content_size(strip.captions.len()),
        "photo strip ready"
    );

    // Half a page at a time across the first few covers.
    for step in 0..5 {
        strip.offset = f64::from(step) * strip.viewport.width / 2.0;
        print_frame(&strip, &mut layout);
    }

    // Live tuning: steeper covers that shrink and fade toward the edges.
    let config = layout.config_mut();
    config.set_max_cover_degree(60.0);
    config.set_cover_density(0.4);
    config.set_min_cover_opacity(0.35);
    config.set_min_cover_scale(0.75);
    strip.offset = 3.5 * strip.viewport.width;
    print_frame(&strip, &mut layout);

    // Out-of-range slider values are clamped rather than rejected.
    layout.config_mut().set_cover_density(1.7);
    info!(density = layout.config().cover_density(), "wrote 1.7 to the density slider");

    // Rotate to landscape; covers keep their proportions.
    strip.viewport = Size::new(480.0, 320.0);
    strip.offset = 3.0 * strip.viewport.width;
    print_frame(&strip, &mut layout);
    info!(item_size = ?layout.item_size(), "resized to landscape");

    // Overscroll past the end, then let the host settle on the nearest cover.
    strip.offset = layout.content_size().width;
    print_frame(&strip, &mut layout);
    layout.clamp_scroll_to_content();
    if let Some(row) = layout.centered_row() {
        layout.scroll_to_row(row);
        strip.offset = layout.scroll_offset();
        print_frame(&strip, &mut layout);
    }
}
