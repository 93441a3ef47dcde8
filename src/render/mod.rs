// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! CPU compositor.
//!
//! [`compose`] projects the session state onto a pixel surface: clear,
//! background scaled to fill, then every text layer in paint order. It is
//! deterministic and idempotent — identical inputs produce a byte-identical
//! surface — so the app simply recomposes whenever the state revision
//! changes.

pub mod fonts;
mod text;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::models::text_layer::TextLayer;
pub use fonts::FontLibrary;

/// Paint the background and text layers onto `surface`, clearing it first.
///
/// The surface defines the output pixel size; the background is scaled to
/// exactly fill it (aspect distortion accepted, not corrected). Per-layer
/// stroke/shadow configuration never leaks to the next layer.
pub fn compose(
    surface: &mut RgbaImage,
    background: Option<&RgbaImage>,
    layers: &[TextLayer],
    fonts: &FontLibrary,
) {
    for pixel in surface.pixels_mut() {
        *pixel = Rgba([0, 0, 0, 0]);
    }

    if let Some(bg) = background {
        if bg.dimensions() == surface.dimensions() {
            imageops::overlay(surface, bg, 0, 0);
        } else {
            let (w, h) = surface.dimensions();
            let scaled = imageops::resize(bg, w, h, FilterType::Triangle);
            imageops::overlay(surface, &scaled, 0, 0);
        }
    }

    for layer in layers {
        draw_layer(surface, layer, fonts);
    }
}

/// One layer pass: shadow beneath, outline, fill on top. Empty text and
/// non-positive sizes draw nothing.
fn draw_layer(surface: &mut RgbaImage, layer: &TextLayer, fonts: &FontLibrary) {
    if layer.text.is_empty() || layer.font_size <= 0.0 {
        return;
    }

    let Some(font) = fonts.get(&layer.font_family) else {
        return;
    };
    let glyphs = text::layout_run(font, layer.font_size, &layer.text, layer.x, layer.y);
    let Some(fill_mask) = text::rasterize_run(font, &glyphs) else {
        return;
    };

    let stroke_mask = layer
        .has_stroke()
        .then(|| text::dilate(&fill_mask, layer.stroke_width.unwrap_or(0.0) / 2.0));

    if layer.has_shadow() {
        // The shadow is cast by everything the layer paints, so it uses the
        // outline silhouette when one exists.
        let silhouette = stroke_mask.as_ref().unwrap_or(&fill_mask);
        let blur_px = layer.shadow_blur.unwrap_or(0.0);
        let shadow = text::blur(silhouette, blur_px * 0.5);
        text::blend(
            surface,
            &shadow,
            layer.shadow_color.unwrap_or_default(),
            layer.shadow_offset_x.unwrap_or(0.0),
            layer.shadow_offset_y.unwrap_or(0.0),
        );
    }

    if let Some(stroke) = &stroke_mask {
        if let Some(color) = layer.stroke_color {
            text::blend(surface, stroke, color, 0.0, 0.0);
        }
    }

    text::blend(surface, &fill_mask, layer.color, 0.0, 0.0);
}
