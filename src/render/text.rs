// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Glyph rasterization primitives for the compositor.
//!
//! A text run is laid out once, rasterized into a floating-point coverage
//! mask, and the mask is then reused for every paint pass of the layer:
//! dilated for the outline, blurred for the drop shadow, blended as-is for
//! the fill. Masks carry their own surface-space origin so offsets and
//! padding never touch the caller.

use ab_glyph::{point, Font, FontArc, Glyph, PxScale, ScaleFont};
use egui::Color32;
use image::RgbaImage;

/// Grayscale coverage mask positioned in surface space.
pub(crate) struct Mask {
    /// Surface x of the mask's left edge.
    left: i32,
    /// Surface y of the mask's top edge.
    top: i32,
    width: usize,
    height: usize,
    /// Row-major coverage, 0.0..=1.0.
    data: Vec<f32>,
}

impl Mask {
    fn get(&self, x: i32, y: i32) -> f32 {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            0.0
        } else {
            self.data[y as usize * self.width + x as usize]
        }
    }
}

/// Lay out `text` at `px` pixels, centered horizontally and vertically on
/// `(cx, cy)`, with kerning applied between neighbours.
pub(crate) fn layout_run(font: &FontArc, px: f32, text: &str, cx: f32, cy: f32) -> Vec<Glyph> {
    let scale = PxScale::from(px);
    let scaled = font.as_scaled(scale);

    // Measure the run first so it can be centered on cx.
    let mut width = 0.0f32;
    let mut prev = None;
    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev_id) = prev {
            width += scaled.kern(prev_id, id);
        }
        width += scaled.h_advance(id);
        prev = Some(id);
    }

    // Vertical centering: the em box spans [baseline - ascent, baseline -
    // descent] (descent is negative), so its midpoint sits at baseline -
    // (ascent + descent) / 2.
    let baseline = cy + (scaled.ascent() + scaled.descent()) / 2.0;

    let mut glyphs = Vec::with_capacity(text.chars().count());
    let mut caret = cx - width / 2.0;
    let mut prev = None;
    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev_id) = prev {
            caret += scaled.kern(prev_id, id);
        }
        glyphs.push(id.with_scale_and_position(scale, point(caret, baseline)));
        caret += scaled.h_advance(id);
        prev = Some(id);
    }
    glyphs
}

/// Rasterize a glyph run into one coverage mask. Returns `None` when the
/// run has no visible outlines (empty text, whitespace).
pub(crate) fn rasterize_run(font: &FontArc, glyphs: &[Glyph]) -> Option<Mask> {
    let outlined: Vec<_> = glyphs
        .iter()
        .cloned()
        .filter_map(|g| font.outline_glyph(g))
        .collect();
    if outlined.is_empty() {
        return None;
    }

    let mut min_x = i32::MAX;
    let mut min_y = i32::MAX;
    let mut max_x = i32::MIN;
    let mut max_y = i32::MIN;
    for og in &outlined {
        let b = og.px_bounds();
        min_x = min_x.min(b.min.x.floor() as i32);
        min_y = min_y.min(b.min.y.floor() as i32);
        max_x = max_x.max(b.max.x.ceil() as i32);
        max_y = max_y.max(b.max.y.ceil() as i32);
    }

    let width = (max_x - min_x).max(1) as usize;
    let height = (max_y - min_y).max(1) as usize;
    let mut data = vec![0.0f32; width * height];

    for og in &outlined {
        let b = og.px_bounds();
        let gx = b.min.x.floor() as i32 - min_x;
        let gy = b.min.y.floor() as i32 - min_y;
        og.draw(|x, y, c| {
            let mx = gx + x as i32;
            let my = gy + y as i32;
            if mx >= 0 && my >= 0 && (mx as usize) < width && (my as usize) < height {
                let idx = my as usize * width + mx as usize;
                data[idx] = data[idx].max(c.clamp(0.0, 1.0));
            }
        });
    }

    Some(Mask {
        left: min_x,
        top: min_y,
        width,
        height,
        data,
    })
}

/// Grow coverage by `radius` pixels in every direction: each output pixel
/// takes the maximum of the source over a disk. Used for the text outline,
/// which extends half the stroke width beyond the fill.
pub(crate) fn dilate(mask: &Mask, radius: f32) -> Mask {
    if radius <= 0.0 {
        return Mask {
            left: mask.left,
            top: mask.top,
            width: mask.width,
            height: mask.height,
            data: mask.data.clone(),
        };
    }

    // Half-pixel inflation keeps thin strokes visible after quantization.
    let reach = radius + 0.5;
    let pad = reach.ceil() as i32;
    let mut offsets = Vec::new();
    for dy in -pad..=pad {
        for dx in -pad..=pad {
            if ((dx * dx + dy * dy) as f32).sqrt() <= reach {
                offsets.push((dx, dy));
            }
        }
    }

    let width = mask.width + 2 * pad as usize;
    let height = mask.height + 2 * pad as usize;
    let mut data = vec![0.0f32; width * height];
    for y in 0..mask.height as i32 {
        for x in 0..mask.width as i32 {
            let v = mask.get(x, y);
            if v <= 0.0 {
                continue;
            }
            for &(dx, dy) in &offsets {
                let ox = (x + pad + dx) as usize;
                let oy = (y + pad + dy) as usize;
                let idx = oy * width + ox;
                if data[idx] < v {
                    data[idx] = v;
                }
            }
        }
    }

    Mask {
        left: mask.left - pad,
        top: mask.top - pad,
        width,
        height,
        data,
    }
}

/// Separable gaussian blur of the coverage. `sigma <= 0` is a copy.
pub(crate) fn blur(mask: &Mask, sigma: f32) -> Mask {
    if sigma <= 0.0 {
        return Mask {
            left: mask.left,
            top: mask.top,
            width: mask.width,
            height: mask.height,
            data: mask.data.clone(),
        };
    }

    let radius = (sigma * 3.0).ceil() as i32;
    let mut kernel = Vec::with_capacity(2 * radius as usize + 1);
    let denom = 2.0 * sigma * sigma;
    for i in -radius..=radius {
        kernel.push((-(i * i) as f32 / denom).exp());
    }
    let sum: f32 = kernel.iter().sum();
    for k in &mut kernel {
        *k /= sum;
    }

    let pad = radius as usize;
    let width = mask.width + 2 * pad;
    let height = mask.height + 2 * pad;

    // Horizontal pass over the padded extent, reading zeros outside.
    let mut horizontal = vec![0.0f32; width * mask.height];
    for y in 0..mask.height {
        for x in 0..width {
            let mut acc = 0.0;
            for (k, weight) in kernel.iter().enumerate() {
                let sx = x as i32 - pad as i32 + k as i32 - radius;
                acc += weight * mask.get(sx, y as i32);
            }
            horizontal[y * width + x] = acc;
        }
    }

    // Vertical pass.
    let mut data = vec![0.0f32; width * height];
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0;
            for (k, weight) in kernel.iter().enumerate() {
                let sy = y as i32 - pad as i32 + k as i32 - radius;
                if sy >= 0 && (sy as usize) < mask.height {
                    acc += weight * horizontal[sy as usize * width + x];
                }
            }
            data[y * width + x] = acc;
        }
    }

    Mask {
        left: mask.left - pad as i32,
        top: mask.top - pad as i32,
        width,
        height,
        data,
    }
}

/// Alpha-over blend of the mask in `color` onto the surface, shifted by
/// `(dx, dy)` surface pixels. Out-of-bounds coverage clips.
pub(crate) fn blend(surface: &mut RgbaImage, mask: &Mask, color: Color32, dx: f32, dy: f32) {
    let color_a = color.a() as f32 / 255.0;
    if color_a <= 0.0 {
        return;
    }
    let src_rgb = [color.r() as f32, color.g() as f32, color.b() as f32];
    let (sw, sh) = surface.dimensions();
    let off_x = mask.left + dx.round() as i32;
    let off_y = mask.top + dy.round() as i32;

    for y in 0..mask.height {
        let py = off_y + y as i32;
        if py < 0 || py >= sh as i32 {
            continue;
        }
        for x in 0..mask.width {
            let px = off_x + x as i32;
            if px < 0 || px >= sw as i32 {
                continue;
            }
            let coverage = mask.data[y * mask.width + x];
            let sa = coverage * color_a;
            if sa <= 0.0 {
                continue;
            }

            let dst = surface.get_pixel_mut(px as u32, py as u32);
            let da = dst[3] as f32 / 255.0;
            let out_a = sa + da * (1.0 - sa);
            if out_a <= 0.0 {
                continue;
            }
            for c in 0..3 {
                let dst_c = dst[c] as f32;
                dst[c] = ((src_rgb[c] * sa + dst_c * da * (1.0 - sa)) / out_a).round() as u8;
            }
            dst[3] = (out_a * 255.0).round() as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fonts::FontLibrary;

    fn run_mask(text: &str, px: f32) -> Option<Mask> {
        let fonts = FontLibrary::with_builtin();
        let font = fonts.get(fonts.default_family()).unwrap();
        let glyphs = layout_run(font, px, text, 100.0, 100.0);
        rasterize_run(font, &glyphs)
    }

    #[test]
    fn whitespace_run_has_no_coverage() {
        assert!(run_mask("   ", 72.0).is_none());
    }

    #[test]
    fn run_is_centered_on_anchor() {
        let mask = run_mask("HELLO", 72.0).unwrap();
        let center_x = mask.left as f32 + mask.width as f32 / 2.0;
        let center_y = mask.top as f32 + mask.height as f32 / 2.0;
        assert!((center_x - 100.0).abs() < 8.0, "center_x = {center_x}");
        assert!((center_y - 100.0).abs() < 16.0, "center_y = {center_y}");
    }

    #[test]
    fn dilation_grows_the_mask() {
        let mask = run_mask("O", 72.0).unwrap();
        let grown = dilate(&mask, 3.0);
        assert!(grown.width > mask.width);
        assert!(grown.height > mask.height);
        assert!(grown.left < mask.left);
        // Every source pixel survives in place.
        let shift = mask.left - grown.left;
        assert!(mask.get(0, 0) <= grown.get(shift, mask.top - grown.top));
    }

    #[test]
    fn blur_preserves_total_coverage_roughly() {
        let mask = run_mask("O", 72.0).unwrap();
        let blurred = blur(&mask, 2.0);
        let before: f32 = mask.data.iter().sum();
        let after: f32 = blurred.data.iter().sum();
        assert!((before - after).abs() / before < 0.05);
    }
}
