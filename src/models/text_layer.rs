// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Text layer records and partial updates.
//!
//! A layer's position is expressed in export-pixel coordinates and anchored
//! at the text center, so moving between aspect ratios or zoom levels never
//! rewrites layer data. Optional stroke/shadow fields stay absent until the
//! user (or a template) sets them.

use std::fmt;

use egui::Color32;

/// Font family used for new layers when none is specified.
pub const DEFAULT_FONT_FAMILY: &str = "Hack";

/// Fill color for new layers (retro lime).
pub const DEFAULT_FILL: Color32 = Color32::from_rgb(0xA3, 0xFF, 0x00);

/// Font size for new layers, in export pixels.
pub const DEFAULT_FONT_SIZE: f32 = 72.0;

/// Stable identifier for a text layer, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub(crate) u64);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One overlay text item.
///
/// Sequence position in [`crate::models::editor::EditorState`] defines paint
/// order (later layers draw on top); there is no separate z-index.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayer {
    pub id: LayerId,
    pub text: String,
    /// Horizontal center, in export pixels.
    pub x: f32,
    /// Vertical center, in export pixels.
    pub y: f32,
    pub font_size: f32,
    pub font_family: String,
    pub color: Color32,
    pub stroke_color: Option<Color32>,
    pub stroke_width: Option<f32>,
    pub shadow_color: Option<Color32>,
    pub shadow_blur: Option<f32>,
    pub shadow_offset_x: Option<f32>,
    pub shadow_offset_y: Option<f32>,
}

impl TextLayer {
    /// New layer centered at `(x, y)` with the default retro style:
    /// 72px lime fill, black 4px outline, soft black shadow.
    pub(crate) fn new(id: LayerId, text: String, x: f32, y: f32) -> Self {
        Self {
            id,
            text,
            x,
            y,
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            color: DEFAULT_FILL,
            stroke_color: Some(Color32::BLACK),
            stroke_width: Some(4.0),
            shadow_color: Some(Color32::BLACK),
            shadow_blur: Some(4.0),
            shadow_offset_x: Some(2.0),
            shadow_offset_y: Some(2.0),
        }
    }

    /// Whether the outline pass should run. Width 0 counts as "no stroke",
    /// same as an absent width.
    pub fn has_stroke(&self) -> bool {
        self.stroke_color.is_some() && self.stroke_width.map_or(false, |w| w > 0.0)
    }

    /// Whether the shadow pass should run. A fully transparent shadow color
    /// is the sentinel for "no shadow".
    pub fn has_shadow(&self) -> bool {
        self.shadow_color.map_or(false, |c| c.a() > 0)
    }

    /// Merge a partial update into this layer. Unset patch fields leave the
    /// current value untouched.
    pub(crate) fn apply(&mut self, patch: &TextPatch) {
        if let Some(text) = &patch.text {
            self.text = text.clone();
        }
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        patch.style.apply_to(self);
    }
}

/// Style-only partial update: the fields a template may carry.
///
/// `Some(v)` sets the field; `None` leaves it alone. A patch never clears a
/// field back to absent — transparent colors and zero widths are the
/// sentinels for "off", matching the sliders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StylePatch {
    pub font_size: Option<f32>,
    pub font_family: Option<String>,
    pub color: Option<Color32>,
    pub stroke_color: Option<Color32>,
    pub stroke_width: Option<f32>,
    pub shadow_color: Option<Color32>,
    pub shadow_blur: Option<f32>,
    pub shadow_offset_x: Option<f32>,
    pub shadow_offset_y: Option<f32>,
}

impl StylePatch {
    pub(crate) fn apply_to(&self, layer: &mut TextLayer) {
        if let Some(size) = self.font_size {
            layer.font_size = size;
        }
        if let Some(family) = &self.font_family {
            layer.font_family = family.clone();
        }
        if let Some(color) = self.color {
            layer.color = color;
        }
        if let Some(color) = self.stroke_color {
            layer.stroke_color = Some(color);
        }
        if let Some(width) = self.stroke_width {
            layer.stroke_width = Some(width);
        }
        if let Some(color) = self.shadow_color {
            layer.shadow_color = Some(color);
        }
        if let Some(blur) = self.shadow_blur {
            layer.shadow_blur = Some(blur);
        }
        if let Some(dx) = self.shadow_offset_x {
            layer.shadow_offset_x = Some(dx);
        }
        if let Some(dy) = self.shadow_offset_y {
            layer.shadow_offset_y = Some(dy);
        }
    }
}

/// Partial update for a whole layer: content, position and style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextPatch {
    pub text: Option<String>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub style: StylePatch,
}

impl TextPatch {
    /// Patch that only moves the layer.
    pub fn position(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    /// Patch that only changes style fields.
    pub fn style(style: StylePatch) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_stroke_width_counts_as_no_stroke() {
        let mut layer = TextLayer::new(LayerId(1), "A".into(), 0.0, 0.0);
        assert!(layer.has_stroke());
        layer.stroke_width = Some(0.0);
        assert!(!layer.has_stroke());
        layer.stroke_width = None;
        assert!(!layer.has_stroke());
    }

    #[test]
    fn transparent_shadow_counts_as_no_shadow() {
        let mut layer = TextLayer::new(LayerId(1), "A".into(), 0.0, 0.0);
        assert!(layer.has_shadow());
        layer.shadow_color = Some(Color32::TRANSPARENT);
        assert!(!layer.has_shadow());
    }

    #[test]
    fn patch_leaves_unset_fields_untouched() {
        let mut layer = TextLayer::new(LayerId(1), "A".into(), 10.0, 20.0);
        let before = layer.clone();
        layer.apply(&TextPatch::style(StylePatch {
            font_size: Some(120.0),
            ..Default::default()
        }));
        assert_eq!(layer.font_size, 120.0);
        assert_eq!(layer.text, before.text);
        assert_eq!((layer.x, layer.y), (before.x, before.y));
        assert_eq!(layer.color, before.color);
        assert_eq!(layer.stroke_width, before.stroke_width);
    }
}
