// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Built-in style templates.
//!
//! A template is a named bundle of style fields applied to a layer's style
//! only; text content and position are never part of a template.

use egui::Color32;

use super::text_layer::{StylePatch, DEFAULT_FONT_FAMILY};

/// A named, reusable bundle of text style fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub style: StylePatch,
}

/// The built-in template table, in panel order.
pub fn builtin() -> Vec<Template> {
    vec![
        Template {
            id: "mrbeast",
            name: "MrBeast",
            style: StylePatch {
                font_size: Some(120.0),
                color: Some(Color32::from_rgb(0xFF, 0xFF, 0x00)),
                stroke_color: Some(Color32::from_rgb(0xFF, 0x00, 0x00)),
                stroke_width: Some(8.0),
                shadow_color: Some(Color32::BLACK),
                shadow_blur: Some(10.0),
                shadow_offset_x: Some(4.0),
                shadow_offset_y: Some(4.0),
                font_family: Some(DEFAULT_FONT_FAMILY.to_string()),
            },
        },
        Template {
            id: "girlboss",
            name: "Girlboss",
            style: StylePatch {
                font_size: Some(90.0),
                color: Some(Color32::from_rgb(0xFF, 0x9D, 0xE0)),
                stroke_color: Some(Color32::WHITE),
                stroke_width: Some(6.0),
                shadow_color: Some(Color32::BLACK),
                shadow_blur: Some(8.0),
                shadow_offset_x: Some(3.0),
                shadow_offset_y: Some(3.0),
                font_family: Some(DEFAULT_FONT_FAMILY.to_string()),
            },
        },
        Template {
            id: "minimal",
            name: "Minimal",
            style: StylePatch {
                font_size: Some(80.0),
                color: Some(Color32::BLACK),
                stroke_color: Some(Color32::WHITE),
                stroke_width: Some(4.0),
                // Transparent sentinel: turns the shadow off without
                // clearing the field.
                shadow_color: Some(Color32::TRANSPARENT),
                shadow_blur: Some(0.0),
                font_family: Some(DEFAULT_FONT_FAMILY.to_string()),
                ..Default::default()
            },
        },
        Template {
            id: "neon",
            name: "Retro Neon",
            style: StylePatch {
                font_size: Some(100.0),
                color: Some(Color32::from_rgb(0xA3, 0xFF, 0x00)),
                stroke_color: Some(Color32::from_rgb(0xFF, 0x00, 0xFF)),
                stroke_width: Some(6.0),
                shadow_color: Some(Color32::from_rgb(0xA3, 0xFF, 0x00)),
                shadow_blur: Some(15.0),
                shadow_offset_x: Some(0.0),
                shadow_offset_y: Some(0.0),
                font_family: Some(DEFAULT_FONT_FAMILY.to_string()),
            },
        },
        Template {
            id: "classic",
            name: "Classic",
            style: StylePatch {
                font_size: Some(85.0),
                color: Some(Color32::from_rgb(0xF5, 0xF5, 0xF5)),
                stroke_color: Some(Color32::BLACK),
                stroke_width: Some(5.0),
                shadow_color: Some(Color32::BLACK),
                shadow_blur: Some(6.0),
                shadow_offset_x: Some(2.0),
                shadow_offset_y: Some(2.0),
                font_family: Some(DEFAULT_FONT_FAMILY.to_string()),
            },
        },
        Template {
            id: "bold",
            name: "Bold Pop",
            style: StylePatch {
                font_size: Some(110.0),
                color: Some(Color32::from_rgb(0xFF, 0x00, 0x00)),
                stroke_color: Some(Color32::from_rgb(0xFF, 0xFF, 0x00)),
                stroke_width: Some(8.0),
                shadow_color: Some(Color32::BLACK),
                shadow_blur: Some(12.0),
                shadow_offset_x: Some(5.0),
                shadow_offset_y: Some(5.0),
                font_family: Some(DEFAULT_FONT_FAMILY.to_string()),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_templates_have_unique_ids() {
        let templates = builtin();
        let mut ids: Vec<_> = templates.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), templates.len());
    }

    #[test]
    fn minimal_template_disables_shadow() {
        let templates = builtin();
        let minimal = templates.iter().find(|t| t.id == "minimal").unwrap();
        assert_eq!(minimal.style.shadow_color, Some(Color32::TRANSPARENT));
        assert_eq!(minimal.style.font_size, Some(80.0));
    }
}
