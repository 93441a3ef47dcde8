// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session state store.
//!
//! [`EditorState`] is the single write surface of the application: every
//! mutation goes through a method here, bumps the revision counter, and the
//! preview recomposes when the revision it last drew no longer matches.
//! Nothing survives the session; there is no persistence layer.

use image::RgbaImage;

use super::geometry::AspectRatio;
use super::template::Template;
use super::text_layer::{LayerId, TextLayer, TextPatch};

/// Text content given to a layer created by applying a template with no
/// selection.
pub const PLACEHOLDER_TEXT: &str = "SAMPLE TEXT";

/// Per-session editor state: background, aspect ratio, ordered text layers
/// and the selection pointer.
pub struct EditorState {
    background: Option<RgbaImage>,
    aspect: AspectRatio,
    texts: Vec<TextLayer>,
    selected: Option<LayerId>,
    next_id: u64,
    revision: u64,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Fresh session: no background, no layers, 16:9.
    pub fn new() -> Self {
        Self {
            background: None,
            aspect: AspectRatio::default(),
            texts: Vec::new(),
            selected: None,
            next_id: 0,
            revision: 0,
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn fresh_id(&mut self) -> LayerId {
        self.next_id += 1;
        LayerId(self.next_id)
    }

    /// Monotonic change counter; compare against the last composed value to
    /// decide whether the preview needs a repaint.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn aspect(&self) -> AspectRatio {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: AspectRatio) {
        if self.aspect != aspect {
            self.aspect = aspect;
            self.touch();
            log::info!("Aspect ratio set to {}", aspect);
        }
    }

    pub fn background(&self) -> Option<&RgbaImage> {
        self.background.as_ref()
    }

    /// Replace the background wholesale. The previous image is dropped.
    pub fn set_background(&mut self, image: RgbaImage) {
        log::info!("Background set ({}x{})", image.width(), image.height());
        self.background = Some(image);
        self.touch();
    }

    pub fn clear_background(&mut self) {
        if self.background.take().is_some() {
            self.touch();
            log::info!("Background cleared");
        }
    }

    /// Layers in paint order (later = on top).
    pub fn texts(&self) -> &[TextLayer] {
        &self.texts
    }

    pub fn selected_id(&self) -> Option<LayerId> {
        self.selected
    }

    /// The selected layer, if the selection points at a live one. A stale
    /// pointer simply yields `None`.
    pub fn selected_text(&self) -> Option<&TextLayer> {
        let id = self.selected?;
        self.texts.iter().find(|t| t.id == id)
    }

    /// Add a layer with the default style, centered on the export canvas
    /// when no position is given. The new layer becomes selected.
    ///
    /// Empty strings are accepted; the renderer treats them as a no-op.
    pub fn add_text(&mut self, text: impl Into<String>, x: Option<f32>, y: Option<f32>) -> LayerId {
        let (ew, eh) = self.aspect.export_size();
        let id = self.fresh_id();
        let layer = TextLayer::new(
            id,
            text.into(),
            x.unwrap_or(ew as f32 / 2.0),
            y.unwrap_or(eh as f32 / 2.0),
        );
        self.texts.push(layer);
        self.selected = Some(id);
        self.touch();
        log::info!("Added text layer {}, total: {}", id, self.texts.len());
        id
    }

    /// Merge `patch` into the identified layer. Returns `false` and leaves
    /// the state untouched (revision included) when the id is unknown.
    pub fn update_text(&mut self, id: LayerId, patch: &TextPatch) -> bool {
        match self.texts.iter_mut().find(|t| t.id == id) {
            Some(layer) => {
                layer.apply(patch);
                self.touch();
                true
            }
            None => {
                log::warn!("Update for unknown text layer {}", id);
                false
            }
        }
    }

    /// Delete the layer; clears the selection if it pointed at it. No-op
    /// for unknown ids.
    pub fn remove_text(&mut self, id: LayerId) {
        let before = self.texts.len();
        self.texts.retain(|t| t.id != id);
        if self.texts.len() != before {
            if self.selected == Some(id) {
                self.selected = None;
            }
            self.touch();
            log::info!("Removed text layer {}, total: {}", id, self.texts.len());
        }
    }

    /// Set the focus pointer. Existence is not validated; a stale id yields
    /// "no selected layer" downstream.
    pub fn select(&mut self, id: Option<LayerId>) {
        if self.selected != id {
            self.selected = id;
            self.touch();
        }
    }

    /// Apply a template's style fields to the selected layer, leaving text
    /// and position untouched. With no live selection, creates one new
    /// placeholder layer already carrying the template style — a single
    /// transaction, never an intermediate default-styled layer.
    pub fn apply_template(&mut self, template: &Template) {
        if let Some(id) = self.selected_text().map(|t| t.id) {
            if let Some(layer) = self.texts.iter_mut().find(|t| t.id == id) {
                template.style.apply_to(layer);
                self.touch();
                log::info!("Applied template '{}' to layer {}", template.name, id);
            }
        } else {
            let (ew, eh) = self.aspect.export_size();
            let id = self.fresh_id();
            let mut layer = TextLayer::new(
                id,
                PLACEHOLDER_TEXT.to_string(),
                ew as f32 / 2.0,
                eh as f32 / 2.0,
            );
            template.style.apply_to(&mut layer);
            self.texts.push(layer);
            self.selected = Some(id);
            self.touch();
            log::info!("Applied template '{}' to new layer {}", template.name, id);
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::template;
    use crate::models::text_layer::{DEFAULT_FILL, DEFAULT_FONT_SIZE};
    use egui::Color32;

    #[test]
    fn add_text_defaults_to_canvas_center_and_selects() {
        let mut state = EditorState::new();
        let id = state.add_text("HELLO", None, None);
        let layer = state.selected_text().expect("new layer selected");
        assert_eq!(layer.id, id);
        assert_eq!((layer.x, layer.y), (960.0, 540.0));
        assert_eq!(layer.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(layer.color, DEFAULT_FILL);
        assert!(layer.has_stroke());
        assert!(layer.has_shadow());
    }

    #[test]
    fn add_text_respects_explicit_position() {
        let mut state = EditorState::new();
        state.add_text("X", Some(100.0), Some(200.0));
        let layer = state.selected_text().unwrap();
        assert_eq!((layer.x, layer.y), (100.0, 200.0));
    }

    #[test]
    fn removing_selected_layer_clears_selection() {
        let mut state = EditorState::new();
        let id = state.add_text("A", None, None);
        assert_eq!(state.selected_id(), Some(id));
        state.remove_text(id);
        assert_eq!(state.selected_id(), None);
        assert!(state.texts().is_empty());
    }

    #[test]
    fn removing_unselected_layer_keeps_selection() {
        let mut state = EditorState::new();
        let a = state.add_text("A", None, None);
        let b = state.add_text("B", None, None);
        state.remove_text(a);
        assert_eq!(state.selected_id(), Some(b));
        assert_eq!(state.texts().len(), 1);
    }

    #[test]
    fn update_unknown_id_changes_nothing() {
        let mut state = EditorState::new();
        let id = state.add_text("A", None, None);
        state.remove_text(id);
        let before: Vec<_> = state.texts().to_vec();
        let revision = state.revision();
        let changed = state.update_text(id, &TextPatch::position(1.0, 2.0));
        assert!(!changed);
        assert_eq!(state.texts(), before.as_slice());
        assert_eq!(state.revision(), revision);
    }

    #[test]
    fn stale_selection_yields_no_selected_layer() {
        let mut state = EditorState::new();
        let id = state.add_text("A", None, None);
        state.remove_text(id);
        state.select(Some(id));
        assert!(state.selected_text().is_none());
    }

    #[test]
    fn template_on_selected_layer_touches_style_only() {
        let mut state = EditorState::new();
        let id = state.add_text("KEEP ME", Some(123.0), Some(456.0));
        let minimal = template::builtin()
            .into_iter()
            .find(|t| t.id == "minimal")
            .unwrap();
        state.apply_template(&minimal);
        let layer = state.texts().iter().find(|t| t.id == id).unwrap();
        assert_eq!(layer.text, "KEEP ME");
        assert_eq!((layer.x, layer.y), (123.0, 456.0));
        assert_eq!(layer.font_size, 80.0);
        assert_eq!(layer.color, Color32::BLACK);
        assert_eq!(layer.stroke_color, Some(Color32::WHITE));
        assert!(!layer.has_shadow());
    }

    #[test]
    fn template_without_selection_creates_one_styled_layer_atomically() {
        let mut state = EditorState::new();
        let revision = state.revision();
        let bold = template::builtin()
            .into_iter()
            .find(|t| t.id == "bold")
            .unwrap();
        state.apply_template(&bold);
        // One layer, already styled, in a single revision step.
        assert_eq!(state.texts().len(), 1);
        assert_eq!(state.revision(), revision + 1);
        let layer = &state.texts()[0];
        assert_eq!(layer.text, PLACEHOLDER_TEXT);
        assert_eq!(layer.font_size, 110.0);
        assert_eq!(state.selected_id(), Some(layer.id));
    }

    #[test]
    fn template_with_stale_selection_creates_new_layer() {
        let mut state = EditorState::new();
        let id = state.add_text("A", None, None);
        state.remove_text(id);
        state.select(Some(id));
        let classic = template::builtin()
            .into_iter()
            .find(|t| t.id == "classic")
            .unwrap();
        state.apply_template(&classic);
        assert_eq!(state.texts().len(), 1);
        assert_eq!(state.texts()[0].text, PLACEHOLDER_TEXT);
    }

    #[test]
    fn layer_ids_are_never_reused() {
        let mut state = EditorState::new();
        let a = state.add_text("A", None, None);
        state.remove_text(a);
        let b = state.add_text("B", None, None);
        assert_ne!(a, b);
    }

    #[test]
    fn paint_order_is_insertion_order() {
        let mut state = EditorState::new();
        let a = state.add_text("A", None, None);
        let b = state.add_text("B", None, None);
        let ids: Vec<_> = state.texts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a, b]);
    }
}
