// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Preview canvas: shows the composited thumbnail at display size, accepts
//! image drops, and lets the user select and drag text layers.
//!
//! The canvas works in display points but reports layer positions in
//! export pixels; the display-to-export scale comes from the active
//! [`CanvasSize`].

use std::path::PathBuf;

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke};

use crate::models::geometry::CanvasSize;
use crate::models::text_layer::{LayerId, TextLayer};

/// User interaction with the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasAction {
    None,
    /// Open the native file picker for a background image.
    BrowseForImage,
    /// An image file was dropped onto the window.
    ImageDropped(PathBuf),
    SelectLayer(LayerId),
    Deselect,
    /// Pointer went down on this layer; the app starts tracking a move.
    BeginDrag(LayerId),
    /// Pointer moved while dragging; position in export pixels.
    DragTo { x: f32, y: f32 },
    EndDrag,
}

/// Rough half-extents of a layer's text in export pixels, for hit testing
/// and the selection outline. The compositor knows exact glyph bounds; the
/// canvas only needs a grab target.
fn approx_half_size(layer: &TextLayer) -> (f32, f32) {
    let chars = layer.text.chars().count().max(1) as f32;
    let half_w = (layer.font_size * 0.6 * chars / 2.0).max(layer.font_size / 2.0);
    let half_h = layer.font_size * 0.75;
    (half_w, half_h)
}

pub fn show(
    ui: &mut egui::Ui,
    texture: Option<&egui::TextureHandle>,
    size: CanvasSize,
    texts: &[TextLayer],
    selected: Option<LayerId>,
    dragging: Option<LayerId>,
    has_background: bool,
) -> CanvasAction {
    let mut action = CanvasAction::None;

    let desired = egui::vec2(size.display.0 as f32, size.display.1 as f32);
    let avail = ui.available_size();
    ui.add_space(((avail.y - desired.y) / 2.0).max(0.0));

    let (rect, response) = ui
        .horizontal(|ui| {
            ui.add_space(((avail.x - desired.x) / 2.0).max(0.0));
            ui.allocate_exact_size(desired, Sense::click_and_drag())
        })
        .inner;

    // Export pixels per display point.
    let scale = size.export.0 as f32 / size.display.0 as f32;
    let to_export = |pos: Pos2| ((pos.x - rect.min.x) * scale, (pos.y - rect.min.y) * scale);
    let hit_layer = |pos: Pos2| -> Option<LayerId> {
        let (ex, ey) = to_export(pos);
        // Topmost layer wins, same as paint order.
        texts
            .iter()
            .rev()
            .find(|t| {
                let (half_w, half_h) = approx_half_size(t);
                (ex - t.x).abs() <= half_w && (ey - t.y).abs() <= half_h
            })
            .map(|t| t.id)
    };

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, Color32::from_gray(24));
    if let Some(texture) = texture {
        painter.image(
            texture.id(),
            rect,
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );
    }

    // Lime border while a file hovers the window, gray otherwise.
    let drop_hover = ui.input(|i| !i.raw.hovered_files.is_empty());
    let border = if drop_hover {
        Stroke::new(2.0, Color32::from_rgb(0xA3, 0xFF, 0x00))
    } else {
        Stroke::new(1.0, Color32::from_gray(90))
    };
    painter.rect_stroke(rect, 0.0, border);

    // Selection outline.
    if let Some(layer) = selected.and_then(|id| texts.iter().find(|t| t.id == id)) {
        let (half_w, half_h) = approx_half_size(layer);
        let center = Pos2::new(
            rect.min.x + layer.x / scale,
            rect.min.y + layer.y / scale,
        );
        let outline = Rect::from_center_size(
            center,
            egui::vec2(half_w * 2.0 / scale, half_h * 2.0 / scale),
        );
        painter.rect_stroke(
            outline.intersect(rect),
            0.0,
            Stroke::new(1.0, Color32::from_rgb(0xFF, 0x9D, 0xE0)),
        );
    }

    if !has_background {
        painter.text(
            rect.center() - egui::vec2(0.0, 22.0),
            Align2::CENTER_CENTER,
            "DROP IMAGE HERE",
            FontId::proportional(16.0),
            Color32::from_gray(160),
        );
        let button_rect = Rect::from_center_size(
            rect.center() + egui::vec2(0.0, 14.0),
            egui::vec2(130.0, 28.0),
        );
        if ui
            .put(button_rect, egui::Button::new("BROWSE FILES"))
            .clicked()
        {
            action = CanvasAction::BrowseForImage;
        }
    }

    // Files dropped anywhere on the window count as an upload.
    let dropped = ui.input(|i| i.raw.dropped_files.clone());
    if let Some(path) = dropped.into_iter().find_map(|f| f.path) {
        return CanvasAction::ImageDropped(path);
    }

    if response.drag_started() {
        if let Some(id) = response.interact_pointer_pos().and_then(|p| hit_layer(p)) {
            action = CanvasAction::BeginDrag(id);
        }
    } else if response.dragged() && dragging.is_some() {
        if let Some(pos) = response.interact_pointer_pos() {
            let (x, y) = to_export(pos);
            action = CanvasAction::DragTo { x, y };
        }
    } else if response.drag_stopped() {
        if dragging.is_some() {
            action = CanvasAction::EndDrag;
        }
    } else if response.clicked() {
        action = match response.interact_pointer_pos().and_then(|p| hit_layer(p)) {
            Some(id) => CanvasAction::SelectLayer(id),
            None => CanvasAction::Deselect,
        };
    }

    action
}
