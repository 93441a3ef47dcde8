// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Text properties panel: add-text input, layer list, and style controls
//! for the selected layer.

use egui::Color32;

use crate::models::text_layer::{LayerId, StylePatch, TextLayer, TextPatch};

/// Swatch palette offered for the fill color, matching the app theme.
const PALETTE: [(&str, Color32); 6] = [
    ("Lime", Color32::from_rgb(0xA3, 0xFF, 0x00)),
    ("Pink", Color32::from_rgb(0xFF, 0x9D, 0xE0)),
    ("White", Color32::from_rgb(0xF5, 0xF5, 0xF5)),
    ("Black", Color32::from_rgb(0x00, 0x00, 0x00)),
    ("Red", Color32::from_rgb(0xFF, 0x00, 0x00)),
    ("Blue", Color32::from_rgb(0x00, 0xFF, 0xFF)),
];

/// User interaction with the properties panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertiesAction {
    None,
    AddText(String),
    Select(LayerId),
    Remove(LayerId),
    Update(LayerId, TextPatch),
}

pub fn show(
    ui: &mut egui::Ui,
    texts: &[TextLayer],
    selected: Option<LayerId>,
    draft: &mut String,
) -> PropertiesAction {
    let mut action = PropertiesAction::None;

    ui.label(egui::RichText::new("ADD TEXT").small().strong());
    ui.horizontal(|ui| {
        let edit = ui.add(
            egui::TextEdit::singleline(draft)
                .hint_text("Enter text...")
                .desired_width(ui.available_width() - 30.0),
        );
        let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (ui.button("+").clicked() || submitted) && !draft.trim().is_empty() {
            action = PropertiesAction::AddText(draft.trim().to_string());
            draft.clear();
        }
    });

    if !texts.is_empty() {
        ui.separator();
        ui.label(egui::RichText::new("TEXT LAYERS").small().strong());
        egui::ScrollArea::vertical()
            .max_height(140.0)
            .show(ui, |ui| {
                for layer in texts {
                    ui.horizontal(|ui| {
                        let is_selected = selected == Some(layer.id);
                        let mut label: String = layer.text.chars().take(24).collect();
                        if layer.text.chars().count() > 24 {
                            label.push('…');
                        }
                        if ui.selectable_label(is_selected, label).clicked() {
                            action = PropertiesAction::Select(layer.id);
                        }
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.small_button("✕").on_hover_text("Delete layer").clicked() {
                                    action = PropertiesAction::Remove(layer.id);
                                }
                            },
                        );
                    });
                }
            });
    }

    if let Some(layer) = selected.and_then(|id| texts.iter().find(|t| t.id == id)) {
        ui.separator();
        ui.label(egui::RichText::new("STYLE").small().strong());

        // Font size, clamped to the same range the web sliders used.
        let mut size = layer.font_size;
        ui.label("Size");
        if ui
            .add(egui::Slider::new(&mut size, 24.0..=200.0).suffix("px"))
            .changed()
        {
            action = PropertiesAction::Update(
                layer.id,
                TextPatch::style(StylePatch {
                    font_size: Some(size),
                    ..Default::default()
                }),
            );
        }

        ui.label("Color");
        ui.horizontal_wrapped(|ui| {
            for (name, color) in PALETTE {
                let swatch = egui::Button::new("  ").fill(color);
                let response = ui.add(swatch).on_hover_text(name);
                if layer.color == color {
                    ui.painter().rect_stroke(
                        response.rect,
                        2.0,
                        egui::Stroke::new(2.0, ui.visuals().strong_text_color()),
                    );
                }
                if response.clicked() {
                    action = PropertiesAction::Update(
                        layer.id,
                        TextPatch::style(StylePatch {
                            color: Some(color),
                            ..Default::default()
                        }),
                    );
                }
            }
        });

        let mut stroke = layer.stroke_width.unwrap_or(0.0);
        ui.label("Outline");
        if ui
            .add(egui::Slider::new(&mut stroke, 0.0..=20.0).suffix("px"))
            .changed()
        {
            action = PropertiesAction::Update(
                layer.id,
                TextPatch::style(StylePatch {
                    stroke_width: Some(stroke),
                    ..Default::default()
                }),
            );
        }

        let mut shadow = layer.shadow_blur.unwrap_or(0.0);
        ui.label("Shadow");
        if ui
            .add(egui::Slider::new(&mut shadow, 0.0..=20.0).suffix("px"))
            .changed()
        {
            action = PropertiesAction::Update(
                layer.id,
                TextPatch::style(StylePatch {
                    shadow_blur: Some(shadow),
                    ..Default::default()
                }),
            );
        }

        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(format!("Font: {}", layer.font_family))
                .small()
                .weak(),
        );
    }

    action
}
