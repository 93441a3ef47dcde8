// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar: aspect ratio selector and the export button.

use crate::models::geometry::AspectRatio;

/// User interaction with the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    None,
    SetAspectRatio(AspectRatio),
    Export,
}

pub fn show(ui: &mut egui::Ui, current: AspectRatio) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("FORMAT").small().strong());
        for ratio in AspectRatio::ALL {
            let label = format!("{} ({})", ratio, ratio.platform_hint());
            if ui.selectable_label(current == ratio, label).clicked() {
                action = ToolbarAction::SetAspectRatio(ratio);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let export = egui::Button::new(egui::RichText::new("EXPORT").strong());
            if ui.add(export).on_hover_text("Save the thumbnail as PNG").clicked() {
                action = ToolbarAction::Export;
            }
        });
    });

    action
}
