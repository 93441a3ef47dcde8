// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Template panel: a grid of one-click style presets.

use crate::models::template::Template;

/// User interaction with the template panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplatesAction {
    None,
    /// Apply the template at this index of the panel's template slice.
    Apply(usize),
}

pub fn show(ui: &mut egui::Ui, templates: &[Template]) -> TemplatesAction {
    let mut action = TemplatesAction::None;

    ui.label(egui::RichText::new("TEMPLATES").small().strong());
    egui::Grid::new("template_grid")
        .num_columns(2)
        .spacing([6.0, 6.0])
        .show(ui, |ui| {
            for (index, template) in templates.iter().enumerate() {
                let preview_color = template.style.color.unwrap_or(ui.visuals().text_color());
                let text = egui::RichText::new(template.name.to_uppercase())
                    .color(preview_color)
                    .strong();
                if ui
                    .add_sized([110.0, 40.0], egui::Button::new(text))
                    .clicked()
                {
                    action = TemplatesAction::Apply(index);
                }
                if index % 2 == 1 {
                    ui.end_row();
                }
            }
        });

    ui.add_space(6.0);
    ui.label(
        egui::RichText::new("Select a text layer first, then click a template to apply its style")
            .small()
            .weak(),
    );

    action
}
