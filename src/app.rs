// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait, owning the editor session state and coordinating
//! between the UI panels, the compositor and file io.

use std::sync::mpsc::{channel, Receiver};

use image::RgbaImage;

use crate::io;
use crate::models::editor::EditorState;
use crate::models::template::{self, Template};
use crate::models::text_layer::{LayerId, StylePatch, TextPatch};
use crate::render::{self, FontLibrary};
use crate::ui::{canvas, properties, templates, toolbar};

/// Right-panel tab selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelTab {
    Text,
    Templates,
}

/// Main application state.
pub struct PixrApp {
    /// Editor session state: background, aspect ratio, text layers.
    state: EditorState,

    /// Font faces available to the compositor.
    fonts: FontLibrary,

    /// Built-in style templates, in panel order.
    templates: Vec<Template>,

    /// Active right-panel tab.
    panel_tab: PanelTab,

    /// Draft content of the add-text input.
    draft_text: String,

    /// Last composited surface, reused for export.
    composed: Option<RgbaImage>,

    /// State revision the surface was composed from.
    composed_revision: Option<u64>,

    /// Preview texture uploaded from the composited surface.
    preview_texture: Option<egui::TextureHandle>,

    /// Layer currently being dragged on the canvas.
    dragging_layer: Option<LayerId>,

    /// Receiver for background image loading.
    image_loader: Option<Receiver<Result<RgbaImage, String>>>,

    /// Loading state message.
    loading_message: Option<String>,
}

impl Default for PixrApp {
    fn default() -> Self {
        Self::new()
    }
}

impl PixrApp {
    /// Create a new PIXR application instance.
    pub fn new() -> Self {
        Self {
            state: EditorState::new(),
            fonts: FontLibrary::with_builtin(),
            templates: template::builtin(),
            panel_tab: PanelTab::Text,
            draft_text: String::new(),
            composed: None,
            composed_revision: None,
            preview_texture: None,
            dragging_layer: None,
            image_loader: None,
            loading_message: None,
        }
    }

    /// Decode an image file on a background thread and swap it in as the
    /// session background when it completes. Non-image files are ignored.
    fn start_image_load(&mut self, path: std::path::PathBuf) {
        if !io::media::is_image_file(&path) {
            log::warn!("Ignoring non-image file: {}", path.display());
            return;
        }

        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);
        self.loading_message = Some("Loading image...".to_string());

        // Spawn background thread for decoding
        std::thread::spawn(move || {
            let result = io::media::load_image(&path)
                .map_err(|e| format!("Failed to load image: {:#}", e));
            if result.is_ok() {
                log::info!("Loaded image: {}", path.display());
            }
            let _ = sender.send(result);
        });
    }

    /// Recompose the preview surface from the current state and upload it
    /// as the preview texture.
    fn recompose(&mut self, ctx: &egui::Context) {
        let (ew, eh) = self.state.aspect().export_size();
        let mut surface = match self.composed.take() {
            Some(s) if s.dimensions() == (ew, eh) => s,
            _ => RgbaImage::new(ew, eh),
        };

        render::compose(
            &mut surface,
            self.state.background(),
            self.state.texts(),
            &self.fonts,
        );

        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [ew as usize, eh as usize],
            surface.as_raw(),
        );
        self.preview_texture =
            Some(ctx.load_texture("preview", color_image, egui::TextureOptions::LINEAR));
        self.composed = Some(surface);
        self.composed_revision = Some(self.state.revision());
    }

    /// Export the current surface as a PNG picked via the save dialog.
    /// No-op if nothing has been composed yet.
    fn export_png(&self) {
        let Some(surface) = &self.composed else {
            log::warn!("Export requested before anything was composed");
            return;
        };

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name(io::export::default_file_name())
            .save_file()
        {
            match io::export::save_png(surface, &path) {
                Ok(_) => log::info!("Exported thumbnail to {}", path.display()),
                Err(e) => log::error!("Failed to export thumbnail: {:#}", e),
            }
        }
    }

    /// Load a font file and apply its family to the selected layer.
    fn load_font_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Fonts", &["ttf", "otf"])
            .pick_file()
        {
            let family = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Custom")
                .to_string();
            match self.fonts.load_file(&family, &path) {
                Ok(()) => {
                    if let Some(id) = self.state.selected_id() {
                        self.state.update_text(
                            id,
                            &TextPatch::style(StylePatch {
                                font_family: Some(family),
                                ..Default::default()
                            }),
                        );
                    }
                }
                Err(e) => log::error!("Failed to load font: {:#}", e),
            }
        }
    }

    fn remove_selected(&mut self) {
        if let Some(id) = self.state.selected_id() {
            self.state.remove_text(id);
        }
    }
}

impl eframe::App for PixrApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for a completed background decode
        if let Some(ref receiver) = self.image_loader {
            if let Ok(result) = receiver.try_recv() {
                self.image_loader = None;
                self.loading_message = None;

                match result {
                    Ok(image) => self.state.set_background(image),
                    Err(e) => log::error!("{}", e),
                }
            }
        }

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        // Recompose whenever the state changed since the last composite.
        if self.composed_revision != Some(self.state.revision()) {
            self.recompose(ctx);
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Images", io::media::IMAGE_EXTENSIONS)
                            .pick_file()
                        {
                            self.start_image_load(path);
                        }
                        ui.close_menu();
                    }
                    if ui.button("Load Font...").clicked() {
                        self.load_font_file();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Export PNG...").clicked() {
                        self.export_png();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Edit", |ui| {
                    let has_selection = self.state.selected_id().is_some();
                    if ui
                        .add_enabled(has_selection, egui::Button::new("Delete Selected"))
                        .clicked()
                    {
                        self.remove_selected();
                        ui.close_menu();
                    }
                    if ui.button("Clear Background").clicked() {
                        self.state.clear_background();
                        ui.close_menu();
                    }
                });
            });
        });

        // Toolbar: aspect ratio + export
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| toolbar::show(ui, self.state.aspect()))
            .inner;

        match toolbar_action {
            toolbar::ToolbarAction::SetAspectRatio(ratio) => self.state.set_aspect(ratio),
            toolbar::ToolbarAction::Export => self.export_png(),
            toolbar::ToolbarAction::None => {}
        }

        // Right panel: text properties / templates
        egui::SidePanel::right("right_panel")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .selectable_label(self.panel_tab == PanelTab::Text, "TEXT")
                        .clicked()
                    {
                        self.panel_tab = PanelTab::Text;
                    }
                    if ui
                        .selectable_label(self.panel_tab == PanelTab::Templates, "TEMPLATES")
                        .clicked()
                    {
                        self.panel_tab = PanelTab::Templates;
                    }
                });
                ui.separator();

                match self.panel_tab {
                    PanelTab::Text => {
                        let action = properties::show(
                            ui,
                            self.state.texts(),
                            self.state.selected_id(),
                            &mut self.draft_text,
                        );
                        match action {
                            properties::PropertiesAction::AddText(text) => {
                                self.state.add_text(text, None, None);
                            }
                            properties::PropertiesAction::Select(id) => {
                                self.state.select(Some(id));
                            }
                            properties::PropertiesAction::Remove(id) => {
                                self.state.remove_text(id);
                            }
                            properties::PropertiesAction::Update(id, patch) => {
                                self.state.update_text(id, &patch);
                            }
                            properties::PropertiesAction::None => {}
                        }
                    }
                    PanelTab::Templates => match templates::show(ui, &self.templates) {
                        templates::TemplatesAction::Apply(index) => {
                            if let Some(template) = self.templates.get(index) {
                                self.state.apply_template(template);
                            }
                        }
                        templates::TemplatesAction::None => {}
                    },
                }
            });

        // Handle keyboard events
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.dragging_layer = None;
            self.state.select(None);
        }

        // Delete removes the selected layer, unless a text field is focused
        // (to avoid deleting while editing content)
        if !ctx.wants_keyboard_input()
            && ctx.input(|i| {
                i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace)
            })
        {
            self.remove_selected();
        }

        // Main canvas (center)
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                // Show loading overlay if loading
                if let Some(ref message) = self.loading_message {
                    ui.centered_and_justified(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.spinner();
                            ui.add_space(10.0);
                            ui.label(
                                egui::RichText::new(message)
                                    .size(16.0)
                                    .color(egui::Color32::from_gray(200)),
                            );
                        });
                    });
                    canvas::CanvasAction::None
                } else {
                    canvas::show(
                        ui,
                        self.preview_texture.as_ref(),
                        self.state.aspect().resolve(),
                        self.state.texts(),
                        self.state.selected_id(),
                        self.dragging_layer,
                        self.state.background().is_some(),
                    )
                }
            })
            .inner;

        // Handle canvas actions
        match canvas_action {
            canvas::CanvasAction::BrowseForImage => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Images", io::media::IMAGE_EXTENSIONS)
                    .pick_file()
                {
                    self.start_image_load(path);
                }
            }
            canvas::CanvasAction::ImageDropped(path) => {
                self.start_image_load(path);
            }
            canvas::CanvasAction::SelectLayer(id) => {
                self.state.select(Some(id));
                log::info!("Selected text layer {}", id);
            }
            canvas::CanvasAction::Deselect => {
                self.state.select(None);
            }
            canvas::CanvasAction::BeginDrag(id) => {
                self.dragging_layer = Some(id);
                self.state.select(Some(id));
                log::info!("Started dragging text layer {}", id);
            }
            canvas::CanvasAction::DragTo { x, y } => {
                if let Some(id) = self.dragging_layer {
                    self.state.update_text(id, &TextPatch::position(x, y));
                }
            }
            canvas::CanvasAction::EndDrag => {
                if let Some(id) = self.dragging_layer.take() {
                    log::info!("Stopped dragging text layer {}", id);
                }
            }
            canvas::CanvasAction::None => {}
        }

        // A mutation this frame means the preview is stale; repaint soon.
        if self.composed_revision != Some(self.state.revision()) {
            ctx.request_repaint();
        }
    }
}
