// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! PIXR - A retro-styled thumbnail editor.
//!
//! A cross-platform desktop application for composing social media
//! thumbnails: a background image, styled text layers, PNG export.

use anyhow::Result;
use pixr::app::PixrApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("PIXR - Thumbnail Editor"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "PIXR",
        options,
        Box::new(|_cc| Ok(Box::new(PixrApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
