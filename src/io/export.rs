// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! PNG export of the composited surface.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use image::{ImageFormat, RgbaImage};

/// Download-style filename for an export at the given unix-millisecond
/// timestamp.
pub fn export_file_name(timestamp_ms: i64) -> String {
    format!("pixr-thumbnail-{}.png", timestamp_ms)
}

/// Filename stamped with the current time.
pub fn default_file_name() -> String {
    export_file_name(Utc::now().timestamp_millis())
}

/// Write the surface as a lossless PNG at its exact pixel dimensions.
pub fn save_png(surface: &RgbaImage, path: &Path) -> Result<()> {
    surface
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write PNG to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_embeds_timestamp() {
        assert_eq!(export_file_name(1700000000123), "pixr-thumbnail-1700000000123.png");
    }

    #[test]
    fn saved_png_round_trips_dimensions() {
        let surface = RgbaImage::new(32, 16);
        let path = std::env::temp_dir().join("pixr_export_test.png");
        save_png(&surface, &path).unwrap();
        let reloaded = image::open(&path).unwrap();
        assert_eq!((reloaded.width(), reloaded.height()), (32, 16));
        let _ = std::fs::remove_file(&path);
    }
}
