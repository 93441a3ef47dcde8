// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Background image decoding.

use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;

/// File extensions accepted as background uploads, shared by the file
/// dialog filter and the drag&drop gate.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "webp", "tiff", "tif"];

/// Whether the path looks like a supported raster image. Anything else is
/// dropped before a decode is even attempted.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Decode an image file into RGBA8 pixels.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to decode image {}", path.display()))?;
    Ok(img.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn extension_gate_is_case_insensitive() {
        assert!(is_image_file(&PathBuf::from("photo.PNG")));
        assert!(is_image_file(&PathBuf::from("photo.jpeg")));
        assert!(!is_image_file(&PathBuf::from("notes.txt")));
        assert!(!is_image_file(&PathBuf::from("no_extension")));
    }

    #[test]
    fn load_rejects_non_image_content() {
        let path = std::env::temp_dir().join("pixr_not_an_image.png");
        std::fs::write(&path, b"this is not a png").unwrap();
        assert!(load_image(&path).is_err());
        let _ = std::fs::remove_file(&path);
    }
}
