// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Font resolution for the compositor.
//!
//! The library is seeded from the fonts egui already embeds, so the
//! renderer works without any font files on disk and produces the same
//! output on every machine. Extra faces can be loaded from `.ttf`/`.otf`
//! files at runtime.

use std::collections::BTreeMap;
use std::path::Path;

use ab_glyph::FontArc;
use anyhow::{Context, Result};

use crate::models::text_layer::DEFAULT_FONT_FAMILY;

/// Maps font family names to parsed faces, with a default fallback for
/// unknown names.
pub struct FontLibrary {
    fonts: BTreeMap<String, FontArc>,
    default_family: String,
}

impl FontLibrary {
    /// Library seeded with egui's embedded fonts ("Hack", "Ubuntu-Light",
    /// and the emoji faces).
    pub fn with_builtin() -> Self {
        let mut fonts = BTreeMap::new();
        for (name, data) in egui::FontDefinitions::default().font_data {
            match FontArc::try_from_vec(data.font.into_owned()) {
                Ok(font) => {
                    fonts.insert(name, font);
                }
                Err(e) => log::warn!("Skipping unparsable builtin font {}: {}", name, e),
            }
        }
        Self {
            fonts,
            default_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }

    /// Parse a font file and register it under `family`.
    pub fn load_file(&mut self, family: &str, path: &Path) -> Result<()> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read font file {}", path.display()))?;
        let font = FontArc::try_from_vec(bytes)
            .with_context(|| format!("Failed to parse font file {}", path.display()))?;
        log::info!("Loaded font '{}' from {}", family, path.display());
        self.fonts.insert(family.to_string(), font);
        Ok(())
    }

    /// Resolve a family name, falling back to the default family for
    /// unknown names. `None` only when the library is empty.
    pub fn get(&self, family: &str) -> Option<&FontArc> {
        self.fonts
            .get(family)
            .or_else(|| self.fonts.get(&self.default_family))
    }

    pub fn default_family(&self) -> &str {
        &self.default_family
    }

    /// Registered family names, sorted.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.fonts.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ab_glyph::Font;

    #[test]
    fn builtin_library_contains_default_family() {
        let library = FontLibrary::with_builtin();
        assert!(library.families().any(|f| f == DEFAULT_FONT_FAMILY));
    }

    #[test]
    fn unknown_family_falls_back_to_default() {
        let library = FontLibrary::with_builtin();
        let fallback = library.get("No Such Family").unwrap();
        let default = library.get(DEFAULT_FONT_FAMILY).unwrap();
        // Fallback must resolve to the default face.
        assert_eq!(fallback.glyph_id('A'), default.glyph_id('A'));
    }
}
