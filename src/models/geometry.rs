// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Export and preview geometry for the supported aspect ratios.
//!
//! The exported image always uses the fixed per-ratio pixel size; the
//! on-screen preview is capped to a constant width with its height derived
//! from the export aspect, so the preview never lies about proportions.

use std::fmt;

/// Maximum width of the on-screen preview canvas, in points.
pub const DISPLAY_MAX_WIDTH: u32 = 600;

/// Target aspect ratio for the exported thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectRatio {
    /// 16:9, the YouTube thumbnail format.
    #[default]
    Widescreen,
    /// 9:16, vertical stories/shorts.
    Vertical,
    /// 1:1, square feed posts.
    Square,
}

/// Export and display pixel sizes resolved for one aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    /// Final pixel dimensions of the exported image.
    pub export: (u32, u32),
    /// On-screen preview dimensions, width-capped.
    pub display: (u32, u32),
}

impl AspectRatio {
    /// All supported ratios, in toolbar order.
    pub const ALL: [AspectRatio; 3] = [
        AspectRatio::Widescreen,
        AspectRatio::Vertical,
        AspectRatio::Square,
    ];

    /// Fixed export resolution for this ratio.
    pub fn export_size(self) -> (u32, u32) {
        match self {
            AspectRatio::Widescreen => (1920, 1080),
            AspectRatio::Vertical => (1080, 1920),
            AspectRatio::Square => (1080, 1080),
        }
    }

    /// Preview resolution: constant width, height derived from the export
    /// aspect so the preview keeps the export proportions.
    pub fn display_size(self) -> (u32, u32) {
        let (ew, eh) = self.export_size();
        let aspect = ew as f64 / eh as f64;
        let height = (DISPLAY_MAX_WIDTH as f64 / aspect).round() as u32;
        (DISPLAY_MAX_WIDTH, height)
    }

    /// Resolve both sizes at once.
    pub fn resolve(self) -> CanvasSize {
        CanvasSize {
            export: self.export_size(),
            display: self.display_size(),
        }
    }

    /// Which platform this format targets, for the toolbar hint.
    pub fn platform_hint(self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "YouTube",
            AspectRatio::Vertical => "TikTok/Stories",
            AspectRatio::Square => "Instagram",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Vertical => "9:16",
            AspectRatio::Square => "1:1",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_sizes_match_table() {
        assert_eq!(AspectRatio::Widescreen.export_size(), (1920, 1080));
        assert_eq!(AspectRatio::Vertical.export_size(), (1080, 1920));
        assert_eq!(AspectRatio::Square.export_size(), (1080, 1080));
    }

    #[test]
    fn display_height_derived_from_export_aspect() {
        assert_eq!(AspectRatio::Widescreen.display_size(), (600, 338));
        assert_eq!(AspectRatio::Vertical.display_size(), (600, 1067));
        assert_eq!(AspectRatio::Square.display_size(), (600, 600));
    }

    #[test]
    fn resolve_bundles_both_sizes() {
        let size = AspectRatio::Widescreen.resolve();
        assert_eq!(size.export, (1920, 1080));
        assert_eq!(size.display, (600, 338));
    }

    #[test]
    fn default_ratio_is_widescreen() {
        assert_eq!(AspectRatio::default(), AspectRatio::Widescreen);
    }
}
