// File: crates/benchplot-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, output formats).

use std::path::Path;

use skia_safe as skia;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    // room for tick labels and the rotated y title on the left, title on top
    fn default() -> Self {
        Self::new(88, 28, 52, 64)
    }
}

/// Raster encodings the renderer can persist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Infer the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    pub fn to_skia(self) -> skia::EncodedImageFormat {
        match self {
            Self::Png => skia::EncodedImageFormat::PNG,
            Self::Jpeg => skia::EncodedImageFormat::JPEG,
        }
    }
}
