//! Module defining constants relevant to the data model.

use std::collections::HashMap;

use image::ImageFormat;

use super::Color;


/// Name of the default font.
pub const DEFAULT_FONT: &str = "impact";
/// Default pixel size of the caption text.
pub const DEFAULT_FONT_SIZE: f32 = 100.0;

/// Default color of the text.
pub const DEFAULT_COLOR: Color = Color(0xff, 0xff, 0xff);
/// Default color of the text outline.
/// This should be the inversion of DEFAULT_COLOR.
pub const DEFAULT_OUTLINE_COLOR: Color = Color(0x0, 0x0, 0x0);
/// Offset (in pixels, along both axes) of each outline copy of the text.
pub const OUTLINE_WIDTH: f32 = 2.0;

/// Distance between a block of caption text and the top or bottom image edge.
pub const TEXT_MARGIN: f32 = 10.0;

/// Preview images are shrunk to fit within this many pixels horizontally...
pub const PREVIEW_WIDTH: u32 = 500;
/// ...and vertically.
pub const PREVIEW_HEIGHT: u32 = 500;

/// Extension appended to a save path which doesn't have any.
pub const DEFAULT_SAVE_EXTENSION: &str = "png";

lazy_static! {
    /// Map of file extensions to supported image formats.
    pub static ref IMAGE_FORMAT_EXTENSIONS: HashMap<&'static str, ImageFormat> = hashmap!{
        "jpeg" => ImageFormat::Jpeg,
        "jpg" => ImageFormat::Jpeg,
        "png" => ImageFormat::Png,
    };
}
