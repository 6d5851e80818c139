//! Defines the output of a captioning operation.

use image::RgbaImage;

use crate::layout::PlacedLine;


/// Output of the captioning process.
#[derive(Clone, Debug)]
#[must_use = "unused caption output which must be used"]
pub struct CaptionOutput {
    image: RgbaImage,
    top: Vec<PlacedLine>,
    bottom: Vec<PlacedLine>,
}

impl CaptionOutput {
    #[inline]
    pub(super) fn new(image: RgbaImage, top: Vec<PlacedLine>, bottom: Vec<PlacedLine>) -> Self {
        CaptionOutput{image, top, bottom}
    }
}

impl CaptionOutput {
    /// The captioned image.
    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Lines of the top caption, as they were rendered.
    #[inline]
    pub fn top_lines(&self) -> &[PlacedLine] {
        &self.top
    }

    /// Lines of the bottom caption, as they were rendered.
    #[inline]
    pub fn bottom_lines(&self) -> &[PlacedLine] {
        &self.bottom
    }

    /// Total number of rendered lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.top.len() + self.bottom.len()
    }
}
