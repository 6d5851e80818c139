//! Module implementing the actual captioning task.
//! Most if not all captioning logic lives here.

use image::{DynamicImage, RgbaImage};

use crate::layout::{self, Anchor, PlacedLine};
use crate::model::{is_blank, Captions, Paint};
use crate::model::constants::OUTLINE_WIDTH;
use super::output::CaptionOutput;
use super::typeface::Typeface;


/// Render the captions onto a copy of given image.
///
/// The top caption is wrapped to the width of the image and placed
/// below its top edge, the bottom caption likewise above its bottom edge.
/// Empty captions are skipped.
#[inline]
pub fn caption<T: Typeface>(image: &DynamicImage,
                            captions: &Captions,
                            typeface: &T,
                            paint: Paint) -> CaptionOutput {
    CaptionTask{captions, typeface, paint}.perform(image)
}


/// Represents a single captioning task and contains all the relevant logic.
struct CaptionTask<'t, T: Typeface> {
    captions: &'t Captions,
    typeface: &'t T,
    paint: Paint,
}

impl<'t, T: Typeface> CaptionTask<'t, T> {
    /// Perform the captioning task.
    fn perform(self, image: &DynamicImage) -> CaptionOutput {
        debug!("Rendering {:?} with {:?}", self.captions, self.paint);

        // Rendering text requires alpha blending.
        trace!("Converting image to RGBA...");
        let mut canvas = image.to_rgba8();
        let (width, height) = canvas.dimensions();
        trace!("Image size: {}x{}", width, height);

        let top = self.layout_caption(&self.captions.top, width, height, Anchor::Top);
        let bottom = self.layout_caption(&self.captions.bottom, width, height, Anchor::Bottom);
        for line in top.iter().chain(bottom.iter()) {
            self.draw_line(&mut canvas, line);
        }

        CaptionOutput::new(canvas, top, bottom)
    }

    /// Wrap & position a single caption text.
    fn layout_caption(&self, text: &str,
                      width: u32, height: u32, anchor: Anchor) -> Vec<PlacedLine> {
        if is_blank(text) {
            debug!("Empty {:?} caption, skipping.", anchor);
            return vec![];
        }
        debug!("Laying out {:?} caption: {:?}", anchor, text);
        self.typeface.check(text);

        let lines = layout::wrap(text, width as f32, |s| self.typeface.measure(s).width);
        layout::place(&lines, width, height, anchor, |s| self.typeface.measure(s))
    }

    /// Draws a single line of caption text.
    fn draw_line(&self, canvas: &mut RgbaImage, line: &PlacedLine) {
        trace!("Drawing {:?} at ({}, {})", line.text, line.x, line.y);

        // Draw four copies of the text, shifted in four diagonal directions,
        // to create the basis for an outline.
        if let Some(outline_color) = self.paint.outline {
            let w = OUTLINE_WIDTH;
            for &(dx, dy) in [(-w, -w), (w, -w), (w, w), (-w, w)].iter() {
                self.typeface.draw(canvas, &line.text, line.x + dx, line.y + dy, outline_color);
            }
        }

        // Now render the actual text in the original position.
        self.typeface.draw(canvas, &line.text, line.x, line.y, self.paint.fill);
    }
}
