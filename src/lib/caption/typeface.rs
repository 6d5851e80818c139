//! Module defining how text is measured and drawn.

use std::collections::HashSet;
use std::fmt;

use image::{Pixel, RgbaImage};
use itertools::Itertools;
use rusttype::{point, GlyphId, Scale};

use crate::layout::Extent;
use crate::model::Color;
use crate::resources::Font;


/// Capability of measuring text and stamping it onto an image.
pub trait Typeface {
    /// Compute the size of given text when rendered with this typeface.
    ///
    /// The height is measured from the top of the line,
    /// so that a line drawn at `y` spans `y..y + height`.
    fn measure(&self, text: &str) -> Extent;

    /// Draw a single line of text with its top-left corner at `(x, y)`.
    /// Parts that fall outside of the canvas are clipped.
    fn draw(&self, canvas: &mut RgbaImage, text: &str, x: f32, y: f32, color: Color);

    /// Check if the typeface can render all the characters of given text,
    /// reporting any problems to the log.
    fn check(&self, _text: &str) {}
}


/// A font at a particular size.
#[derive(Clone, Copy)]
pub struct Style<'f> {
    font: &'f Font,
    size: f32,
}

impl<'f> Style<'f> {
    #[inline]
    pub fn new(font: &'f Font, size: f32) -> Self {
        assert!(size > 0.0, "Style got non-positive size ({})", size);
        Style{font, size}
    }

    #[inline]
    fn scale(&self) -> Scale {
        Scale::uniform(self.size)
    }
}

impl<'f> fmt::Debug for Style<'f> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Style")
            .field("font", &self.font.name())
            .field("size", &self.size)
            .finish()
    }
}

impl<'f> Typeface for Style<'f> {
    fn measure(&self, text: &str) -> Extent {
        let scale = self.scale();
        let ascent = self.font.v_metrics(scale).ascent;

        // Width is wherever the caret ends up (so trailing spaces count)
        // unless some glyph's ink sticks out even further.
        let mut extent = Extent::default();
        for glyph in self.font.layout(text, scale, point(0.0, ascent)) {
            let caret = glyph.position().x + glyph.unpositioned().h_metrics().advance_width;
            extent.width = extent.width.max(caret);
            if let Some(bbox) = glyph.pixel_bounding_box() {
                extent.width = extent.width.max(bbox.max.x as f32);
                extent.height = extent.height.max(bbox.max.y as f32);
            }
        }
        extent
    }

    fn draw(&self, canvas: &mut RgbaImage, text: &str, x: f32, y: f32, color: Color) {
        let scale = self.scale();
        let ascent = self.font.v_metrics(scale).ascent;
        let (width, height) = canvas.dimensions();

        for glyph in self.font.layout(text, scale, point(x, y + ascent)) {
            let bbox = match glyph.pixel_bounding_box() {
                Some(bbox) => bbox,
                None => continue,  // whitespace
            };
            glyph.draw(|gx, gy, v| {
                let px = bbox.min.x + gx as i32;
                let py = bbox.min.y + gy as i32;
                if px < 0 || py < 0 || px as u32 >= width || py as u32 >= height {
                    return;
                }
                let alpha = (v.min(1.0) * 255.0) as u8;
                canvas.get_pixel_mut(px as u32, py as u32).blend(&color.to_rgba(alpha));
            });
        }
    }

    fn check(&self, text: &str) {
        let missing = self.missing_glyphs(text);
        if !missing.is_empty() {
            warn!("Font `{}` is missing glyphs for {} codepoint(s): {}",
                self.font.name(), missing.len(),
                missing.iter().map(|&c| format!("{:#x}", c as u32)).join(", "));
        }
    }
}

impl<'f> Style<'f> {
    /// Distinct characters of the text that the font has no glyphs for,
    /// in codepoint order.
    fn missing_glyphs(&self, text: &str) -> Vec<char> {
        let missing: HashSet<char> = text.chars()
            .filter(|c| !c.is_whitespace())
            .filter(|&c| self.font.glyph(c).id() == GlyphId(0))
            .collect();
        missing.into_iter().sorted().collect()
    }
}


#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use image::RgbaImage;

    use crate::layout::Extent;
    use crate::model::Color;
    use super::Typeface;

    /// Typeface where every character (spaces included) is a solid block
    /// of the same size.
    #[derive(Debug)]
    pub struct Blocky {
        pub char_width: f32,
        pub line_height: f32,
        /// Every `draw` call, as (text, x, y, color).
        pub drawn: RefCell<Vec<(String, f32, f32, Color)>>,
    }

    impl Blocky {
        pub fn new(char_width: f32, line_height: f32) -> Self {
            Blocky{char_width, line_height, drawn: RefCell::new(vec![])}
        }
    }

    impl Typeface for Blocky {
        fn measure(&self, text: &str) -> Extent {
            Extent::new(text.chars().count() as f32 * self.char_width, self.line_height)
        }

        fn draw(&self, canvas: &mut RgbaImage, text: &str, x: f32, y: f32, color: Color) {
            self.drawn.borrow_mut().push((text.to_owned(), x, y, color));

            let extent = self.measure(text);
            let (width, height) = canvas.dimensions();
            let (x0, y0) = (x.max(0.0) as u32, y.max(0.0) as u32);
            let x1 = ((x + extent.width).max(0.0) as u32).min(width);
            let y1 = ((y + extent.height).max(0.0) as u32).min(height);
            for py in y0..y1 {
                for px in x0..x1 {
                    canvas.put_pixel(px, py, color.to_rgba(0xff));
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use spectral::prelude::*;

    use crate::layout::{place, wrap, Anchor};
    use crate::model::Color;
    use crate::resources::Font;
    use super::{Style, Typeface};

    const FONT_DATA: &[u8] = include_bytes!("../testdata/DejaVuSans-Bold.ttf");

    fn font() -> Font {
        Font::from_bytes("DejaVuSans-Bold", FONT_DATA.to_vec()).unwrap()
    }

    #[test]
    fn trailing_space_adds_width_but_not_height() {
        let font = font();
        let style = Style::new(&font, 100.0);
        let bare = style.measure("HELLO");
        let spaced = style.measure("HELLO ");
        assert!(bare.width > 0.0 && bare.height > 0.0, "{:?}", bare);
        assert!(spaced.width > bare.width, "{:?} vs. {:?}", spaced, bare);
        assert_eq!(bare.height, spaced.height);
    }

    #[test]
    fn descenders_make_text_taller() {
        let font = font();
        let style = Style::new(&font, 100.0);
        let plain = style.measure("aaa");
        let descending = style.measure("gag");
        assert!(descending.height > plain.height, "{:?} vs. {:?}", descending, plain);
    }

    #[test]
    fn size_scales_the_text() {
        let font = font();
        let small = Style::new(&font, 20.0).measure("HELLO");
        let big = Style::new(&font, 100.0).measure("HELLO");
        assert!(big.width > 4.0 * small.width, "{:?} vs. {:?}", big, small);
        assert!(big.height > 4.0 * small.height, "{:?} vs. {:?}", big, small);
    }

    #[test]
    fn draw_inks_inside_the_measured_box() {
        let font = font();
        let style = Style::new(&font, 100.0);
        let extent = style.measure("HELLO");
        let (x, y) = (10.0, 20.0);

        let mut canvas = RgbaImage::from_pixel(400, 200, Rgba([0, 0, 0, 0xff]));
        style.draw(&mut canvas, "HELLO", x, y, Color::white());

        let inked: Vec<_> = canvas.enumerate_pixels()
            .filter(|&(_, _, p)| *p != Rgba([0, 0, 0, 0xff]))
            .map(|(px, py, _)| (px as f32, py as f32))
            .collect();
        assert!(inked.len() > 1000, "only {} pixels inked", inked.len());
        for &(px, py) in &inked {
            assert!(px >= x - 1.0 && px <= x + extent.width + 1.0, "x={} outside", px);
            assert!(py >= y - 1.0 && py <= y + extent.height + 1.0, "y={} outside", py);
        }
        assert_eq!(Rgba([0, 0, 0, 0xff]), *canvas.get_pixel(399, 199));
    }

    #[test]
    fn draw_clips_to_canvas() {
        let font = font();
        let style = Style::new(&font, 100.0);
        let mut canvas = RgbaImage::from_pixel(40, 30, Rgba([0, 0, 0, 0xff]));
        style.draw(&mut canvas, "WWW", -20.0, -40.0, Color::white());
        style.draw(&mut canvas, "WWW", 30.0, 20.0, Color::white());
        assert!(canvas.pixels().any(|p| *p != Rgba([0, 0, 0, 0xff])));
    }

    #[test]
    fn wrapped_lines_fit_the_image() {
        let font = font();
        let style = Style::new(&font, 100.0);
        let text = "ONE DOES NOT SIMPLY WALK INTO MORDOR";

        let lines = wrap(text, 500.0, |s| style.measure(s).width);
        assert!(lines.len() > 1, "{:?}", lines);
        for line in &lines {
            let trimmed = line.trim_end();
            let single_word = !trimmed.contains(' ');
            assert!(single_word || style.measure(trimmed).width <= 500.0,
                "{:?} is too wide", line);
        }
        let words: Vec<_> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
        assert_eq!(text.split_whitespace().collect::<Vec<_>>(), words);

        let placed = place(&lines, 500, 800, Anchor::Bottom, |s| style.measure(s));
        let last = placed.last().unwrap();
        assert_eq!(790.0, last.y + last.extent.height);
    }

    #[test]
    fn missing_glyphs_are_found() {
        let font = font();
        let style = Style::new(&font, 100.0);
        assert_that!(style.missing_glyphs("HELLO, world!")).is_empty();
        assert_eq!(vec!['\u{4e2d}', '\u{6587}'],
            style.missing_glyphs("\u{6587} \u{4e2d}\u{6587}"));
        style.check("\u{4e2d}");  // only warns
    }
}
