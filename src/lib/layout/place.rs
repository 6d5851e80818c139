//! Vertical placement of wrapped lines.

use crate::model::constants::TEXT_MARGIN;
use super::Extent;


/// Vertical reference point that a block of text is positioned from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Block starts just below the top edge of the image.
    Top,
    /// Block ends just above the bottom edge of the image.
    Bottom,
}


/// A line of text together with the position of its top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    pub x: f32,
    pub y: f32,
    pub text: String,
    /// Measured size of `text`.
    pub extent: Extent,
}


/// Position lines of text within an image of given size,
/// using the default margin from the image edge.
#[inline]
pub fn place<F>(lines: &[String],
                image_width: u32, image_height: u32,
                anchor: Anchor, measure: F) -> Vec<PlacedLine>
    where F: Fn(&str) -> Extent
{
    place_with_margin(lines, image_width, image_height, anchor, TEXT_MARGIN, measure)
}

/// Position lines of text within an image of given size.
///
/// Lines are stacked downwards, each one starting where the previous one ended,
/// and centered horizontally. For `Anchor::Top` the first line starts `margin`
/// pixels below the top edge. For `Anchor::Bottom` the whole block is shifted
/// so that it ends `margin` pixels above the bottom edge.
pub fn place_with_margin<F>(lines: &[String],
                            image_width: u32, image_height: u32,
                            anchor: Anchor, margin: f32, measure: F) -> Vec<PlacedLine>
    where F: Fn(&str) -> Extent
{
    if lines.is_empty() {
        return vec![];
    }

    let extents: Vec<Extent> = lines.iter().map(|l| measure(l)).collect();
    let mut y = match anchor {
        Anchor::Top => margin,
        Anchor::Bottom => {
            let block_height: f32 = extents.iter().map(|e| e.height).sum();
            image_height as f32 - margin - block_height
        }
    };
    trace!("Placing {} line(s) anchored at {:?}, starting at y={}", lines.len(), anchor, y);

    let image_width = image_width as f32;
    lines.iter().zip(extents).map(|(line, extent)| {
        let placed = PlacedLine{
            x: (image_width - extent.width) / 2.0,
            y,
            text: line.clone(),
            extent,
        };
        y += extent.height;
        placed
    }).collect()
}
