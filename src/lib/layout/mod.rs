//! Module implementing the layout of caption text.
//!
//! Both operations here are pure geometry: they only need a way to measure
//! text, which is given to them as a closure. Actually drawing anything
//! is left to the caller.

mod place;
mod wrap;


pub use self::place::{place, place_with_margin, Anchor, PlacedLine};
pub use self::wrap::wrap;


/// Measured box of a piece of text, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Extent{width, height}
    }
}
