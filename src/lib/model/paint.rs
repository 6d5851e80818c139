//! Module implementing the `Paint` type.

use super::Color;
use super::constants::{DEFAULT_COLOR, DEFAULT_OUTLINE_COLOR};


/// Colors that caption text is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Paint {
    /// Color of the text itself.
    pub fill: Color,
    /// Color of the outline around the text, if any.
    pub outline: Option<Color>,
}

impl Paint {
    #[inline]
    pub fn new(fill: Color) -> Self {
        Paint{fill, outline: None}
    }

    /// Paint with the default fill and a default outline.
    #[inline]
    pub fn outlined() -> Self {
        Paint::new(DEFAULT_COLOR).with_outline(DEFAULT_OUTLINE_COLOR)
    }

    #[inline]
    pub fn with_outline(self, color: Color) -> Self {
        Paint{outline: Some(color), ..self}
    }
}

impl Default for Paint {
    /// Plain white text, without any outline.
    fn default() -> Self {
        Paint::new(DEFAULT_COLOR)
    }
}
