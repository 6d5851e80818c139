//! Module implementing the `Captions` type.


/// The two caption slots of a meme.
///
/// An empty (or whitespace-only) text means there is no caption in that slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Captions {
    /// Text rendered at the top of the image.
    pub top: String,
    /// Text rendered at the bottom of the image.
    pub bottom: String,
}

impl Captions {
    #[inline]
    pub fn new<T: Into<String>, B: Into<String>>(top: T, bottom: B) -> Self {
        Captions{top: top.into(), bottom: bottom.into()}
    }

    /// Whether there is at least one caption with some visible text.
    #[inline]
    pub fn has_text(&self) -> bool {
        !is_blank(&self.top) || !is_blank(&self.bottom)
    }
}

#[inline]
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}


#[cfg(test)]
mod tests {
    use spectral::prelude::*;
    use super::Captions;

    #[test]
    fn no_text() {
        assert_that!(Captions::default().has_text()).is_false();
        assert_that!(Captions::new("  ", "\t\n").has_text()).is_false();
    }

    #[test]
    fn any_slot_counts() {
        assert_that!(Captions::new("A", "").has_text()).is_true();
        assert_that!(Captions::new("", "B").has_text()).is_true();
        assert_that!(Captions::new("A", "B").has_text()).is_true();
    }
}
