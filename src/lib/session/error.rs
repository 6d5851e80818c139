//! Session error.

use std::error::Error;
use std::fmt;

use image::ImageError;


/// Error that may occur while handling a user action in a `Session`.
#[derive(Debug)]
pub enum SessionError {
    /// Captioning was requested before any image has been selected.
    MissingImage,
    /// Captioning was requested with both captions empty.
    MissingText,
    /// Saving was requested before any meme has been generated.
    MissingGeneratedImage,
    /// The file extension of a save path doesn't name a supported format.
    UnsupportedFormat(String),
    /// Decoding or encoding of an image failed.
    Image(ImageError),
}

impl SessionError {
    /// Whether the error is caused merely by the user doing things
    /// in the wrong order, as opposed to an actual failure.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(*self, SessionError::MissingImage
                      | SessionError::MissingText
                      | SessionError::MissingGeneratedImage)
    }
}

impl From<ImageError> for SessionError {
    fn from(e: ImageError) -> Self {
        SessionError::Image(e)
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            SessionError::Image(ref e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SessionError::MissingImage => write!(fmt, "no image has been selected"),
            SessionError::MissingText => write!(fmt, "no caption text has been entered"),
            SessionError::MissingGeneratedImage => write!(fmt, "no meme has been generated yet"),
            SessionError::UnsupportedFormat(ref ext) =>
                write!(fmt, "unsupported image file extension `{}`", ext),
            SessionError::Image(ref e) => write!(fmt, "image error: {}", e),
        }
    }
}
