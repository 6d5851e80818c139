//! Module implementing the state of a meme-making session.
//!
//! A `Session` holds everything the user has picked or typed so far,
//! and handles the few actions they can take on it.

mod error;


pub use self::error::SessionError;


use std::path::{Path, PathBuf};

use image::{imageops, DynamicImage, ImageFormat, RgbaImage};

use crate::caption::{self, CaptionOutput, Typeface};
use crate::model::{Captions, Paint};
use crate::model::constants::{DEFAULT_SAVE_EXTENSION, IMAGE_FORMAT_EXTENSIONS,
                              PREVIEW_HEIGHT, PREVIEW_WIDTH};


/// State of a single meme-making session.
#[derive(Debug, Default)]
pub struct Session {
    /// Caption texts, as currently entered.
    pub captions: Captions,
    /// Colors used for the caption text.
    pub paint: Paint,

    source: Option<Source>,
    generated: Option<CaptionOutput>,
    /// Whether the generated meme is newer than the selected image.
    generated_is_latest: bool,
}

/// Image selected as the basis of the meme.
#[derive(Debug)]
struct Source {
    path: Option<PathBuf>,
    image: DynamicImage,
}

impl Session {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

// Picking the image.
impl Session {
    /// Load the image file that the meme shall be made of.
    ///
    /// A meme generated previously is kept until the next successful `generate`.
    pub fn select_image<P: AsRef<Path>>(&mut self, path: P) -> Result<(), SessionError> {
        let path = path.as_ref();
        trace!("Loading image from {}...", path.display());
        let image = image::open(path)?;
        debug!("Image {} loaded ({}x{})", path.display(), image.width(), image.height());

        self.source = Some(Source{path: Some(path.to_owned()), image});
        self.generated_is_latest = false;
        Ok(())
    }

    /// Use an image that's already in memory as the basis of the meme.
    pub fn set_image(&mut self, image: DynamicImage) {
        debug!("Using in-memory image ({}x{})", image.width(), image.height());
        self.source = Some(Source{path: None, image});
        self.generated_is_latest = false;
    }

    #[inline]
    pub fn has_image(&self) -> bool {
        self.source.is_some()
    }

    /// Path of the selected image, if it has been loaded from a file.
    #[inline]
    pub fn image_path(&self) -> Option<&Path> {
        self.source.as_ref().and_then(|s| s.path.as_deref())
    }
}

// Making the meme.
impl Session {
    /// Caption the selected image with current texts.
    ///
    /// On success, the result replaces any previously generated meme.
    /// On failure, the previous meme (if any) stays as it was.
    pub fn generate<T: Typeface>(&mut self, typeface: &T) -> Result<&CaptionOutput, SessionError> {
        let source = self.source.as_ref().ok_or(SessionError::MissingImage)?;
        if !self.captions.has_text() {
            return Err(SessionError::MissingText);
        }

        let output = caption::caption(&source.image, &self.captions, typeface, self.paint);
        debug!("Generated meme with {} line(s) of text", output.line_count());
        self.generated_is_latest = true;
        Ok(self.generated.insert(output))
    }

    /// The most recently generated meme.
    #[inline]
    pub fn generated(&self) -> Option<&CaptionOutput> {
        self.generated.as_ref()
    }
}

// Saving & previewing.
impl Session {
    /// Write the generated meme to a file.
    ///
    /// Image format is figured out from the file extension;
    /// a path without one gets the default extension appended.
    /// Returns the path that was actually written to.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf, SessionError> {
        let output = self.generated.as_ref().ok_or(SessionError::MissingGeneratedImage)?;

        let mut path = path.as_ref().to_owned();
        if path.extension().is_none() {
            path.set_extension(DEFAULT_SAVE_EXTENSION);
        }
        let format = format_for_path(&path)?;

        debug!("Saving meme as {:?} to {}...", format, path.display());
        match format {
            // JPEG has no alpha channel.
            ImageFormat::Jpeg => DynamicImage::from(output.image().clone())
                .into_rgb8()
                .save_with_format(&path, format)?,
            _ => output.image().save_with_format(&path, format)?,
        }
        info!("Meme saved to {}", path.display());
        Ok(path)
    }

    /// Image to show to the user: whichever came last of the selected image
    /// and the generated meme. Shrunk to fit the preview area if necessary.
    pub fn preview(&self) -> Option<RgbaImage> {
        match (self.source.as_ref(), self.generated.as_ref()) {
            (_, Some(output)) if self.generated_is_latest => Some(fit_preview(output.image())),
            (Some(source), _) => Some(fit_preview(&source.image.to_rgba8())),
            (None, generated) => generated.map(|o| fit_preview(o.image())),
        }
    }
}


// Utility functions

fn format_for_path(path: &Path) -> Result<ImageFormat, SessionError> {
    let extension = path.extension().and_then(|e| e.to_str())
        .map(|e| e.trim().to_lowercase())
        .unwrap_or_default();
    IMAGE_FORMAT_EXTENSIONS.get(extension.as_str()).copied()
        .ok_or(SessionError::UnsupportedFormat(extension))
}

/// Shrink the image to fit within the preview bounds, preserving its aspect.
/// Images that already fit are left at their original size.
fn fit_preview(img: &RgbaImage) -> RgbaImage {
    let (width, height) = img.dimensions();
    if width <= PREVIEW_WIDTH && height <= PREVIEW_HEIGHT {
        return img.clone();
    }

    let ratio = f64::min(PREVIEW_WIDTH as f64 / width as f64,
                         PREVIEW_HEIGHT as f64 / height as f64);
    let target_width = ((width as f64 * ratio).round() as u32).max(1);
    let target_height = ((height as f64 * ratio).round() as u32).max(1);
    trace!("Shrinking preview from {}x{} to {}x{}",
        width, height, target_width, target_height);
    imageops::thumbnail(img, target_width, target_height)
}
