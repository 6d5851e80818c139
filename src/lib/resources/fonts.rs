//! Module for loading fonts used in memes.

use std::env;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use glob::MatchOptions;

use super::Loader;


const FILE_EXTENSION: &str = "ttf";

/// Directory with fonts bundled alongside the application.
const BUNDLED_FONT_DIRECTORY: &str = "data/fonts";


/// Font that can be used to caption memes.
pub struct Font {
    name: String,
    inner: rusttype::Font<'static>,
}

impl Font {
    /// Parse a font from the raw bytes of a TrueType file.
    pub fn from_bytes<N: Into<String>>(name: N, bytes: Vec<u8>) -> Result<Self, FontError> {
        let name = name.into();
        match rusttype::Font::try_from_vec(bytes) {
            Some(inner) => Ok(Font{name, inner}),
            None => {
                error!("Font data for `{}` could not be parsed", name);
                Err(FontError::Invalid(name))
            }
        }
    }

    /// Name the font has been loaded under.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Deref for Font {
    type Target = rusttype::Font<'static>;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Font({:?})", self.name)
    }
}


/// Loader of fonts found by name in a list of directories.
#[derive(Debug)]
pub struct FontLoader {
    directories: Vec<PathBuf>,
}

impl FontLoader {
    /// Create a loader that searches the given directories, in order.
    pub fn new<I, D>(directories: I) -> Self
        where I: IntoIterator<Item=D>, D: AsRef<Path>
    {
        FontLoader{
            directories: directories.into_iter().map(|d| d.as_ref().to_owned()).collect(),
        }
    }

    /// Create a loader that searches the bundled font directory
    /// and then the usual places where the system keeps its fonts.
    pub fn with_system_directories() -> Self {
        let mut directories = vec![PathBuf::from(BUNDLED_FONT_DIRECTORY)];
        if let Some(home) = env::var_os("HOME").map(PathBuf::from) {
            directories.push(home.join(".fonts"));
            directories.push(home.join(".local/share/fonts"));
            directories.push(home.join("Library/Fonts"));
        }
        directories.extend([
            "/usr/share/fonts",
            "/usr/local/share/fonts",
            "/Library/Fonts",
            "/System/Library/Fonts",
            "C:\\Windows\\Fonts",
        ].iter().map(PathBuf::from));
        FontLoader{directories}
    }

    #[inline]
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }
}

impl FontLoader {
    /// Find the file of a font with given name.
    ///
    /// The name can also be a path to an existing font file,
    /// in which case no searching is done.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, FontError> {
        let path = Path::new(name);
        if path.is_file() {
            trace!("Font `{}` given as a direct path to a file", name);
            return Ok(path.to_owned());
        }

        let options = MatchOptions{case_sensitive: false, ..MatchOptions::new()};
        let file_name = format!("{}.{}", glob::Pattern::escape(name), FILE_EXTENSION);
        for directory in &self.directories {
            if !directory.is_dir() {
                continue;
            }
            let pattern = format!("{}/**/{}",
                glob::Pattern::escape(&directory.display().to_string()), file_name);
            trace!("Globbing with {}", pattern);

            let matches = match glob::glob_with(&pattern, options) {
                Ok(it) => it,
                Err(e) => {
                    warn!("Failed to glob over files with {}: {}", pattern, e);
                    continue;
                }
            };
            if let Some(found) = matches.filter_map(Result::ok).find(|p| p.is_file()) {
                debug!("Font `{}` found at {}", name, found.display());
                return Ok(found);
            }
        }
        Err(FontError::NotFound(name.to_owned()))
    }
}

impl Loader for FontLoader {
    type Item = Font;
    type Err = FontError;

    fn load(&self, name: &str) -> Result<Font, Self::Err> {
        let path = self.resolve(name)?;
        let bytes = fs::read(&path).map_err(|e| {
            error!("Failed to read font file {}: {}", path.display(), e);
            FontError::Io(e)
        })?;
        let font = Font::from_bytes(name, bytes)?;
        debug!("Font `{}` loaded successfully", name);
        Ok(font)
    }
}


/// Error that may occur while loading a font.
#[derive(Debug)]
pub enum FontError {
    /// No font file of that name in any of the directories.
    NotFound(String),
    /// The font file couldn't be read.
    Io(io::Error),
    /// The file isn't a usable TrueType font.
    Invalid(String),
}

impl Error for FontError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            FontError::Io(ref e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FontError::NotFound(ref f) => write!(fmt, "cannot find font `{}`", f),
            FontError::Io(ref e) => write!(fmt, "cannot read font file: {}", e),
            FontError::Invalid(ref f) => write!(fmt, "`{}` is not a valid font", f),
        }
    }
}
