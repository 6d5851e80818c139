//! Module for handling command line arguments.

use std::env;
use std::error::Error;
use std::ffi::OsString;
use std::fmt;

use clap::{self, AppSettings, Arg, ArgMatches};
use meme::constants::{DEFAULT_FONT, DEFAULT_FONT_SIZE};

use super::{NAME, VERSION};


/// Parse command line arguments and return `Options` object.
#[inline]
pub fn parse() -> Result<Options, ArgsError> {
    parse_from_argv(env::args_os())
}

/// Parse application options from given array of arguments
/// (*all* arguments, including binary name).
#[inline]
pub fn parse_from_argv<I, T>(argv: I) -> Result<Options, ArgsError>
    where I: IntoIterator<Item=T>, T: Clone + Into<OsString>
{
    let parser = create_parser();
    let matches = parser.get_matches_from_safe(argv)?;
    Options::try_from(matches)
}


/// Structure to hold options received from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Verbosity of the logging output.
    ///
    /// Corresponds to the number of times the -v flag has been passed.
    /// If -q has been used instead, this will be negative.
    pub verbosity: isize,

    /// Name of the font to caption with, or a path to its file.
    pub font: String,
    /// Size of the caption text in pixels.
    pub font_size: f32,
}

impl<'a> TryFrom<ArgMatches<'a>> for Options {
    type Error = ArgsError;

    fn try_from(matches: ArgMatches<'a>) -> Result<Self, Self::Error> {
        let verbose_count = matches.occurrences_of(OPT_VERBOSE) as isize;
        let quiet_count = matches.occurrences_of(OPT_QUIET) as isize;
        let verbosity = verbose_count - quiet_count;

        let font = matches.value_of(OPT_FONT)
            .map(|f| f.trim().to_owned())
            .unwrap_or_else(|| DEFAULT_FONT.to_owned());
        if font.is_empty() {
            return Err(ArgsError::Font(font));
        }

        let font_size = match matches.value_of(OPT_FONT_SIZE) {
            Some(s) => {
                let s = s.trim();
                match s.parse::<f32>() {
                    Ok(size) if size.is_finite() && size > 0.0 => size,
                    _ => return Err(ArgsError::FontSize(s.to_owned())),
                }
            }
            None => DEFAULT_FONT_SIZE,
        };

        Ok(Options{verbosity, font, font_size})
    }
}


/// Error that can occur while parsing of command line arguments.
#[derive(Debug)]
pub enum ArgsError {
    /// General when parsing the arguments.
    Parse(clap::Error),
    /// Empty font name.
    Font(String),
    /// Font size that isn't a positive number.
    FontSize(String),
}

impl From<clap::Error> for ArgsError {
    fn from(e: clap::Error) -> Self {
        ArgsError::Parse(e)
    }
}

impl Error for ArgsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ArgsError::Parse(ref e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for ArgsError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ArgsError::Parse(ref e) => write!(fmt, "{}", e),
            ArgsError::Font(ref f) => write!(fmt, "invalid font name: {:?}", f),
            ArgsError::FontSize(ref s) => write!(fmt, "invalid font size: {:?}", s),
        }
    }
}


// Parser configuration

/// Type of the argument parser object
/// (which is called an "App" in clap's silly nomenclature).
type Parser<'p> = clap::App<'p, 'p>;


lazy_static! {
    static ref ABOUT: &'static str = option_env!("CARGO_PKG_DESCRIPTION").unwrap_or("");
}

const OPT_FONT: &str = "font";
const OPT_FONT_SIZE: &str = "font-size";
const OPT_VERBOSE: &str = "verbose";
const OPT_QUIET: &str = "quiet";


/// Create the parser for application's command line.
fn create_parser<'p>() -> Parser<'p> {
    let mut parser = Parser::new(*NAME);
    if let Some(version) = *VERSION {
        parser = parser.version(version);
    }
    parser
        .about(*ABOUT)

        .setting(AppSettings::StrictUtf8)

        .setting(AppSettings::UnifiedHelpMessage)
        .setting(AppSettings::DontCollapseArgsInUsage)
        .setting(AppSettings::DeriveDisplayOrder)

        // Font flags.
        .arg(Arg::with_name(OPT_FONT)
            .long("font").short("f")
            .takes_value(true)
            .value_name("FONT")
            .required(false)
            .help("Font to caption with")
            .long_help(concat!(
                "Name of the TrueType font to render the captions with, ",
                "or a path to its .ttf file.\n\n",
                "Fonts are looked up in data/fonts first, then in the system font directories.")))
        .arg(Arg::with_name(OPT_FONT_SIZE)
            .long("font-size").short("s")
            .takes_value(true)
            .value_name("PX")
            .required(false)
            .help("Size of the caption text in pixels"))

        // Verbosity flags.
        .arg(Arg::with_name(OPT_VERBOSE)
            .long("verbose").short("v")
            .multiple(true)
            .conflicts_with(OPT_QUIET)
            .help("Increase logging verbosity"))
        .arg(Arg::with_name(OPT_QUIET)
            .long("quiet").short("q")
            .multiple(true)
            .conflicts_with(OPT_VERBOSE)
            .help("Decrease logging verbosity"))

        .help_short("H")
        .version_short("V")
}


#[cfg(test)]
mod tests {
    use meme::constants::{DEFAULT_FONT, DEFAULT_FONT_SIZE};
    use spectral::prelude::*;
    use super::{parse_from_argv, ArgsError};
    use crate::NAME;

    #[test]
    fn no_args() {
        let opts = parse_from_argv(vec![*NAME]).unwrap();
        assert_eq!(0, opts.verbosity);
        assert_eq!(DEFAULT_FONT, opts.font);
        assert_eq!(DEFAULT_FONT_SIZE, opts.font_size);
    }

    #[test]
    fn verbosity() {
        assert_eq!(2, parse_from_argv(vec![*NAME, "-vv"]).unwrap().verbosity);
        assert_eq!(-1, parse_from_argv(vec![*NAME, "--quiet"]).unwrap().verbosity);
        assert_that!(parse_from_argv(vec![*NAME, "-v", "-q"])).is_err();
    }

    #[test]
    fn font() {
        let opts = parse_from_argv(vec![*NAME, "--font", "Anton"]).unwrap();
        assert_eq!("Anton", opts.font);
        let opts = parse_from_argv(vec![*NAME, "-f", "/usr/share/fonts/x.ttf"]).unwrap();
        assert_eq!("/usr/share/fonts/x.ttf", opts.font);
    }

    #[test]
    fn font_error_empty() {
        match parse_from_argv(vec![*NAME, "--font", "  "]) {
            Err(ArgsError::Font(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn font_size() {
        let opts = parse_from_argv(vec![*NAME, "-s", "64"]).unwrap();
        assert_eq!(64.0, opts.font_size);
    }

    #[test]
    fn font_size_error() {
        for &size in &["0", "-12", "big", "NaN"] {
            match parse_from_argv(vec![*NAME, "--font-size", size]) {
                Err(ArgsError::FontSize(ref s)) => assert_eq!(size, s),
                Err(ArgsError::Parse(_)) => {}  // clap may reject "-12" as a flag
                other => panic!("unexpected result for {:?}: {:?}", size, other),
            }
        }
    }

    #[test]
    fn unknown_flag() {
        match parse_from_argv(vec![*NAME, "--caption", "such wow"]) {
            Err(ArgsError::Parse(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
