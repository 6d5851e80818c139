//!
//! memegen  -- Lulz on the desktop
//!

#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;


mod app;
mod args;
mod dialogs;
mod logging;


use std::env;
use std::io::{self, Write};
use std::process::exit;

use meme::{FontLoader, Loader};

use crate::app::{MemeApp, WINDOW_TITLE};
use crate::args::ArgsError;


lazy_static! {
    /// Application / package name, as filled out by Cargo.
    static ref NAME: &'static str = option_env!("CARGO_PKG_NAME").unwrap_or("memegen");

    /// Application version, as filled out by Cargo.
    static ref VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
}

/// Initial size of the main window.
const WINDOW_SIZE: [f32; 2] = [560.0, 780.0];


fn main() {
    let opts = args::parse().unwrap_or_else(|e| {
        let code = match e {
            ArgsError::Parse(ref e) if !e.use_stderr() => exitcode::OK,  // --help, --version
            _ => exitcode::USAGE,
        };
        let _ = print_args_error(e);
        exit(code);
    });

    if let Err(e) = logging::init(opts.verbosity) {
        let _ = writeln!(&mut io::stderr(), "Failed to initialize logging: {}", e);
        exit(exitcode::SOFTWARE);
    }
    if cfg!(debug_assertions) {
        warn!("Debug mode! The program will likely be much slower.");
    }
    for (i, arg) in env::args().enumerate() {
        debug!("argv[{}] = {:?}", i, arg);
    }
    trace!("Options parsed from argv:\n{:#?}", opts);

    let loader = FontLoader::with_system_directories();
    let font = loader.load(&opts.font).unwrap_or_else(|e| {
        error!("Failed to load font `{}`: {}", opts.font, e);
        debug!("Font directories searched: {:?}", loader.directories());
        dialogs::show_error("Error", &format!("Cannot load the caption font: {}", e));
        exit(exitcode::DATAERR);
    });
    info!("Captioning with font `{}` at {}px", font.name(), opts.font_size);

    let native_options = eframe::NativeOptions{
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };
    let app = MemeApp::new(font, opts.font_size);

    debug!("Entering event loop...");
    if let Err(e) = eframe::run_native(
            WINDOW_TITLE, native_options, Box::new(move |_| Ok(Box::new(app)))) {
        error!("Window system failure: {}", e);
        exit(exitcode::SOFTWARE);
    }
}

/// Print an error that may occur while parsing arguments.
fn print_args_error(e: ArgsError) -> io::Result<()> {
    match e {
        ArgsError::Parse(ref e) if !e.use_stderr() =>
            writeln!(&mut io::stdout(), "{}", e.message),
        ArgsError::Parse(ref e) =>
            // In case of generic parse error,
            // message provided by the clap library will be the usage string.
            writeln!(&mut io::stderr(), "{}", e.message),
        e => {
            writeln!(&mut io::stderr(), "Failed to parse arguments: {}", e)
        },
    }
}
