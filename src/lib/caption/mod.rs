//! Module implementing image captioning.

mod output;
mod task;
mod typeface;


pub use self::output::CaptionOutput;
pub use self::task::caption;
pub use self::typeface::{Style, Typeface};

#[cfg(test)]
pub(crate) use self::typeface::testing;
