//! Module defining the data model of a meme.

mod captions;
mod color;
mod paint;
pub mod constants;


pub use self::captions::Captions;
pub(crate) use self::captions::is_blank;
pub use self::color::Color;
pub use self::paint::Paint;
