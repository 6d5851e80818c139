//!
//! meme  -- Lulz on demand, one picture at a time
//!

#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;
#[macro_use] extern crate maplit;



mod caption;
mod layout;
mod model;
mod resources;
mod session;


pub use caption::*;
pub use layout::*;
pub use model::*;
pub use resources::*;
pub use session::*;

pub use image::{DynamicImage, ImageError, ImageFormat, RgbaImage};
