//! Module wrapping the native file & message dialogs.
//!
//! All of them block until the user dismisses them.

use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};


/// File name suggested when saving a meme.
const DEFAULT_SAVE_FILE_NAME: &str = "meme.png";


/// Ask the user for an image file to caption.
pub fn pick_image() -> Option<PathBuf> {
    let path = FileDialog::new()
        .set_title("Choose image")
        .add_filter("Image Files", &["png", "jpg", "jpeg"])
        .pick_file();
    trace!("Image file picked: {:?}", path);
    path
}

/// Ask the user where to save the meme.
pub fn pick_save_path() -> Option<PathBuf> {
    let path = FileDialog::new()
        .set_title("Save meme")
        .add_filter("PNG files", &["png"])
        .add_filter("JPEG files", &["jpg", "jpeg"])
        .set_file_name(DEFAULT_SAVE_FILE_NAME)
        .save_file();
    trace!("Save path picked: {:?}", path);
    path
}


#[inline]
pub fn show_error(title: &str, message: &str) {
    show(MessageLevel::Error, title, message)
}

#[inline]
pub fn show_info(title: &str, message: &str) {
    show(MessageLevel::Info, title, message)
}

fn show(level: MessageLevel, title: &str, message: &str) {
    let _ = MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
