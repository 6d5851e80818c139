//! Module implementing the application window.

use std::path::Path;

use eframe::{App, Frame};
use egui::{Context, TextureHandle, TextureOptions, Ui};
use meme::{Font, Paint, Session, SessionError, Style};

use crate::dialogs;


/// Title of the main window.
pub const WINDOW_TITLE: &str = "Meme Generator";


/// The application: a session plus everything needed to show it on screen.
pub struct MemeApp {
    session: Session,
    font: Font,
    font_size: f32,
    /// Whether the caption text should be outlined.
    outline: bool,

    preview: Option<TextureHandle>,
    /// Whether the preview texture needs to be recreated from the session.
    preview_stale: bool,
}

impl MemeApp {
    pub fn new(font: Font, font_size: f32) -> Self {
        MemeApp{
            session: Session::new(),
            font,
            font_size,
            outline: false,
            preview: None,
            preview_stale: false,
        }
    }
}

// Button handlers.
impl MemeApp {
    fn choose_image(&mut self) {
        let path = match dialogs::pick_image() {
            Some(path) => path,
            None => return,
        };
        match self.session.select_image(&path) {
            Ok(()) => self.preview_stale = true,
            Err(e) => {
                error!("Failed to load image {}: {}", path.display(), e);
                report(&e);
            }
        }
    }

    fn generate_meme(&mut self) {
        self.session.paint = if self.outline { Paint::outlined() } else { Paint::default() };

        let style = Style::new(&self.font, self.font_size);
        match self.session.generate(&style) {
            Ok(output) => {
                info!("Meme generated with {} line(s) of text", output.line_count());
                self.preview_stale = true;
            }
            Err(e) => {
                if e.is_recoverable() {
                    debug!("Cannot generate meme: {}", e);
                } else {
                    error!("Failed to generate meme: {}", e);
                }
                report(&e);
            }
        }
    }

    fn save_meme(&mut self) {
        // Check before bothering the user with a file dialog.
        if self.session.generated().is_none() {
            report(&SessionError::MissingGeneratedImage);
            return;
        }
        let path = match dialogs::pick_save_path() {
            Some(path) => path,
            None => return,
        };
        match self.session.save(&path) {
            Ok(_) => dialogs::show_info("Saved", "Send the meme to a friend!"),
            Err(e) => {
                error!("Failed to save meme to {}: {}", path.display(), e);
                report(&e);
            }
        }
    }
}

// Rendering.
impl MemeApp {
    fn refresh_preview(&mut self, ctx: &Context) {
        self.preview_stale = false;
        self.preview = self.session.preview().map(|img| {
            trace!("Uploading {}x{} preview texture", img.width(), img.height());
            let size = [img.width() as usize, img.height() as usize];
            let pixels = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
            ctx.load_texture("preview", pixels, TextureOptions::LINEAR)
        });
    }

    fn show_controls(&mut self, ui: &mut Ui) {
        ui.label("Top:");
        ui.text_edit_singleline(&mut self.session.captions.top);
        ui.label("Bottom:");
        ui.text_edit_singleline(&mut self.session.captions.bottom);
        ui.checkbox(&mut self.outline, "Outline");

        if ui.button("Choose image").clicked() {
            self.choose_image();
        }
        if self.session.has_image() {
            ui.weak(image_label(self.session.image_path()));
        }
        if ui.button("Generate").clicked() {
            self.generate_meme();
        }
    }
}

impl App for MemeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                self.show_controls(ui);

                if self.preview_stale {
                    self.refresh_preview(ctx);
                }
                if let Some(ref texture) = self.preview {
                    ui.image((texture.id(), texture.size_vec2()));
                }

                if ui.button("Save").clicked() {
                    self.save_meme();
                }
            });
        });
    }
}


/// Short description of the selected image, for showing under its button.
fn image_label(path: Option<&Path>) -> String {
    match path.and_then(|p| p.file_name()) {
        Some(name) => name.to_string_lossy().into_owned(),
        None => "(image without a file)".to_owned(),
    }
}

/// Tell the user about an error with a message dialog.
fn report(error: &SessionError) {
    dialogs::show_error("Error", &user_message(error));
}

/// Message shown to the user for given error.
fn user_message(error: &SessionError) -> String {
    match *error {
        SessionError::MissingImage => "Choose an image first.".to_owned(),
        SessionError::MissingText => "Enter some text first.".to_owned(),
        SessionError::MissingGeneratedImage => "No memes today: generate one first.".to_owned(),
        ref e => format!("Something went wrong: {}", e),
    }
}
