use std::path::PathBuf;

use eframe::egui;
use pzmods::{Command, Outcome, Session};

/// Top-level application state.
///
/// All mod data lives in the [`Session`]; the app only keeps the detected
/// directories for display and the current status/error line.
pub struct ModCheckerApp {
    pub session: Session,
    pub steam_dir: Option<PathBuf>,
    pub game_dir: Option<PathBuf>,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
}

impl ModCheckerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            session: Session::new(),
            steam_dir: None,
            game_dir: None,
            error_message: None,
            status_message: None,
        };

        // Auto-detect the workshop content directory on startup and scan it
        // right away if found. When detection fails the user picks a
        // directory by hand.
        let location = pzmods::locate();
        app.steam_dir = location.steam_dir;
        app.game_dir = location.game_dir;
        if let Some(workshop_dir) = location.workshop_dir {
            app.scan(workshop_dir);
        }

        app
    }

    pub fn set_error(&mut self, msg: String) {
        self.error_message = Some(msg);
        self.status_message = None;
    }

    pub fn set_status(&mut self, msg: String) {
        self.status_message = Some(msg);
        self.error_message = None;
    }

    /// Rebuild the mod collection from a workshop content directory.
    pub fn scan(&mut self, dir: PathBuf) {
        match self.session.dispatch(Command::Scan(dir.clone())) {
            Ok(Outcome::Scanned(count)) => {
                self.set_status(format!("Found {} mods in {}", count, dir.display()));
            }
            Ok(_) => {}
            Err(e) => self.set_error(format!("Cannot scan {}: {}", dir.display(), e)),
        }
    }

    /// Write the four export artifacts into `Documents/Zomboid-ModInfo`.
    pub fn save_to_files(&mut self) {
        match self.export_to_documents() {
            Ok(export_dir) => {
                self.set_status(format!("Data saved to {}", export_dir.display()));
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Info)
                    .set_title("Success")
                    .set_description(format!(
                        "Data successfully saved to {}!",
                        export_dir.display()
                    ))
                    .show();
            }
            Err(e) => self.set_error(format!("Save failed: {}", e)),
        }
    }

    fn export_to_documents(&mut self) -> anyhow::Result<PathBuf> {
        let export_dir = pzmods::default_export_dir()
            .ok_or_else(|| anyhow::anyhow!("no documents directory found for this user"))?;
        self.session
            .dispatch(Command::Export(export_dir.clone()))?;
        Ok(export_dir)
    }

    pub fn clear(&mut self) {
        match self.session.dispatch(Command::Clear) {
            Ok(Outcome::Cleared) => self.set_status("Cleared".to_string()),
            Ok(_) => {}
            Err(e) => self.set_error(format!("Clear failed: {}", e)),
        }
    }
}

impl eframe::App for ModCheckerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(egui::Color32::from_rgb(40, 40, 40))
                    .inner_margin(egui::Margin::symmetric(16.0, 10.0)),
            )
            .show(ctx, |ui| crate::ui::header::show(ui, self));

        egui::TopBottomPanel::bottom("actions")
            .show_separator_line(false)
            .frame(
                egui::Frame::none()
                    .fill(egui::Color32::from_rgb(40, 40, 40))
                    .inner_margin(egui::Margin::symmetric(16.0, 8.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Save to Files").clicked() {
                        self.save_to_files();
                    }
                    if ui.button("Clear").clicked() {
                        self.clear();
                    }
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.style_mut().override_text_style = Some(egui::TextStyle::Small);
                        if let Some(err) = &self.error_message {
                            ui.colored_label(egui::Color32::RED, format!("Error: {}", err));
                        } else if let Some(status) = &self.status_message {
                            ui.colored_label(egui::Color32::from_rgb(100, 200, 100), status);
                        } else {
                            ui.label("Ready");
                        }
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| crate::ui::panes::show(ui, self));
    }
}
