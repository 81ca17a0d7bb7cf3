use crate::app::ModCheckerApp;
use eframe::egui;

/// Directory selection and detection summary.
pub fn show(ui: &mut egui::Ui, app: &mut ModCheckerApp) {
    ui.horizontal(|ui| {
        ui.label("Project Zomboid mods directory:");
        if ui.button("Select Directory").clicked() {
            if let Some(path) = rfd::FileDialog::new().pick_folder() {
                app.scan(path);
            }
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.strong(format!("Number of Mods: {}", app.session.mod_count()));
        });
    });

    ui.add_space(4.0);
    ui.style_mut().override_text_style = Some(egui::TextStyle::Small);

    ui.label(format!(
        "Steam installation directory: {}",
        display_path(app.steam_dir.as_deref())
    ));
    ui.label(format!(
        "Project Zomboid directory: {}",
        display_path(app.game_dir.as_deref())
    ));
    ui.label(format!(
        "Selected directory: {}",
        display_path(app.session.scanned_dir())
    ));
}

fn display_path(path: Option<&std::path::Path>) -> String {
    path.map_or_else(|| "Not found".to_string(), |p| p.display().to_string())
}
