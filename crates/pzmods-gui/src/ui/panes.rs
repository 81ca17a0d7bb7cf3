use crate::app::ModCheckerApp;
use eframe::egui;
use pzmods::workshop_url;

/// The three content panes: workshop ids, mod names, and clickable
/// per-mod workshop links.
pub fn show(ui: &mut egui::Ui, app: &mut ModCheckerApp) {
    ui.columns(2, |columns| {
        left_column(&mut columns[0], app);
        links_column(&mut columns[1], app);
    });
}

fn left_column(ui: &mut egui::Ui, app: &ModCheckerApp) {
    let half_height = (ui.available_height() - 60.0).max(80.0) / 2.0;

    ui.label("Workshop Items:");
    read_only_pane(ui, "workshop_items", &app.session.collection().workshop_items_line(), half_height);

    ui.add_space(8.0);
    ui.label("Mods:");
    read_only_pane(ui, "mods", &app.session.collection().mod_names_line(), half_height);
}

fn links_column(ui: &mut egui::Ui, app: &ModCheckerApp) {
    ui.label("Mod Names and Workshop Items:");
    egui::ScrollArea::vertical()
        .id_salt("mod_links")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (name, id) in app.session.collection().display_items() {
                ui.hyperlink_to(format!("{} - {}", name, id), workshop_url(id));
            }
        });
}

/// A selectable but not editable text area.
fn read_only_pane(ui: &mut egui::Ui, id: &str, content: &str, height: f32) {
    egui::ScrollArea::vertical()
        .id_salt(id)
        .max_height(height)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let mut text = content;
            ui.add_sized(
                [ui.available_width(), height],
                egui::TextEdit::multiline(&mut text),
            );
        });
}
