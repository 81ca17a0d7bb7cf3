mod app;
mod ui;

use eframe::egui;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("starting pzmods-gui {}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 620.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Zomboid Mod Checker",
        options,
        Box::new(|cc| {
            let mut style = (*cc.egui_ctx.style()).clone();

            style.spacing.item_spacing = egui::vec2(8.0, 6.0);
            style.spacing.button_padding = egui::vec2(12.0, 6.0);

            let visuals = &mut style.visuals;
            visuals.window_fill = egui::Color32::from_rgb(33, 33, 33);
            visuals.panel_fill = egui::Color32::from_rgb(33, 33, 33);
            visuals.faint_bg_color = egui::Color32::from_rgb(40, 40, 40);
            visuals.extreme_bg_color = egui::Color32::from_rgb(24, 24, 24);
            visuals.hyperlink_color = egui::Color32::from_rgb(120, 170, 255);
            visuals.widgets.noninteractive.fg_stroke.color = egui::Color32::from_rgb(220, 220, 225);

            cc.egui_ctx.set_style(style);

            Ok(Box::new(app::ModCheckerApp::new(cc)))
        }),
    )
}
