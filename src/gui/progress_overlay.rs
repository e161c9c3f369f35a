use eframe::egui;

use crate::{
    core::Progress,
    gui::theme::Theme,
};

/// Dims the window and shows loader progress while sources are being read.
pub struct ProgressOverlay;

impl ProgressOverlay {
    pub fn show(ctx: &egui::Context, theme: &Theme, progress: &Progress) {
        egui::Area::new(egui::Id::new("progress_overlay_backdrop"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::Pos2::new(0.0, 0.0))
            .show(ctx, |ui| {
                let screen_size = ui.ctx().screen_rect().size();
                ui.allocate_space(screen_size);
                ui.painter().rect_filled(
                    ui.ctx().screen_rect(),
                    0.0,
                    egui::Color32::from_black_alpha(120),
                );
            });

        egui::Window::new("progress_box")
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .fixed_size(egui::Vec2::new(360.0, 90.0))
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::new(0.0, 0.0))
            .show(ctx, |ui| {
                ui.style_mut().visuals.window_stroke =
                    egui::Stroke::new(2.0, theme.heading(ui.ctx()));

                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label(&progress.message);
                });
                ui.add_space(8.0);
                ui.add(egui::ProgressBar::new(progress.fraction).show_percentage());
            });
    }
}
