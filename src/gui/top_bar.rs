use eframe::egui::{
    self,
    containers,
};

pub enum TopBarAction {
    ChoosePdfs,
    SaveResult,
}

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, busy: bool) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.add_enabled(!busy, egui::Button::new("Choose PDFs…")).clicked() {
                        action = Some(TopBarAction::ChoosePdfs);
                        ui.close();
                    }
                    if ui.add_enabled(!busy, egui::Button::new("Save Result…")).clicked() {
                        action = Some(TopBarAction::SaveResult);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        action
    }
}
