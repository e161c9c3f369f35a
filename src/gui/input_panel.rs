use eframe::egui;

use crate::core::Shell;

pub enum InputAction {
    ChoosePdfs,
    Process,
}

pub fn input_panel(ui: &mut egui::Ui, shell: &mut Shell) -> Option<InputAction> {
    let mut action = None;
    let enabled = shell.can_submit();
    let field_width = ui.available_width().min(700.0);

    ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(&mut shell.url_input)
            .hint_text("Paste a URL (optional)")
            .desired_width(field_width),
    );

    ui.horizontal(|ui| {
        if ui.add_enabled(enabled, egui::Button::new("Choose PDF(s)")).clicked() {
            action = Some(InputAction::ChoosePdfs);
        }
        ui.label(shell.picked_files_display());
    });

    let keywords = ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(&mut shell.keyword_input)
            .hint_text("Keywords (separate with commas or spaces)")
            .desired_width(field_width),
    );
    let submitted_with_enter =
        keywords.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter));

    if ui.add_enabled(enabled, egui::Button::new("Process")).clicked() || submitted_with_enter {
        action = Some(InputAction::Process);
    }

    action
}
