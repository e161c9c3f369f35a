use eframe::egui;

use crate::core::{
    Session,
    Source,
};

/// Shortens `text` to `max_chars`, ending in `...` when cut.
pub fn shorten_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// One checkbox per loaded source. Returns the toggle the user just made, if any.
pub fn source_filter(
    ui: &mut egui::Ui,
    session: &Session,
    label_max_chars: usize,
) -> Option<(Source, bool)> {
    let mut toggled = None;

    ui.strong("Filter by source:");
    ui.add_space(4.0);

    if session.is_empty() {
        ui.weak("No sources loaded");
        return None;
    }

    egui::ScrollArea::vertical().id_salt("source_filter").show(ui, |ui| {
        for entry in session.entries() {
            let mut included = entry.included;
            let label = shorten_label(&entry.source.label(), label_max_chars);
            let response = ui.checkbox(&mut included, label).on_hover_text(entry.source.label());
            if response.changed() {
                toggled = Some((entry.source.clone(), included));
            }
        }
    });

    toggled
}
