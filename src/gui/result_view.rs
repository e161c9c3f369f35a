use eframe::egui::{
    self,
    text::LayoutJob,
    FontId,
    TextFormat,
};

use crate::{
    core::markup::{
        self,
        Line,
        SpanStyle,
    },
    gui::theme::Theme,
};

/// Scrollable pane rendering the result blob's headings, highlights and rules.
pub fn result_view(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        egui::ScrollArea::vertical()
            .id_salt("result_view")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if text.is_empty() {
                    ui.weak("No matching paragraphs");
                    return;
                }

                for line in markup::parse(text) {
                    match line {
                        Line::Separator => {
                            ui.add_space(4.0);
                            rule(ui, theme);
                        }
                        Line::Text(spans) if spans.is_empty() => {
                            ui.add_space(6.0);
                        }
                        Line::Text(spans) => {
                            let job = layout_spans(ui, theme, &spans);
                            ui.add(egui::Label::new(job).selectable(true));
                        }
                    }
                }
            });
    });
}

fn rule(ui: &mut egui::Ui, theme: &Theme) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), 8.0), egui::Sense::hover());
    ui.painter().hline(
        rect.x_range(),
        rect.center().y,
        egui::Stroke::new(1.0, theme.rule(ui.ctx())),
    );
}

fn layout_spans(ui: &egui::Ui, theme: &Theme, spans: &[markup::Span]) -> LayoutJob {
    let ctx = ui.ctx();
    let body = FontId::proportional(14.0);
    let text_color = ui.visuals().text_color();

    let mut job = LayoutJob::default();
    job.wrap.max_width = ui.available_width();

    for span in spans {
        let format = match span.style {
            SpanStyle::Plain => TextFormat::simple(body.clone(), text_color),
            SpanStyle::Emphasis => TextFormat {
                font_id: body.clone(),
                color: ui.visuals().strong_text_color(),
                background: theme.highlight(ctx),
                ..Default::default()
            },
            SpanStyle::Heading => TextFormat::simple(FontId::proportional(15.0), theme.heading(ctx)),
        };
        job.append(&span.text, 0.0, format);
    }

    job
}
