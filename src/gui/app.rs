use std::time::Duration;

use eframe::egui;
use egui_extras::{
    Size,
    StripBuilder,
};
use rfd::FileDialog;
use tracing::{
    error,
    info,
};

use super::{
    input_panel::{
        input_panel,
        InputAction,
    },
    notification::Notifications,
    progress_overlay::ProgressOverlay,
    result_view::result_view,
    source_filter::source_filter,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::core::{
    tasks::{
        TaskManager,
        TaskResult,
    },
    ExtractorConfig,
    Shell,
    ShellState,
};

pub struct ParascanApp {
    shell: Shell,
    task_manager: TaskManager,
    notifications: Notifications,
    theme: Theme,
    exporting: bool,
}

impl ParascanApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ExtractorConfig) -> Self {
        let theme = Theme::default();
        set_theme(&cc.egui_ctx, &theme);

        Self {
            notifications: Notifications::new(config.notification_duration),
            shell: Shell::new(config),
            task_manager: TaskManager::new(),
            theme,
            exporting: false,
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::LoadProgress(progress) => self.shell.report_progress(progress),
            TaskResult::SourcesLoaded(result) => {
                if let Err(message) = self.shell.finish_loading(result) {
                    self.notifications.error(message);
                }
            }
            TaskResult::Exported(result) => {
                self.exporting = false;
                match result {
                    Ok(path) => self.notifications.info(format!("Saved: {}", path.display())),
                    Err(message) => {
                        error!("Export failed: {message}");
                        self.notifications.error(message);
                    }
                }
            }
        }
    }

    fn process(&mut self) {
        match self.shell.submit() {
            Ok(request) => {
                self.task_manager.load_sources(request, self.shell.config().clone());
            }
            Err(e) => self.notifications.error(e.to_string()),
        }
    }

    fn choose_pdfs(&mut self) {
        let picked = FileDialog::new().add_filter("PDF documents", &["pdf"]).pick_files();
        match picked {
            Some(files) if !files.is_empty() => {
                info!("{} PDF(s) selected", files.len());
                self.shell.set_picked_files(files);
            }
            _ => self.shell.set_picked_files(Vec::new()),
        }
    }

    fn save_result(&mut self) {
        if self.exporting {
            return;
        }
        let Some(path) = FileDialog::new()
            .add_filter("Word document", &["docx"])
            .set_file_name("result.docx")
            .save_file()
        else {
            return;
        };

        self.exporting = true;
        self.task_manager.export(self.shell.output().to_string(), path);
    }

    fn busy(&self) -> bool {
        self.shell.state() == ShellState::Loading || self.exporting
    }
}

impl eframe::App for ParascanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        if let Some(action) = TopBar::show(ctx, self.busy()) {
            match action {
                TopBarAction::ChoosePdfs => self.choose_pdfs(),
                TopBarAction::SaveResult => self.save_result(),
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Extractor: find paragraphs containing keywords");
            ui.add_space(8.0);

            match input_panel(ui, &mut self.shell) {
                Some(InputAction::ChoosePdfs) => self.choose_pdfs(),
                Some(InputAction::Process) => self.process(),
                None => {}
            }

            ui.separator();

            let label_max_chars = self.shell.config().source_label_max_chars;
            let mut toggled = None;
            let mut save_clicked = false;

            StripBuilder::new(ui)
                .size(Size::remainder())
                .size(Size::exact(32.0))
                .vertical(|mut strip| {
                    strip.strip(|builder| {
                        builder.size(Size::exact(300.0)).size(Size::remainder()).horizontal(
                            |mut strip| {
                                strip.cell(|ui| {
                                    egui::Frame::group(ui.style()).show(ui, |ui| {
                                        toggled =
                                            source_filter(ui, self.shell.session(), label_max_chars);
                                    });
                                });
                                strip.cell(|ui| {
                                    result_view(ui, &self.theme, self.shell.output());
                                });
                            },
                        );
                    });
                    strip.cell(|ui| {
                        save_clicked = ui
                            .add_enabled(!self.busy(), egui::Button::new("💾 Save result"))
                            .clicked();
                    });
                });

            if let Some((source, included)) = toggled {
                self.shell.set_included(&source, included);
            }
            if save_clicked {
                self.save_result();
            }
        });

        if let Some(progress) = self.shell.progress() {
            ProgressOverlay::show(ctx, &self.theme, progress);
        }
        self.notifications.show(ctx, &self.theme);

        if self.busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
