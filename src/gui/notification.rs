use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use crate::gui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
struct Notification {
    kind: NotificationKind,
    message: String,
    shown_at: Instant,
}

/// A single transient message pinned to the bottom of the window.
///
/// A newer message replaces the current one; each disappears on its own
/// after `duration` or when dismissed.
pub struct Notifications {
    current: Option<Notification>,
    duration: Duration,
}

impl Notifications {
    pub fn new(duration: Duration) -> Self {
        Self { current: None, duration }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Info, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into());
    }

    fn push(&mut self, kind: NotificationKind, message: String) {
        self.current = Some(Notification { kind, message, shown_at: Instant::now() });
    }

    /// The visible message, if it has not expired by `now`.
    pub fn active(&self, now: Instant) -> Option<(NotificationKind, &str)> {
        self.current
            .as_ref()
            .filter(|n| now.duration_since(n.shown_at) < self.duration)
            .map(|n| (n.kind, n.message.as_str()))
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        let now = Instant::now();
        let Some((kind, message)) = self.active(now) else {
            self.current = None;
            return;
        };
        let message = message.to_string();

        let (icon, color) = match kind {
            NotificationKind::Info => ("✔", theme.success(ctx)),
            NotificationKind::Error => ("⚠", theme.error(ctx)),
        };

        let mut dismissed = false;
        egui::Area::new(egui::Id::new("notification"))
            .order(egui::Order::Tooltip)
            .anchor(egui::Align2::CENTER_BOTTOM, egui::Vec2::new(0.0, -24.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_max_width(520.0);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(icon).size(18.0).color(color));
                        ui.label(egui::RichText::new(&message).size(14.0));
                        if ui.small_button("✖").clicked() {
                            dismissed = true;
                        }
                    });
                });
            });

        if dismissed {
            self.dismiss();
        } else if let Some(shown_at) = self.current.as_ref().map(|n| n.shown_at) {
            let remaining = self.duration.saturating_sub(now.duration_since(shown_at));
            ctx.request_repaint_after(remaining);
        }
    }
}
