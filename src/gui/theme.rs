use eframe::egui::{
    self,
    Color32,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::paper()
    }
}

impl Theme {
    pub fn paper() -> Self {
        Theme { dark: ThemeDetails::ink(), light: ThemeDetails::paper() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    /// Background behind keyword hits in the result pane.
    pub fn highlight(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).highlight
    }

    pub fn heading(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).accent
    }

    pub fn rule(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).muted
    }

    pub fn error(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn success(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    panel: Color32,
    foreground: Color32,
    muted: Color32,
    accent: Color32,
    highlight: Color32,
    red: Color32,
    green: Color32,
}

impl ThemeDetails {
    fn paper() -> Self {
        Self {
            background: Color32::from_rgb(250, 248, 242),
            panel: Color32::from_rgb(240, 237, 228),
            foreground: Color32::from_rgb(40, 40, 46),
            muted: Color32::from_rgb(150, 146, 138),
            accent: Color32::from_rgb(46, 94, 170),
            highlight: Color32::from_rgb(255, 226, 122),
            red: Color32::from_rgb(196, 64, 64),
            green: Color32::from_rgb(56, 150, 90),
        }
    }

    fn ink() -> Self {
        Self {
            background: Color32::from_rgb(28, 30, 38),
            panel: Color32::from_rgb(34, 36, 46),
            foreground: Color32::from_rgb(220, 220, 214),
            muted: Color32::from_rgb(98, 104, 128),
            accent: Color32::from_rgb(120, 170, 240),
            highlight: Color32::from_rgb(120, 96, 20),
            red: Color32::from_rgb(255, 110, 110),
            green: Color32::from_rgb(96, 206, 130),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            override_text_color: Some(theme.foreground),
            hyperlink_color: theme.accent,
            extreme_bg_color: theme.background,
            error_fg_color: theme.red,
            window_fill: theme.background,
            window_stroke: Stroke { color: theme.muted, ..default.window_stroke },
            panel_fill: theme.panel,
            ..default
        },
    );

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
        style.interaction.show_tooltips_only_when_still = false;
    });
}
