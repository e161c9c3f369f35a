use eframe::egui;
use parascan::{
    gui::ParascanApp,
    ExtractorConfig,
};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Extractor: paragraphs with keywords")
            .with_inner_size([1060.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "parascan",
        options,
        Box::new(|cc| Ok(Box::new(ParascanApp::new(cc, ExtractorConfig::default())))),
    )
}
