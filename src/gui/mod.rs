pub mod app;
mod input_panel;
mod notification;
mod progress_overlay;
mod result_view;
mod source_filter;
mod theme;
mod top_bar;

pub use app::ParascanApp;
