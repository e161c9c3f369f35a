pub mod core;
pub mod export;
pub mod gui;
pub mod loader;

pub use crate::core::{
    ExtractorConfig,
    ExtractorError,
};
