pub mod config;
pub mod errors;
pub mod http;
pub mod keywords;
pub mod markup;
pub mod models;
pub mod pipeline;
pub mod session;
pub mod shell;
pub mod tasks;

pub use config::ExtractorConfig;
pub use errors::{
    ErrorKind,
    ExtractorError,
};
pub use keywords::{
    parse_keywords,
    KeywordMatcher,
};
pub use models::{
    LoadRequest,
    LoadedSource,
    Match,
    Progress,
    Source,
};
pub use session::Session;
pub use shell::{
    Shell,
    ShellState,
};
