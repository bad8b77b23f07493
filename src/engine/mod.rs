pub mod config;
pub mod report;

pub use config::{Config, LexiconConfig, UiConfig};
pub use report::{format_report, summarize};
