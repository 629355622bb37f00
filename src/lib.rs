pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::{FileSource, VecSource};

pub use core::canonical::canonicalize;
pub use core::grouper::{group_lines, group_words};
pub use core::report::{render_lines, write_report};
pub use core::{engine::AnagramEngine, engine::RunSummary, pipeline::AnagramPipeline};
pub use domain::model::{AnagramGroups, Group, Key, Word};
pub use domain::ports::OutputFormat;
pub use utils::error::{AnagramError, Result};
