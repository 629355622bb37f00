pub mod canonical;
pub mod engine;
pub mod grouper;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{AnagramGroups, Group, Key, Word};
pub use crate::domain::ports::{ConfigProvider, OutputFormat, Pipeline, WordSource};
pub use crate::utils::error::Result;
