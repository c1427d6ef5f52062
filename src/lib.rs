pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, packages_file::PackagesFile, CliConfig};
pub use core::{engine::TrackerEngine, pipeline::SummaryPipeline};
pub use utils::error::{Result, TrackerError};
