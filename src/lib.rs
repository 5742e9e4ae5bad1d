pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{console::Console, etl::EtlEngine, pipeline::MigrationPipeline};
pub use utils::error::{MigrationError, Result};
