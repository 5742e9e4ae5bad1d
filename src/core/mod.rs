pub mod completion;
pub mod console;
pub mod etl;
pub mod format;
pub mod pipeline;
pub mod source;

pub use crate::domain::model::{
    AllowlistEntry, MigrationResult, PermissionLevel, PermissionRecord, PlayerRecord,
};
pub use crate::domain::ports::{ConfigProvider, Operator, Pipeline, Storage};
pub use crate::utils::error::Result;
