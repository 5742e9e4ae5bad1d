use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Malformed allowlist {path}: {source}")]
    Format {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Input ended before an XUID was entered for {player}")]
    InputExhausted { player: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    Operator,
    System,
}

impl MigrationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MigrationError::Configuration { .. } | MigrationError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            MigrationError::Format { .. } | MigrationError::Serialization(_) => {
                ErrorCategory::Data
            }
            MigrationError::InputExhausted { .. } => ErrorCategory::Operator,
            MigrationError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MigrationError::Configuration { .. } => {
                "Run the tool from the server directory that contains whitelist.json or allowlist.json"
            }
            MigrationError::InvalidConfigValue { .. } => "Check the command line options",
            MigrationError::Format { .. } => {
                "Fix the JSON syntax of the legacy file; it has not been deleted"
            }
            MigrationError::InputExhausted { .. } => {
                "Restore the legacy file from a backup and rerun interactively"
            }
            MigrationError::Io(_) => "Check file permissions and free disk space",
            MigrationError::Serialization(_) => "Report this as a bug",
        }
    }
}

pub type Result<T> = std::result::Result<T, MigrationError>;
