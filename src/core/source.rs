use crate::core::Storage;
use crate::utils::error::{MigrationError, Result};

/// Returns the first candidate that exists in storage.
pub async fn resolve_source<S: Storage>(storage: &S, candidates: &[&str]) -> Result<String> {
    for candidate in candidates {
        if storage.exists(candidate).await {
            tracing::debug!("Resolved legacy allowlist: {}", candidate);
            return Ok(candidate.to_string());
        }
        tracing::debug!("{} not present", candidate);
    }

    Err(MigrationError::Configuration {
        message: format!("no source file found (looked for {})", candidates.join(", ")),
    })
}
