use crate::core::PlayerRecord;
use crate::utils::error::{MigrationError, Result};
use serde::Serialize;

/// Parses a legacy allowlist. `path` only labels the error.
pub fn parse_players(path: &str, bytes: &[u8]) -> Result<Vec<PlayerRecord>> {
    serde_json::from_slice(bytes).map_err(|source| MigrationError::Format {
        path: path.to_string(),
        source,
    })
}

/// Two-space indented JSON without a trailing newline. serde_json never
/// HTML-escapes, so `&`, `<` and `>` are written literally.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(value)?)
}
