use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// A player as read from a legacy allowlist. `xuid` may be missing or null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    #[serde(default)]
    pub xuid: Option<String>,
    #[serde(rename = "ignoresPlayerLimit", default)]
    pub ignores_player_limit: bool,
}

impl PlayerRecord {
    pub fn is_missing_xuid(&self) -> bool {
        self.xuid.is_none()
    }

    /// Completes the record, asking `ask` for an identifier only when one is
    /// missing.
    pub fn complete_with<F>(self, ask: F) -> Result<AllowlistEntry>
    where
        F: FnOnce(&str) -> Result<String>,
    {
        let xuid = match self.xuid {
            Some(xuid) => xuid,
            None => ask(&self.name)?,
        };
        Ok(AllowlistEntry {
            name: self.name,
            xuid,
            ignores_player_limit: self.ignores_player_limit,
        })
    }
}

/// A player in the new allowlist format. The identifier is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowlistEntry {
    pub name: String,
    pub xuid: String,
    #[serde(rename = "ignoresPlayerLimit")]
    pub ignores_player_limit: bool,
}

impl From<AllowlistEntry> for PlayerRecord {
    fn from(entry: AllowlistEntry) -> Self {
        Self {
            name: entry.name,
            xuid: Some(entry.xuid),
            ignores_player_limit: entry.ignores_player_limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
    Visitor,
    Member,
    Operator,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRecord {
    pub permission: PermissionLevel,
    pub xuid: String,
}

#[derive(Debug, Clone)]
pub struct MigrationResult {
    pub allowlist: Vec<AllowlistEntry>,
    pub permissions: Vec<PermissionRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_record_tolerates_missing_or_null_xuid() {
        let players: Vec<PlayerRecord> = serde_json::from_str(
            r#"[
                {"name": "Alice", "xuid": "123", "ignoresPlayerLimit": false},
                {"name": "Bob", "xuid": null, "ignoresPlayerLimit": true},
                {"name": "Carol"}
            ]"#,
        )
        .unwrap();

        assert_eq!(players.len(), 3);
        assert_eq!(players[0].xuid.as_deref(), Some("123"));
        assert!(players[1].is_missing_xuid());
        assert!(players[1].ignores_player_limit);
        assert!(players[2].is_missing_xuid());
        assert!(!players[2].ignores_player_limit);
    }

    #[test]
    fn test_allowlist_entry_field_order() {
        let entry = AllowlistEntry {
            name: "Alice".to_string(),
            xuid: "123".to_string(),
            ignores_player_limit: false,
        };
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"name":"Alice","xuid":"123","ignoresPlayerLimit":false}"#
        );
    }

    #[test]
    fn test_permission_level_is_lowercase() {
        for (level, text) in [
            (PermissionLevel::Visitor, "\"visitor\""),
            (PermissionLevel::Member, "\"member\""),
            (PermissionLevel::Operator, "\"operator\""),
        ] {
            assert_eq!(serde_json::to_string(&level).unwrap(), text);
        }

        let record = PermissionRecord {
            permission: PermissionLevel::Operator,
            xuid: "456".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"permission":"operator","xuid":"456"}"#
        );
    }

    #[test]
    fn test_complete_with_only_asks_when_missing() {
        let player = PlayerRecord {
            name: "Alice".to_string(),
            xuid: Some("123".to_string()),
            ignores_player_limit: false,
        };
        let entry = player
            .complete_with(|_| panic!("should not ask for Alice"))
            .unwrap();
        assert_eq!(entry.xuid, "123");

        let player = PlayerRecord {
            name: "Bob".to_string(),
            xuid: None,
            ignores_player_limit: true,
        };
        let entry = player
            .complete_with(|name| {
                assert_eq!(name, "Bob");
                Ok("456".to_string())
            })
            .unwrap();
        assert_eq!(entry.xuid, "456");
        assert!(entry.ignores_player_limit);
    }
}
