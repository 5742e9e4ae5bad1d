use crate::domain::model::{AllowlistEntry, PermissionLevel, PermissionRecord, PlayerRecord};

pub fn missing_xuid_count(players: &[PlayerRecord]) -> usize {
    players.iter().filter(|p| p.is_missing_xuid()).count()
}

/// Grants every migrated player operator permission, in allowlist order.
pub fn derive_permissions(allowlist: &[AllowlistEntry]) -> Vec<PermissionRecord> {
    allowlist
        .iter()
        .map(|entry| PermissionRecord {
            permission: PermissionLevel::Operator,
            xuid: entry.xuid.clone(),
        })
        .collect()
}
