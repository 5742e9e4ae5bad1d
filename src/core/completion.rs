use crate::core::{AllowlistEntry, Operator, PlayerRecord};
use crate::domain::services::missing_xuid_count;
use crate::utils::error::{MigrationError, Result};

/// Fills in missing XUIDs by asking the operator, one prompt per missing
/// record in input order. No prompt and no help text when nothing is missing.
pub fn complete_allowlist<O: Operator + ?Sized>(
    players: Vec<PlayerRecord>,
    operator: &mut O,
    lookup_url: &str,
) -> Result<Vec<AllowlistEntry>> {
    let missing = missing_xuid_count(&players);
    if missing > 0 {
        tracing::info!("{} of {} players have no XUID", missing, players.len());
        operator.say(&format!(
            "Some players do not have XUIDs. Please visit {} and get XUIDs from their names.",
            lookup_url
        ))?;
    }

    players
        .into_iter()
        .map(|player| player.complete_with(|name| ask_xuid(operator, name)))
        .collect()
}

fn ask_xuid<O: Operator + ?Sized>(operator: &mut O, name: &str) -> Result<String> {
    operator.say(&format!("Enter XUID(DEC) for {}:", name))?;
    match operator.read_line()? {
        Some(xuid) => {
            tracing::debug!("Operator entered XUID {:?} for {}", xuid, name);
            Ok(xuid)
        }
        None => Err(MigrationError::InputExhausted {
            player: name.to_string(),
        }),
    }
}
