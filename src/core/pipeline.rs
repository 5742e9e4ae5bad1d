use crate::core::completion::complete_allowlist;
use crate::core::format::{parse_players, to_pretty_json};
use crate::core::source::resolve_source;
use crate::core::{ConfigProvider, MigrationResult, Operator, Pipeline, PlayerRecord, Storage};
use crate::domain::services::derive_permissions;
use crate::utils::error::Result;

/// Migrates a legacy allowlist into `allowlist.json` and `permissions.json`.
///
/// * extract: resolve the legacy file, parse it, then delete it
/// * transform: ask the operator for missing XUIDs, derive operator permissions
/// * load: write the allowlist, then the permissions
pub struct MigrationPipeline<S: Storage, C: ConfigProvider, O: Operator> {
    storage: S,
    config: C,
    operator: O,
}

impl<S: Storage, C: ConfigProvider, O: Operator> MigrationPipeline<S, C, O> {
    pub fn new(storage: S, config: C, operator: O) -> Self {
        Self {
            storage,
            config,
            operator,
        }
    }

    pub fn into_operator(self) -> O {
        self.operator
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, O: Operator> Pipeline for MigrationPipeline<S, C, O> {
    async fn extract(&mut self) -> Result<Vec<PlayerRecord>> {
        let source = resolve_source(&self.storage, self.config.source_candidates()).await?;
        self.operator.say(&format!("Found {}", source))?;

        let bytes = self.storage.read_file(&source).await?;
        let players = parse_players(&source, &bytes)?;
        tracing::debug!("Parsed {} players from {}", players.len(), source);

        // 解析成功後才刪除舊檔
        self.storage.remove_file(&source).await?;
        tracing::info!("Consumed legacy file {}", source);

        Ok(players)
    }

    async fn transform(&mut self, players: Vec<PlayerRecord>) -> Result<MigrationResult> {
        let allowlist = complete_allowlist(players, &mut self.operator, self.config.lookup_url())?;
        let permissions = derive_permissions(&allowlist);

        Ok(MigrationResult {
            allowlist,
            permissions,
        })
    }

    async fn load(&mut self, result: MigrationResult) -> Result<Vec<String>> {
        let allowlist_path = self.config.allowlist_output().to_string();
        let permissions_path = self.config.permissions_output().to_string();

        let data = to_pretty_json(&result.allowlist)?;
        tracing::debug!("Writing {} ({} bytes)", allowlist_path, data.len());
        self.storage.write_file(&allowlist_path, &data).await?;
        self.operator.say(&format!("Exported {}", allowlist_path))?;

        let data = to_pretty_json(&result.permissions)?;
        tracing::debug!("Writing {} ({} bytes)", permissions_path, data.len());
        self.storage.write_file(&permissions_path, &data).await?;
        self.operator.say(&format!("Exported {}", permissions_path))?;

        self.operator.say("Done!")?;
        Ok(vec![allowlist_path, permissions_path])
    }
}
