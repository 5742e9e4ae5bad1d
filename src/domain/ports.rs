use crate::domain::model::{MigrationResult, PlayerRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove_file(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Legacy file names, in lookup priority order.
    fn source_candidates(&self) -> &[&str];
    fn allowlist_output(&self) -> &str;
    fn permissions_output(&self) -> &str;
    fn lookup_url(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send {
    async fn extract(&mut self) -> Result<Vec<PlayerRecord>>;
    async fn transform(&mut self, players: Vec<PlayerRecord>) -> Result<MigrationResult>;
    async fn load(&mut self, result: MigrationResult) -> Result<Vec<String>>;
}

/// Line-oriented channel to the operator running the migration.
pub trait Operator: Send {
    fn say(&mut self, line: &str) -> Result<()>;

    /// Reads one line. `None` once input is closed.
    fn read_line(&mut self) -> Result<Option<String>>;
}
