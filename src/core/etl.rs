use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn into_pipeline(self) -> P {
        self.pipeline
    }

    /// Runs extract, transform and load once, stopping at the first error.
    /// Returns the paths that were written.
    pub async fn run(&mut self) -> Result<Vec<String>> {
        tracing::info!("Starting allowlist migration");

        // Extract
        let players = self.pipeline.extract().await?;
        tracing::info!("Extracted {} players", players.len());

        // Transform
        let result = self.pipeline.transform(players).await?;
        tracing::info!(
            "Prepared {} allowlist entries and {} permissions",
            result.allowlist.len(),
            result.permissions.len()
        );

        // Load
        let written = self.pipeline.load(result).await?;
        tracing::info!("Wrote {}", written.join(", "));

        Ok(written)
    }
}
