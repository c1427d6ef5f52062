use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct TrackerEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TrackerEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Reading sensor packages...");
        let packages = self.pipeline.extract().await?;
        tracing::info!("Read {} packages", packages.len());

        tracing::info!("Computing workout statistics...");
        let batch = self.pipeline.transform(packages).await?;
        tracing::info!(
            "Computed {} reports ({} packages skipped)",
            batch.reports.len(),
            batch.skipped.len()
        );

        let destination = self.pipeline.load(batch).await?;
        tracing::info!("Summary written to: {}", destination);

        Ok(destination)
    }
}
