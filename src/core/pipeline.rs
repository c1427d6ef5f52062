use crate::config::packages_file::PackagesFile;
use crate::core::dispatch::{read_package, RUNNING_CODE, SWIMMING_CODE, WALKING_CODE};
use crate::core::reporter::{render_csv, render_summary};
use crate::core::{ConfigProvider, Pipeline, SensorPackage, Storage, SummaryBatch};
use crate::utils::error::{Result, TrackerError};

/// The reference batch of three packages, one per workout type. Used
/// whenever no input file is configured.
pub fn demo_batch() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new(SWIMMING_CODE, vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new(RUNNING_CODE, vec![15000.0, 1.0, 75.0]),
        SensorPackage::new(WALKING_CODE, vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

pub struct SummaryPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SummaryPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SummaryPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<SensorPackage>> {
        match self.config.input_path() {
            Some(path) => {
                tracing::debug!("Reading packages from: {}", path);
                Ok(PackagesFile::from_file(path)?.into_packages())
            }
            None => {
                tracing::debug!("No input file configured, using the demo batch");
                Ok(demo_batch())
            }
        }
    }

    async fn transform(&self, packages: Vec<SensorPackage>) -> Result<SummaryBatch> {
        let mut reports = Vec::new();
        let mut lines = Vec::new();
        let mut skipped = Vec::new();

        for package in packages {
            match read_package(&package) {
                Ok(sample) => {
                    let report = sample.report();
                    lines.push(render_summary(&report));
                    reports.push(report);
                }
                // An unrecognized code only loses that one package.
                Err(TrackerError::UnknownWorkoutType { code }) => {
                    tracing::warn!("Skipping package with unknown workout type: {}", code);
                    skipped.push(code);
                }
                Err(e) => return Err(e),
            }
        }

        let csv_output = render_csv(&reports);

        Ok(SummaryBatch {
            reports,
            lines,
            csv_output,
            skipped,
        })
    }

    async fn load(&self, batch: SummaryBatch) -> Result<String> {
        for line in &batch.lines {
            println!("{}", line);
        }

        let Some(output_path) = self.config.output_path() else {
            return Ok("stdout".to_string());
        };

        tracing::debug!("Writing summary files to: {}", output_path);

        let summary = batch.lines.join("\n") + "\n";
        self.storage
            .write_file("summary.txt", summary.as_bytes())
            .await?;
        self.storage
            .write_file("reports.csv", batch.csv_output.as_bytes())
            .await?;

        let json = serde_json::to_string_pretty(&batch.reports)?;
        self.storage.write_file("reports.json", json.as_bytes()).await?;

        Ok(format!("{}/summary.txt", output_path))
    }
}
