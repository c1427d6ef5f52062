use crate::domain::model::SensorPackage;
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Input file listing sensor packages to process.
///
/// TOML form:
///
/// ```toml
/// [[packages]]
/// workout = "RUN"
/// data = [15000, 1, 75]
/// ```
///
/// JSON form: `{"packages": [{"workout": "RUN", "data": [15000, 1, 75]}]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackagesFile {
    pub packages: Vec<SensorPackage>,
}

impl PackagesFile {
    /// Load from disk, picking the parser by file extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(TrackerError::IoError)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            other => Err(TrackerError::InvalidConfigValueError {
                field: "input".to_string(),
                value: path.display().to_string(),
                reason: format!(
                    "Unsupported packages file extension: {}",
                    other.unwrap_or("none")
                ),
            }),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: Self = toml::from_str(content)?;
        file.validate()?;
        Ok(file)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: Self = serde_json::from_str(content)?;
        file.validate()?;
        Ok(file)
    }

    pub fn into_packages(self) -> Vec<SensorPackage> {
        self.packages
    }
}

impl Validate for PackagesFile {
    fn validate(&self) -> Result<()> {
        for (index, package) in self.packages.iter().enumerate() {
            if package.workout.trim().is_empty() {
                return Err(TrackerError::InvalidConfigValueError {
                    field: format!("packages[{}].workout", index),
                    value: package.workout.clone(),
                    reason: "Workout code cannot be empty".to_string(),
                });
            }
            if package.data.is_empty() {
                return Err(TrackerError::InvalidConfigValueError {
                    field: format!("packages[{}].data", index),
                    value: "[]".to_string(),
                    reason: "Data fields cannot be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
