pub mod dispatch;
pub mod engine;
pub mod metrics;
pub mod pipeline;
pub mod reporter;

pub use crate::domain::model::{
    SensorPackage, SummaryBatch, WorkoutKind, WorkoutReport, WorkoutSample,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
