mod config;
mod projector;

pub use config::{ChartMotionConfig, ProjectionConfig};
pub use projector::SeriesProjector;
