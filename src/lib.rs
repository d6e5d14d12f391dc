//! chart-motion: headless series projection and value animation for dashboard charts.
//!
//! [`core`] maps numeric series onto a drawing surface (lines, areas, bars,
//! rings) as pure functions. [`animation`] interpolates displayed values over
//! a fixed duration, driven by host-owned timers.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartMotionConfig, ProjectionConfig, SeriesProjector};
pub use error::{ChartError, ChartResult};
