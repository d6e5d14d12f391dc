pub mod arc;
pub mod area_series;
pub mod bar_series;
pub mod format;
pub mod line_series;
pub mod path;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod types;

pub use arc::{
    ArcGeometry, ArcSegment, RingSegments, project_arc, project_arc_at, project_ring,
    project_ring_from_amounts,
};
pub use area_series::{AreaGeometry, project_area};
pub use bar_series::{BarRect, project_bars};
pub use format::{AmountFormat, format_amount, format_compact, format_percent};
pub use line_series::{project_line, project_with_mapping};
pub use path::{Path, PathCommand, line_path, smooth_path};
pub use primitives::{clamp_percent, clamp_unit};
pub use scale::{PlotMapping, ValueRange, scale_range};
pub use series::{Series, SeriesPoint};
pub use types::{PlotPoint, Viewport};
