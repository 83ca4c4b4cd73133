//! Charts module - Trend chart rendering

mod surface;
mod trend;

pub use surface::{DrawSurface, ImageSurface, PainterSurface, Rgb};
pub use trend::{TrendChart, CAMPAIGN_TRENDS, CHART_HEIGHT, CHART_WIDTH};
