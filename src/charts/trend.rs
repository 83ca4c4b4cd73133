//! Trend Chart Renderer
//! Plots a fixed series as a polyline with circular point markers,
//! scaled so the series maximum touches the top of the surface.

use crate::charts::surface::{DrawSurface, Rgb};

/// Stroke width of the trend line in pixels.
const LINE_WIDTH: f32 = 2.0;
/// Radius of the circular point markers in pixels.
const MARKER_RADIUS: f32 = 4.0;

/// Weekly campaign counts shown on the dashboard. Fixed for the
/// lifetime of the process; not derived from any external source.
pub const CAMPAIGN_TRENDS: [f64; 7] = [10.0, 15.0, 8.0, 20.0, 18.0, 25.0, 22.0];

/// Logical size of the trend chart canvas.
pub const CHART_WIDTH: f32 = 300.0;
pub const CHART_HEIGHT: f32 = 150.0;

pub struct TrendChart;

impl TrendChart {
    /// Compute surface coordinates for each sample.
    ///
    /// Horizontal step is `width / (len - 1)` so the last point lands on
    /// the right edge; the vertical axis is inverted so larger values
    /// plot higher. An all-zero series has no usable vertical scale and
    /// is pinned to the baseline instead of dividing by zero.
    pub fn layout(series: &[f64], width: f32, height: f32) -> Vec<(f32, f32)> {
        if series.len() < 2 {
            return Vec::new();
        }

        let max = series.iter().cloned().fold(0.0_f64, f64::max);
        let step_x = width / (series.len() - 1) as f32;
        let scale_y = if max > 0.0 { height / max as f32 } else { 0.0 };

        series
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let x = i as f32 * step_x;
                let y = height - v as f32 * scale_y;
                (x, y)
            })
            .collect()
    }

    /// Clear the surface and draw the series: line first, then markers.
    /// Idempotent for a given series and surface size.
    pub fn render(surface: &mut dyn DrawSurface, series: &[f64], background: Rgb, line: Rgb) {
        surface.clear(background);

        let (width, height) = surface.size();
        let points = Self::layout(series, width, height);
        if points.is_empty() {
            return;
        }

        surface.polyline(&points, LINE_WIDTH, line);
        for &point in &points {
            surface.fill_circle(point, MARKER_RADIUS, line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::surface::ImageSurface;

    const WHITE: Rgb = Rgb::new(255, 255, 255);
    const BLUE: Rgb = Rgb::new(0x34, 0x98, 0xdb);

    #[test]
    fn layout_places_endpoints_on_the_edges() {
        let points = TrendChart::layout(&CAMPAIGN_TRENDS, 300.0, 150.0);
        assert_eq!(points.len(), 7);
        // First sample: 10 of max 25 -> y = 150 - 10 * 6 = 90
        assert_eq!(points[0], (0.0, 90.0));
        // Last sample: 22 of max 25 -> y = 150 - 22 * 6 = 18
        assert_eq!(points[6], (300.0, 18.0));
    }

    #[test]
    fn layout_keeps_the_maximum_on_the_top_edge() {
        let points = TrendChart::layout(&CAMPAIGN_TRENDS, 300.0, 150.0);
        let top = points
            .iter()
            .map(|p| p.1)
            .fold(f32::INFINITY, f32::min);
        assert_eq!(top, 0.0);
    }

    #[test]
    fn all_zero_series_sits_on_the_baseline() {
        let points = TrendChart::layout(&[0.0; 7], 300.0, 150.0);
        assert_eq!(points.len(), 7);
        for (x, y) in points {
            assert!(x.is_finite() && y.is_finite());
            assert_eq!(y, 150.0);
        }
    }

    #[test]
    fn all_zero_series_renders_without_panicking() {
        let mut surface = ImageSurface::new(300, 150);
        TrendChart::render(&mut surface, &[0.0; 7], WHITE, BLUE);
    }

    #[test]
    fn single_sample_series_is_not_drawn() {
        assert!(TrendChart::layout(&[5.0], 300.0, 150.0).is_empty());
    }

    #[test]
    fn render_paints_markers_in_the_line_color() {
        let mut surface = ImageSurface::new(300, 150);
        TrendChart::render(&mut surface, &CAMPAIGN_TRENDS, WHITE, BLUE);

        // Marker center of the second sample (x = 50, y = 150 - 15*6 = 60)
        assert_eq!(surface.pixel(50, 60), BLUE.to_rgba());
        // Far corner stays the background color
        assert_eq!(surface.pixel(299, 0), WHITE.to_rgba());
    }
}
