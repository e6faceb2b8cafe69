//! Static Chart Renderer
//! Renders the stacked win/loss chart to a PNG file with plotters.
//!
//! Layout matches the interactive chart: one bar per league, wins at the
//! bottom, losses stacked on top, legend in the upper right.

use super::plotter::{WinLossSeries, CHART_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL};
use crate::export::ExportError;
use plotters::prelude::*;
use std::path::Path;

const WINS: RGBColor = RGBColor(46, 204, 113);
const LOSSES: RGBColor = RGBColor(231, 76, 60);

/// Horizontal gap on each side of a bar, in pixels.
const BAR_MARGIN: u32 = 12;

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Write the chart as a `width` x `height` PNG.
    pub fn render_png(
        series: &WinLossSeries,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), ExportError> {
        if series.is_empty() {
            return Err(ExportError::Empty);
        }

        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        Self::draw(&root, series).map_err(|e| ExportError::Draw(e.to_string()))?;
        root.present().map_err(|e| ExportError::Draw(e.to_string()))?;

        tracing::info!(path = %path.display(), leagues = series.len(), "Chart exported");
        Ok(())
    }

    fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, plotters::coord::Shift>,
        series: &WinLossSeries,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        let n = series.len();
        let y_max = series.max_total() as u32 + 1;

        let mut chart = ChartBuilder::on(root)
            .caption(CHART_TITLE, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(50)
            .build_cartesian_2d((0..n).into_segmented(), 0u32..y_max)?;

        let leagues = &series.leagues;
        let label = |v: &SegmentValue<usize>| match v {
            SegmentValue::CenterOf(i) => leagues.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n)
            .x_label_formatter(&label)
            .x_desc(X_AXIS_LABEL)
            .y_desc(Y_AXIS_LABEL)
            .draw()?;

        chart
            .draw_series((0..n).map(|i| Self::bar(i, 0, series.wins[i] as u32, WINS)))?
            .label("Wins")
            .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], WINS.filled()));

        chart
            .draw_series((0..n).map(|i| {
                let bottom = series.wins[i] as u32;
                Self::bar(i, bottom, bottom + series.losses[i] as u32, LOSSES)
            }))?
            .label("Losses")
            .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], LOSSES.filled()));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        Ok(())
    }

    fn bar(
        i: usize,
        bottom: u32,
        top: u32,
        color: RGBColor,
    ) -> Rectangle<(SegmentValue<usize>, u32)> {
        let mut rect = Rectangle::new(
            [
                (SegmentValue::Exact(i), bottom),
                (SegmentValue::Exact(i + 1), top),
            ],
            color.mix(0.85).filled(),
        );
        rect.set_margin(0, 0, BAR_MARGIN, BAR_MARGIN);
        rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_is_not_rendered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");

        let err = StaticChartRenderer::render_png(&WinLossSeries::default(), &path, 400, 300)
            .unwrap_err();
        assert!(matches!(err, ExportError::Empty));
        assert!(!path.exists());
    }
}
