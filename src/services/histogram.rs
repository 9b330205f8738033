use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("failed to render histogram: {0}")]
    Render(String),
}

/// Renders the peak-occupancy distribution as a bar chart with one bar per
/// distinct desk count. An empty distribution renders nothing.
pub fn write_histogram_png(output_path: &str, distribution: &[u32]) -> Result<(), HistogramError> {
    if distribution.is_empty() {
        return Ok(());
    }

    let mut counts: std::collections::BTreeMap<u32, usize> = std::collections::BTreeMap::new();
    for peak in distribution {
        *counts.entry(*peak).or_insert(0usize) += 1;
    }
    let max_count = *counts.values().max().unwrap_or(&1);
    let min_desks = i64::from(*counts.keys().next().unwrap_or(&0)) - 1;
    let max_desks = i64::from(*counts.keys().next_back().unwrap_or(&0)) + 2;

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Peak Desk Demand", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(min_desks..max_desks, 0..(max_count + 1))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Number of desks needed")
        .y_desc("Trials")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .draw()
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(counts.iter().map(|(desks, count)| {
            let desks = i64::from(*desks);
            Rectangle::new([(desks, 0), (desks + 1, *count)], bar_style)
        }))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| HistogramError::Render(e.to_string()))?;
    Ok(())
}
