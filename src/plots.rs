//! Convenience constructors for common chart types.
//!
//! These are small helpers converting numerical data into a `plotly::Plot`
//! ready to hand to [`ReportSection::plot`](crate::ReportSection::plot);
//! anything beyond a titled histogram, bar chart or scatter should build the
//! `Plot` directly.
use plotly::common::Mode;
use plotly::layout::{Axis, Layout};
use plotly::{Bar, Histogram, Plot, Scatter};

use crate::error::ReportError;

/// Overlaid histograms, one trace per named series.
pub fn plot_histogram(
    series: &[Vec<f64>],
    names: Vec<String>,
    title: &str,
    x_label: &str,
    y_label: &str,
) -> Result<Plot, ReportError> {
    if series.len() != names.len() {
        return Err(ReportError::InvalidArgument(format!(
            "{} series given with {} names",
            series.len(),
            names.len()
        )));
    }

    let mut plot = Plot::new();
    for (values, name) in series.iter().zip(names) {
        plot.add_trace(Histogram::new(values.clone()).name(&name));
    }
    plot.set_layout(
        Layout::new()
            .title(title)
            .x_axis(Axis::new().title(x_label))
            .y_axis(Axis::new().title(y_label)),
    );
    Ok(plot)
}

/// A bar chart of labelled values.
pub fn plot_bar(
    labels: &[String],
    values: &[f64],
    title: &str,
    x_label: &str,
    y_label: &str,
) -> Result<Plot, ReportError> {
    if labels.len() != values.len() {
        return Err(ReportError::InvalidArgument(format!(
            "{} labels given for {} values",
            labels.len(),
            values.len()
        )));
    }

    let mut plot = Plot::new();
    plot.add_trace(Bar::new(labels.to_vec(), values.to_vec()));
    plot.set_layout(
        Layout::new()
            .title(title)
            .x_axis(Axis::new().title(x_label))
            .y_axis(Axis::new().title(y_label)),
    );
    Ok(plot)
}

/// Scatter traces for parallel x/y series, one trace per name.
pub fn plot_scatter(
    x: &[Vec<f64>],
    y: &[Vec<f64>],
    names: Vec<String>,
    title: &str,
    x_label: &str,
    y_label: &str,
) -> Result<Plot, ReportError> {
    if x.len() != y.len() || x.len() != names.len() {
        return Err(ReportError::InvalidArgument(format!(
            "{} x series, {} y series and {} names must all match",
            x.len(),
            y.len(),
            names.len()
        )));
    }
    for (xs, ys) in x.iter().zip(y) {
        if xs.len() != ys.len() {
            return Err(ReportError::InvalidArgument(format!(
                "x series of length {} paired with y series of length {}",
                xs.len(),
                ys.len()
            )));
        }
    }

    let mut plot = Plot::new();
    for ((xs, ys), name) in x.iter().zip(y).zip(names) {
        plot.add_trace(
            Scatter::new(xs.clone(), ys.clone())
                .mode(Mode::Markers)
                .name(&name),
        );
    }
    plot.set_layout(
        Layout::new()
            .title(title)
            .x_axis(Axis::new().title(x_label))
            .y_axis(Axis::new().title(y_label)),
    );
    Ok(plot)
}
