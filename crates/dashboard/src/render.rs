use crate::payload::{ChartSeries, RenderPayload, ReturnCharts};
use crate::view::{Bar, SummaryView, format_percent};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, Table};
use std::fmt;

// Half-width of the bar chart, in characters, on each side of the zero axis.
const BAR_HALF_WIDTH: usize = 20;

/// Renders a payload for a terminal. At most `chart_rows` of the most recent
/// chart rows are printed.
pub fn render_text(payload: &RenderPayload, chart_rows: usize) -> String {
    TextReport {
        payload,
        chart_rows,
    }
    .to_string()
}

/// The terminal layout of one payload.
pub struct TextReport<'a> {
    pub payload: &'a RenderPayload,
    pub chart_rows: usize,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payload = self.payload;
        let ticker = &payload.config.ticker;

        writeln!(f, "Expected Portfolio Returns Dashboard")?;
        writeln!(
            f,
            "Company Name: {}",
            payload.display_name.as_deref().unwrap_or("Not Found")
        )?;

        for warning in &payload.warnings {
            writeln!(f, "WARNING: {}", warning.message())?;
        }

        if let Some(charts) = &payload.charts {
            writeln!(
                f,
                "\nDaily Returns for {} vs {} (last {} days):",
                ticker, payload.benchmark_label, charts.lookback_days
            )?;
            writeln!(f, "{}", chart_table(charts, self.chart_rows))?;
        }

        match &payload.summary {
            Some(SummaryView::Table { rows, .. }) => {
                let mut table = Table::new();
                table.load_preset(UTF8_FULL).set_header(vec!["Metric", "Value"]);
                for row in rows {
                    table.add_row(vec![row.label.clone(), row.formatted.clone()]);
                }
                right_align(&mut table, 1);
                writeln!(f, "\nCAPM Expected Returns Analysis for {}", ticker)?;
                writeln!(f, "{}", table)?;
            }
            Some(SummaryView::BarChart { title, bars }) => {
                writeln!(f, "\n{}", title)?;
                write_bar_chart(f, bars)?;
            }
            None => {}
        }

        Ok(())
    }
}

fn cell(value: Option<f64>) -> String {
    value.map(format_percent).unwrap_or_default()
}

fn right_align(table: &mut Table, column: usize) {
    if let Some(col) = table.column_mut(column) {
        col.set_cell_alignment(CellAlignment::Right);
    }
}

fn chart_table(charts: &ReturnCharts, max_rows: usize) -> Table {
    let smoothed = charts.asset.smoothed.is_some();
    let mut header = vec!["Date".to_string(), charts.asset.label.clone()];
    if smoothed {
        header.push(charts.asset.smoothed_label());
    }
    header.push(charts.benchmark.label.clone());
    if smoothed {
        header.push(charts.benchmark.smoothed_label());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);

    let start = charts.len().saturating_sub(max_rows);
    for i in start..charts.len() {
        let mut row = vec![charts.asset.dates[i].to_string()];
        push_series(&mut row, &charts.asset, i);
        push_series(&mut row, &charts.benchmark, i);
        table.add_row(row);
    }
    for column in 1..table.column_count() {
        right_align(&mut table, column);
    }
    table
}

fn push_series(row: &mut Vec<String>, series: &ChartSeries, i: usize) {
    row.push(cell(series.raw.get(i).copied()));
    if let Some(smoothed) = &series.smoothed {
        // Warm-up points are gaps, rendered as empty cells.
        row.push(cell(smoothed.get(i).copied().flatten()));
    }
}

fn write_bar_chart(f: &mut fmt::Formatter<'_>, bars: &[Bar]) -> fmt::Result {
    let label_width = bars.iter().map(|b| b.label.len()).max().unwrap_or(0);
    let scale = bars
        .iter()
        .map(|b| b.value.abs())
        .fold(0.0_f64, f64::max);

    for bar in bars {
        let len = if scale > 0.0 {
            ((bar.value.abs() / scale) * BAR_HALF_WIDTH as f64).round() as usize
        } else {
            0
        };
        let (left, right) = if bar.value < 0.0 {
            (
                format!("{}{}", " ".repeat(BAR_HALF_WIDTH - len), "#".repeat(len)),
                " ".repeat(BAR_HALF_WIDTH),
            )
        } else {
            (
                " ".repeat(BAR_HALF_WIDTH),
                format!("{}{}", "#".repeat(len), " ".repeat(BAR_HALF_WIDTH - len)),
            )
        };
        writeln!(
            f,
            "{:<width$} {}|{} {}",
            bar.label,
            left,
            right,
            bar.text,
            width = label_width
        )?;
    }
    Ok(())
}
