use resinfo_probe_domain::{FeatureComparison, OutputFormat, ProbeReport};

pub const NO_DATA_MESSAGE: &str = "No resolver data available for comparison";

const FEATURE_HEADER: &str = "Feature";

pub fn render(report: &ProbeReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Aligned text grid, one row per feature and one column per resolver.
pub fn render_table(report: &ProbeReport) -> String {
    if !report.has_records() {
        return NO_DATA_MESSAGE.to_string();
    }

    let comparison = FeatureComparison::from_report(report);

    let mut widths: Vec<usize> = std::iter::once(FEATURE_HEADER.len())
        .chain(comparison.columns.iter().map(|c| c.chars().count()))
        .collect();
    for row in &comparison.rows {
        widths[0] = widths[0].max(row.feature.label().len());
        for (i, value) in row.values.iter().enumerate() {
            widths[i + 1] = widths[i + 1].max(value.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(comparison.rows.len() + 2);
    lines.push(format_line(
        std::iter::once(FEATURE_HEADER).chain(comparison.columns.iter().map(String::as_str)),
        &widths,
    ));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &comparison.rows {
        lines.push(format_line(
            std::iter::once(row.feature.label()).chain(row.values.iter().map(String::as_str)),
            &widths,
        ));
    }

    lines.join("\n")
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
