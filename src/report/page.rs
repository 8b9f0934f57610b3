//! Renders the expense report as a standalone HTML page.

use std::{collections::BTreeMap, fs, path::Path};

use maud::{Markup, PreEscaped, html};

use crate::{
    Error,
    html::{
        CHART_CONTAINER_STYLE, CHART_GRID_STYLE, ECHARTS_SCRIPT_URL, EMPTY_CHART_STYLE,
        HeadElement, PAGE_CONTAINER_STYLE, base, format_currency,
    },
    report::charts::{ReportChart, report_charts},
};

/// The figures shown on the report page.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportData {
    /// Total income minus total expenses.
    pub balance: f64,
    /// Total expenses per category.
    pub expenses_by_category: BTreeMap<String, f64>,
    /// Total expenses per "MM-YYYY" month.
    pub monthly_expenses: BTreeMap<String, f64>,
}

/// Render the report page.
pub fn render_report(data: &ReportData) -> Markup {
    let charts = report_charts(&data.expenses_by_category, &data.monthly_expenses);

    let content = html!(
        main style=(PAGE_CONTAINER_STYLE)
        {
            h1 { "Financial Report" }

            p id="balance" { "Balance: " (format_currency(data.balance)) }

            (charts_view(&charts))

            (totals_table("category-totals", "Category", &data.expenses_by_category))
            (totals_table("monthly-totals", "Month", &data.monthly_expenses))
        }
    );

    base(
        "Financial Report",
        &[
            HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned()),
            charts_script(&charts),
        ],
        &content,
    )
}

/// Render the report and write it to `path`.
///
/// # Errors
/// Returns an [Error::IoError] if the file could not be written.
pub fn write_report(path: &Path, data: &ReportData) -> Result<(), Error> {
    fs::write(path, render_report(data).into_string())?;
    tracing::info!("Wrote report to {}", path.display());

    Ok(())
}

/// Renders the HTML containers for report charts.
///
/// Charts without data get a placeholder message instead of a container.
fn charts_view(charts: &[ReportChart]) -> Markup {
    html!(
        section id="charts" style=(CHART_GRID_STYLE)
        {
            @for chart in charts {
                @if chart.options.is_some() {
                    div id=(chart.id) style=(CHART_CONTAINER_STYLE) {}
                } @else {
                    div id=(chart.id) class="empty-chart" style=(EMPTY_CHART_STYLE)
                    {
                        (chart.empty_message)
                    }
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for the charts that have data.
fn charts_script(charts: &[ReportChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .filter_map(|chart| chart.options.as_ref().map(|options| (chart.id, options)))
        .map(|(id, options)| {
            let options = escape_script_text(options);
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{id}");
                    const chart = echarts.init(chartDom);
                    const option = {options};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);
                }})();"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Stops text from closing the surrounding `<script>` element early.
///
/// `<\/` means the same as `</` inside JavaScript and JSON strings.
fn escape_script_text(text: &str) -> String {
    text.replace("</", "<\\/")
}

fn totals_table(id: &str, label: &str, totals: &BTreeMap<String, f64>) -> Markup {
    html!(
        @if !totals.is_empty() {
            table id=(id) style="margin-top: 1.5rem; border-collapse: collapse; width: 100%;"
            {
                thead
                {
                    tr
                    {
                        th style="text-align: left;" { (label) }
                        th style="text-align: right;" { "Amount" }
                    }
                }

                tbody
                {
                    @for (key, total) in totals {
                        tr
                        {
                            td { (key) }
                            td style="text-align: right;" { (format_currency(*total)) }
                        }
                    }
                }
            }
        }
    )
}
