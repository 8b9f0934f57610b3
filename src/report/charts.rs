//! Chart generation for the expense report.
//!
//! This module creates ECharts visualizations for the two expense reports:
//! - **Expenses by Category**: A pie chart of the share each category takes
//! - **Monthly Expenses**: A bar chart of total expenses per month
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered by [crate::report::page].

use std::collections::BTreeMap;

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Label, Tooltip, Trigger,
    },
    series::{Pie, bar},
};

/// A report chart with its HTML container ID and ECharts configuration.
pub struct ReportChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string, `None` when there is no data to plot.
    pub options: Option<String>,
    /// The text shown in place of the chart when there is no data.
    pub empty_message: &'static str,
}

/// Build both report charts, leaving out the ones with no data.
pub fn report_charts(
    expenses_by_category: &BTreeMap<String, f64>,
    monthly_expenses: &BTreeMap<String, f64>,
) -> [ReportChart; 2] {
    [
        ReportChart {
            id: "category-chart",
            options: (!expenses_by_category.is_empty())
                .then(|| category_chart(expenses_by_category).to_string()),
            empty_message: "No expense data",
        },
        ReportChart {
            id: "monthly-chart",
            options: (!monthly_expenses.is_empty())
                .then(|| monthly_chart(monthly_expenses).to_string()),
            empty_message: "No monthly data",
        },
    ]
}

/// A pie chart of each category's share of the total expenses.
pub fn category_chart(expenses_by_category: &BTreeMap<String, f64>) -> Chart {
    let data: Vec<(f64, &str)> = expenses_by_category
        .iter()
        .map(|(category, total)| (*total, category.as_str()))
        .collect();

    Chart::new()
        .title(Title::new().text("Expenses by Category"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().bottom("0%"))
        .series(
            Pie::new()
                .name("Expenses")
                .radius("60%")
                .label(Label::new().formatter("{b}: {d}%"))
                .data(data),
        )
}

/// A bar chart of total expenses per month.
pub fn monthly_chart(monthly_expenses: &BTreeMap<String, f64>) -> Chart {
    let labels: Vec<String> = monthly_expenses.keys().cloned().collect();
    let values: Vec<f64> = monthly_expenses.values().copied().collect();

    Chart::new()
        .title(Title::new().text("Monthly Expenses"))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Month")
                .data(labels),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Amount")
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(bar::Bar::new().name("Expenses").data(values))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
