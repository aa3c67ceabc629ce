//! Chart generation and rendering for the dashboard.
//!
//! This module creates interactive ECharts visualizations for a month of sales:
//! - **Price Range Chart**: Bar chart of the number of items in each price range
//! - **Category Chart**: Pie chart of each category's share of the items
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisPointer, AxisPointerType, AxisType, ItemStyle, Tooltip, Trigger},
    series::{Bar, Pie},
};
use maud::{Markup, PreEscaped, html};

use crate::aggregation::{CategoryCounts, PriceHistogram};

const BAR_COLOR: &str = "#82ca9d";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for dashboard charts.
///
/// # Arguments
/// * `charts` - The charts to render containers for
///
/// # Returns
/// Maud markup containing a grid of chart container divs.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// The script runs inline rather than on `DOMContentLoaded` so that it also
/// runs when htmx swaps in new dashboard content.
///
/// # Arguments
/// * `charts` - The charts to generate initialization scripts for
///
/// # Returns
/// A script element containing the initialization JavaScript.
pub(super) fn charts_script(charts: &[DashboardChart]) -> Markup {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id,
                escape_script_json(&chart.options)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    html!(
        script { (PreEscaped(script_content)) }
    )
}

/// Escape the characters that could end the enclosing `<script>` element.
///
/// `<`, `>` and `&` only appear inside JSON strings, where their `\uXXXX`
/// escapes decode to the same text.
fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

pub(super) fn price_range_chart(month: &str, histogram: &PriceHistogram) -> Chart {
    let (labels, values): (Vec<String>, Vec<f64>) = histogram
        .iter()
        .map(|(range, count)| (range.label().to_owned(), count as f64))
        .unzip();

    Chart::new()
        .title(Title::new().text(format!("Price Range Distribution - {month}")))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
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
                .name("Price Range")
                .data(labels),
        )
        .y_axis(Axis::new().type_(AxisType::Value).name("Count"))
        .series(
            Bar::new()
                .name("Count")
                .item_style(ItemStyle::new().color(BAR_COLOR))
                .data(values),
        )
}

pub(super) fn category_chart(month: &str, categories: &CategoryCounts) -> Chart {
    let data: Vec<(f64, &str)> = categories
        .iter()
        .map(|(name, count)| (count as f64, name))
        .collect();

    Chart::new()
        .title(Title::new().text(format!("Category Distribution - {month}")))
        // Show each category's share of the items rather than the raw count.
        .tooltip(Tooltip::new().trigger(Trigger::Item).formatter("{b}: {d}%"))
        .legend(Legend::new().top("bottom"))
        .series(Pie::new().name("Items").radius("60%").data(data))
}
