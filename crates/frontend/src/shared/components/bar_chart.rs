use contracts::dashboards::sales_overview::{CategoryComparisonEntry, ProductRankingEntry};
use leptos::prelude::*;

/// Width/height of a bar as a percentage of the chart area.
fn bar_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Cap a ranking to its first `cap` entries, backend order preserved.
fn capped(entries: &[ProductRankingEntry], cap: usize) -> &[ProductRankingEntry] {
    &entries[..entries.len().min(cap)]
}

/// Largest value across both comparison series, used as the shared scale.
fn comparison_max(entries: &[CategoryComparisonEntry]) -> f64 {
    entries
        .iter()
        .map(|e| e.total_revenue.max(e.total_units_sold as f64))
        .fold(0.0, f64::max)
}

/// Horizontal bar chart over a product ranking.
///
/// Renders at most `max_bars` bars and a "No data available" placeholder
/// when the sequence is empty.
#[component]
pub fn RankingBarChart(
    /// Panel heading
    title: &'static str,
    /// Ranked entries, in backend order
    #[prop(into)]
    entries: Signal<Vec<ProductRankingEntry>>,
    /// Maximum number of bars rendered
    max_bars: usize,
    /// CSS color of the bars
    color: &'static str,
) -> impl IntoView {
    view! {
        <div class="chart-panel">
            <h3 class="chart-panel__title">{title}</h3>
            {move || {
                let entries = entries.get();
                if entries.is_empty() {
                    view! {
                        <div class="chart-panel__empty">"No data available"</div>
                    }
                    .into_any()
                } else {
                    let shown = capped(&entries, max_bars).to_vec();
                    let max = shown.iter().map(|e| e.units_sold).max().unwrap_or(0) as f64;
                    view! {
                        <div class="chart-panel__bars">
                            {shown
                                .into_iter()
                                .map(|entry| {
                                    let pct = bar_percent(entry.units_sold as f64, max);
                                    view! {
                                        <div class="chart-bar">
                                            <div class="chart-bar__label" title=entry.product_name.clone()>
                                                {entry.product_name.clone()}
                                            </div>
                                            <div class="chart-bar__track">
                                                <div
                                                    class="chart-bar__fill"
                                                    style=format!("width: {:.1}%; background: {};", pct, color)
                                                ></div>
                                            </div>
                                            <div class="chart-bar__value">{entry.units_sold}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

/// Grouped vertical bar chart comparing revenue and units sold per
/// category. Both series share one scale so the groups stay comparable.
#[component]
pub fn CategoryComparisonChart(
    /// Panel heading
    title: &'static str,
    #[prop(into)]
    entries: Signal<Vec<CategoryComparisonEntry>>,
) -> impl IntoView {
    view! {
        <div class="chart-panel">
            <h3 class="chart-panel__title">{title}</h3>
            {move || {
                let entries = entries.get();
                if entries.is_empty() {
                    view! {
                        <div class="chart-panel__empty">"No data available"</div>
                    }
                    .into_any()
                } else {
                    let max = comparison_max(&entries);
                    view! {
                        <div>
                            <div class="chart-legend">
                                <span class="chart-legend__swatch" style="background: #ffc658;"></span>
                                <span>"Revenue"</span>
                                <span class="chart-legend__swatch" style="background: #82ca9d;"></span>
                                <span>"Units Sold"</span>
                            </div>
                            <div class="chart-columns">
                                {entries
                                    .into_iter()
                                    .map(|entry| {
                                        let revenue_pct = bar_percent(entry.total_revenue, max);
                                        let units_pct = bar_percent(entry.total_units_sold as f64, max);
                                        view! {
                                            <div class="chart-column">
                                                <div class="chart-column__bars">
                                                    <div
                                                        class="chart-column__bar"
                                                        style=format!("height: {:.1}%; background: #ffc658;", revenue_pct)
                                                        title=format!("Revenue: {:.2}", entry.total_revenue)
                                                    ></div>
                                                    <div
                                                        class="chart-column__bar"
                                                        style=format!("height: {:.1}%; background: #82ca9d;", units_pct)
                                                        title=format!("Units sold: {}", entry.total_units_sold)
                                                    ></div>
                                                </div>
                                                <div class="chart-column__label" title=entry.category_name.clone()>
                                                    {entry.category_name.clone()}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, units: i64) -> ProductRankingEntry {
        ProductRankingEntry {
            product_name: name.to_string(),
            units_sold: units,
        }
    }

    #[test]
    fn test_capped_truncates_long_rankings() {
        let entries: Vec<_> = (0..15).map(|i| entry(&format!("p{i}"), i)).collect();
        assert_eq!(capped(&entries, 10).len(), 10);
        assert_eq!(capped(&entries, 10)[0].product_name, "p0");
    }

    #[test]
    fn test_capped_keeps_short_rankings() {
        let entries = vec![entry("a", 5), entry("b", 3)];
        assert_eq!(capped(&entries, 10).len(), 2);
    }

    #[test]
    fn test_bar_percent_scales_and_clamps() {
        assert_eq!(bar_percent(5.0, 10.0), 50.0);
        assert_eq!(bar_percent(20.0, 10.0), 100.0);
        assert_eq!(bar_percent(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_comparison_max_spans_both_series() {
        let entries = vec![
            CategoryComparisonEntry {
                category_name: "Books".to_string(),
                total_revenue: 120.0,
                total_units_sold: 300,
            },
            CategoryComparisonEntry {
                category_name: "Toys".to_string(),
                total_revenue: 80.0,
                total_units_sold: 40,
            },
        ];
        assert_eq!(comparison_max(&entries), 300.0);
        assert_eq!(comparison_max(&[]), 0.0);
    }
}
