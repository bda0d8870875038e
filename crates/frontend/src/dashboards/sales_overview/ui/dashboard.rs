use crate::dashboards::sales_overview::api;
use crate::dashboards::sales_overview::state::{
    commit_batch, BatchSequencer, DashboardData, FilterSelection,
};
use crate::shared::components::bar_chart::{CategoryComparisonChart, RankingBarChart};
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::kpi_card::{KpiCard, KpiFormat};
use crate::shared::components::select::Select;
use crate::shared::date_utils::today_utc;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Maximum number of bars in the ranking panels.
const MAX_RANKING_BARS: usize = 10;

/// Which chart panels are visible. Pure UI state: switching never
/// triggers a refetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartView {
    Top,
    Least,
    Category,
    All,
}

impl ChartView {
    fn shows(self, panel: ChartView) -> bool {
        self == ChartView::All || self == panel
    }
}

/// Sales overview dashboard: KPI tiles plus three ranking/comparison
/// charts, driven by the canonical filter.
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let filter = RwSignal::new(FilterSelection::default());
    // None until the first batch commits (initial empty state).
    let data = RwSignal::new(None::<DashboardData>);
    let loading = RwSignal::new(false);
    let categories = RwSignal::new(Vec::<String>::new());
    let active_view = RwSignal::new(ChartView::Top);

    // Draft for the "last N days" input; applied only on button click.
    let days_draft = RwSignal::new(String::new());

    let sequencer = BatchSequencer::new();

    // Category catalog: fetched once on mount, best-effort. On failure
    // the dropdown stays empty and the dashboard keeps working.
    spawn_local(async move {
        match api::fetch_categories().await {
            Ok(list) => categories.set(list),
            Err(err) => {
                log::warn!("Failed to load category catalog: {}", err);
                categories.set(Vec::new());
            }
        }
    });

    // One batch per filter change. All four requests share one body, so
    // every displayed number belongs to the same logical snapshot.
    let load_batch = {
        let sequencer = sequencer.clone();
        move || {
            let seq = sequencer.begin();
            let sequencer = sequencer.clone();
            let body = filter.get_untracked().to_body();

            loading.set(true);

            spawn_local(async move {
                let (kpis, top, least, comparison) = futures::join!(
                    api::fetch_kpis(&body),
                    api::fetch_top_products(&body),
                    api::fetch_least_sold_products(&body),
                    api::fetch_category_comparison(&body),
                );

                // A newer filter superseded this batch while it was in
                // flight; its results are authoritative, discard ours.
                if !sequencer.is_current(seq) {
                    return;
                }

                if let Err(err) = &kpis {
                    log::error!("KPI request failed: {}", err);
                }
                if let Err(err) = &top {
                    log::error!("Top products request failed: {}", err);
                }
                if let Err(err) = &least {
                    log::error!("Least sold request failed: {}", err);
                }
                if let Err(err) = &comparison {
                    log::error!("Category comparison request failed: {}", err);
                }

                // A failed batch commits nothing: the previously displayed
                // datasets stay on screen.
                if let Some(batch) = commit_batch(kpis, top, least, comparison) {
                    data.set(Some(batch));
                }

                loading.set(false);
            });
        }
    };

    // Runs once for the initial empty filter, then on every change.
    Effect::new(move |_| {
        let _ = filter.get();
        load_batch();
    });

    let on_category = Callback::new(move |category: String| {
        filter.set(filter.get_untracked().with_category(category));
    });

    let on_date_change = Callback::new(move |(from, to): (String, String)| {
        filter.set(filter.get_untracked().with_date_range(from, to));
    });

    let on_apply_days = move |_| {
        if let Ok(days) = days_draft.get_untracked().trim().parse::<u32>() {
            if days > 0 {
                filter.set(filter.get_untracked().with_day_window(today_utc(), days));
            }
        }
    };

    let on_reset = move |_| {
        days_draft.set(String::new());
        filter.set(FilterSelection::default());
    };

    let kpis = Signal::derive(move || data.get().map(|d| d.kpis).unwrap_or_default());
    let top_products =
        Signal::derive(move || data.get().map(|d| d.top_products).unwrap_or_default());
    let least_products =
        Signal::derive(move || data.get().map(|d| d.least_products).unwrap_or_default());
    let category_comparison =
        Signal::derive(move || data.get().map(|d| d.category_comparison).unwrap_or_default());

    let category_value = Signal::derive(move || filter.get().category);
    let category_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "All categories".to_string())];
        options.extend(categories.get().into_iter().map(|c| (c.clone(), c)));
        options
    });

    let view_button = move |label: &'static str, target: ChartView| {
        view! {
            <Button
                size=ButtonSize::Small
                appearance=move || {
                    if active_view.get() == target {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Subtle
                    }
                }
                on_click=move |_| active_view.set(target)
            >
                {label}
            </Button>
        }
    };

    view! {
        <style>
            "
            .sales-dashboard__filters {
                display: flex;
                align-items: flex-end;
                flex-wrap: wrap;
                gap: 16px;
                margin-bottom: 16px;
            }

            .kpi-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                gap: 16px;
                margin-bottom: 16px;
            }

            .kpi-card {
                display: flex;
                align-items: center;
                gap: 12px;
                padding: 16px;
                border: 1px solid var(--colorNeutralStroke1, #d1d1d1);
                border-radius: var(--borderRadiusMedium, 4px);
                background: var(--colorNeutralBackground1, #fff);
            }

            .kpi-card__label {
                font-size: 0.8rem;
                color: var(--colorNeutralForeground3, #616161);
            }

            .kpi-card__value {
                font-size: 1.4rem;
                font-weight: 600;
            }

            .chart-panel {
                padding: 16px;
                margin-bottom: 16px;
                border: 1px solid var(--colorNeutralStroke1, #d1d1d1);
                border-radius: var(--borderRadiusMedium, 4px);
                background: var(--colorNeutralBackground1, #fff);
            }

            .chart-panel__empty {
                padding: 32px;
                text-align: center;
                color: var(--colorNeutralForeground3, #616161);
            }

            .chart-bar {
                display: flex;
                align-items: center;
                gap: 8px;
                margin-bottom: 6px;
            }

            .chart-bar__label {
                width: 180px;
                overflow: hidden;
                text-overflow: ellipsis;
                white-space: nowrap;
                font-size: 0.85rem;
                text-align: right;
            }

            .chart-bar__track {
                flex: 1;
                height: 18px;
                background: var(--colorNeutralBackground3, #f0f0f0);
                border-radius: 2px;
            }

            .chart-bar__fill {
                height: 100%;
                border-radius: 2px;
            }

            .chart-bar__value {
                width: 60px;
                font-size: 0.85rem;
            }

            .chart-legend {
                display: flex;
                align-items: center;
                gap: 6px;
                margin-bottom: 12px;
                font-size: 0.85rem;
            }

            .chart-legend__swatch {
                display: inline-block;
                width: 12px;
                height: 12px;
                border-radius: 2px;
            }

            .chart-columns {
                display: flex;
                align-items: flex-end;
                gap: 20px;
                height: 300px;
                overflow-x: auto;
            }

            .chart-column {
                display: flex;
                flex-direction: column;
                justify-content: flex-end;
                height: 100%;
                min-width: 70px;
            }

            .chart-column__bars {
                display: flex;
                align-items: flex-end;
                gap: 4px;
                flex: 1;
            }

            .chart-column__bar {
                width: 24px;
                border-radius: 2px 2px 0 0;
            }

            .chart-column__label {
                margin-top: 6px;
                font-size: 0.8rem;
                overflow: hidden;
                text-overflow: ellipsis;
                white-space: nowrap;
                max-width: 90px;
            }

            .sales-dashboard__loading {
                padding: 16px;
                text-align: center;
                color: var(--colorNeutralForeground3, #616161);
            }
            "
        </style>

        <div id="sales_overview--dashboard" data-page-category="dashboard" class="page page--dashboard">
            <div class="page__header">
                <h2 class="page__title">
                    {icon("chart")}
                    " Product Performance Dashboard"
                </h2>
            </div>

            <div class="sales-dashboard__filters">
                <Select
                    label="Category"
                    value=category_value
                    on_change=on_category
                    options=category_options
                />

                <DateRangePicker
                    label="Period".to_string()
                    date_from=Signal::derive(move || filter.get().start)
                    date_to=Signal::derive(move || filter.get().end)
                    on_change=on_date_change
                />

                <Flex align=FlexAlign::End gap=FlexGap::Small>
                    <Input
                        input_type=InputType::Number
                        value=days_draft
                        placeholder="Days"
                        attr:style="width: 90px;"
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_apply_days
                    >
                        "Apply days"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=on_reset
                    >
                        "Reset"
                    </Button>
                </Flex>
            </div>

            <div class="sales-dashboard__views" style="margin-bottom: 16px;">
                <ButtonGroup>
                    {view_button("Top Sold", ChartView::Top)}
                    {view_button("Least Sold", ChartView::Least)}
                    {view_button("Category Comparison", ChartView::Category)}
                    {view_button("Complete Analysis", ChartView::All)}
                </ButtonGroup>
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div class="sales-dashboard__loading">"Loading dashboard..."</div>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <Show when=move || data.get().is_some()>
                <div class="kpi-grid">
                    <KpiCard
                        label="Units Sold"
                        icon_name="units"
                        format=KpiFormat::Integer
                        value=Signal::derive(move || kpis.get().units_sold.map(|v| v as f64))
                    />
                    <KpiCard
                        label="Revenue per SKU"
                        icon_name="revenue"
                        format=KpiFormat::Decimal2
                        value=Signal::derive(move || kpis.get().revenue_per_sku)
                    />
                    <KpiCard
                        label="Return %"
                        icon_name="returns"
                        format=KpiFormat::Percent2
                        value=Signal::derive(move || kpis.get().return_percent)
                    />
                    <KpiCard
                        label="Out-of-stock Count"
                        icon_name="out-of-stock"
                        format=KpiFormat::Integer
                        value=Signal::derive(move || kpis.get().out_of_stock_count.map(|v| v as f64))
                    />
                </div>

                <Show when=move || active_view.get().shows(ChartView::Top)>
                    <RankingBarChart
                        title="Top 10 Products by Units Sold"
                        entries=top_products
                        max_bars=MAX_RANKING_BARS
                        color="#1890ff"
                    />
                </Show>

                <Show when=move || active_view.get().shows(ChartView::Least)>
                    <RankingBarChart
                        title="Least Sold Products"
                        entries=least_products
                        max_bars=MAX_RANKING_BARS
                        color="#faad14"
                    />
                </Show>

                <Show when=move || active_view.get().shows(ChartView::Category)>
                    <CategoryComparisonChart
                        title="Category-wise Sales Comparison"
                        entries=category_comparison
                    />
                </Show>
            </Show>
        </div>
    }
}
