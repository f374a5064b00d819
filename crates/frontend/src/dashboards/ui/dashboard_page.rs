use contracts::shared::view::{DashboardSection, DashboardTab, DashboardView};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::chart::ChartView;
use super::data_table::DataTableView;
use super::kpi_card::KpiCardView;
use super::metric_badge::MetricBadgeView;
use crate::dashboards::api;
use crate::layout::global_context::use_dashboard_context;
use crate::shared::api_utils::ApiCallError;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};

fn page_id(tab: DashboardTab) -> String {
    let module = match tab {
        DashboardTab::Objectives => "d501_objectives",
        DashboardTab::ServicesWorkshop => "d502_services_workshop",
        DashboardTab::Parts => "d503_parts",
        DashboardTab::Bodyshop => "d504_bodyshop",
        DashboardTab::Historical => "d505_historical",
    };
    format!("{}--{}", module, PAGE_CAT_DASHBOARD)
}

#[component]
fn SectionView(section: DashboardSection) -> impl IntoView {
    let cards = (!section.cards.is_empty()).then(|| {
        view! {
            <div class="section__cards">
                {section.cards.into_iter().map(|card| view! { <KpiCardView card=card /> }).collect_view()}
            </div>
        }
    });
    let badges = (!section.badges.is_empty()).then(|| {
        view! {
            <div class="section__badges">
                {section.badges.into_iter().map(|badge| view! { <MetricBadgeView badge=badge /> }).collect_view()}
            </div>
        }
    });
    let charts = (!section.charts.is_empty()).then(|| {
        view! {
            <div class="section__charts">
                {section.charts.into_iter().map(|spec| view! { <ChartView spec=spec /> }).collect_view()}
            </div>
        }
    });
    let tables = section
        .tables
        .into_iter()
        .map(|table| view! { <DataTableView table=table /> })
        .collect_view();

    view! {
        <section class="section">
            <h3 class="section__title">{section.title}</h3>
            {cards}
            {badges}
            {charts}
            {tables}
        </section>
    }
}

/// One tab rendered from its server-side view
#[component]
pub fn DashboardPage(tab: DashboardTab) -> impl IntoView {
    let ctx = use_dashboard_context();
    let (data, set_data) = signal(None::<DashboardView>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // reload on period change or manual refresh
    Effect::new(move |_| {
        let _ = ctx.revision.get();
        let Some(period) = ctx.period() else {
            return;
        };
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::get_view(tab, period).await {
                Ok(current) => set_data.set(Some(current)),
                Err(ApiCallError::Unavailable(e)) => {
                    log::error!("Failed to load {} view: {}", tab.slug(), e);
                    ctx.load_failed.set(true);
                }
                Err(ApiCallError::Rejected(e)) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    view! {
        <PageFrame page_id=page_id(tab) category=PAGE_CAT_DASHBOARD>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center class="page__header">
                <h2>{tab.label()}</h2>
                <span class="page__period">
                    {move || data.get().map(|v| v.period.label()).unwrap_or_default()}
                </span>
            </Flex>

            <Show when=move || loading.get()>
                <Flex align=FlexAlign::Center gap=FlexGap::Small>
                    <Spinner />
                    <span>"Cargando..."</span>
                </Flex>
            </Show>

            {move || {
                error.get().map(|e| {
                    view! { <MessageBar intent=MessageBarIntent::Warning>{e}</MessageBar> }
                })
            }}

            {move || {
                data.get()
                    .map(|current| {
                        current.sections
                            .into_iter()
                            .map(|section| view! { <SectionView section=section /> })
                            .collect_view()
                    })
            }}
        </PageFrame>
    }
}
