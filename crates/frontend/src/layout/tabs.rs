use contracts::shared::view::DashboardTab;
use leptos::prelude::*;
use thaw::*;

use super::global_context::use_dashboard_context;
use crate::dashboards::d503_parts::ui::simulator::SpecialOperationSimulator;
use crate::dashboards::ui::dashboard_page::DashboardPage;
use crate::usecases::u601_irpv::ui::view::IrpvPanel;

/// Tab bar and the content of the active tab
#[component]
pub fn DashboardTabs() -> impl IntoView {
    let ctx = use_dashboard_context();
    let selected = RwSignal::new(ctx.active_tab.get_untracked().slug().to_string());

    Effect::new(move |prev: Option<String>| {
        let current = selected.get();
        if prev.is_some() {
            if let Some(tab) = DashboardTab::from_slug(&current) {
                ctx.active_tab.set(tab);
            }
        }
        current
    });

    view! {
        <div class="dashboard-tabs">
            <TabList selected_value=selected>
                {DashboardTab::ALL
                    .into_iter()
                    .map(|tab| view! { <Tab value=tab.slug()>{tab.label()}</Tab> })
                    .collect_view()}
            </TabList>

            <div class="dashboard-tabs__content">
                {move || {
                    let tab = ctx.active_tab.get();
                    match tab {
                        DashboardTab::Parts => view! {
                            <DashboardPage tab=tab />
                            <SpecialOperationSimulator />
                        }
                        .into_any(),
                        DashboardTab::Historical => view! {
                            <DashboardPage tab=tab />
                            <IrpvPanel />
                        }
                        .into_any(),
                        _ => view! { <DashboardPage tab=tab /> }.into_any(),
                    }
                }}
            </div>
        </div>
    }
}
