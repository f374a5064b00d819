use contracts::shared::period::month_name_es;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::global_context::use_dashboard_context;
use crate::dashboards::api;

/// Period filters plus the manual refresh action
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_dashboard_context();
    let (refreshing, set_refreshing) = signal(false);

    let year_value = RwSignal::new(String::new());
    let month_value = RwSignal::new(String::new());

    // context -> selects
    Effect::new(move |_| {
        let year = ctx.year.get();
        if year > 0 {
            year_value.set(year.to_string());
        }
    });
    Effect::new(move |_| {
        let month = ctx.month.get();
        if month > 0 {
            month_value.set(month.to_string());
        }
    });

    // selects -> context
    Effect::new(move |prev: Option<String>| {
        let current = year_value.get();
        if prev.is_some() {
            if let Ok(year) = current.parse::<i32>() {
                if year != ctx.year.get_untracked() {
                    ctx.select_year(year);
                }
            }
        }
        current
    });
    Effect::new(move |prev: Option<String>| {
        let current = month_value.get();
        if prev.is_some() {
            if let Ok(month) = current.parse::<u32>() {
                if month != ctx.month.get_untracked() {
                    ctx.month.set(month);
                }
            }
        }
        current
    });

    let on_refresh = move |_| {
        set_refreshing.set(true);
        spawn_local(async move {
            match api::refresh().await {
                Ok(periods) => {
                    ctx.set_periods(periods);
                    ctx.revision.update(|r| *r += 1);
                }
                Err(e) => {
                    log::error!("Refresh failed: {}", e);
                    ctx.load_failed.set(true);
                }
            }
            set_refreshing.set(false);
        });
    };

    view! {
        <aside class="sidebar">
            <Flex vertical=true gap=FlexGap::Large>
                <div class="sidebar__title">"Posventa"</div>

                <div class="sidebar__field">
                    <label>"Año"</label>
                    <Select value=year_value size=SelectSize::Small>
                        {move || {
                            ctx.periods
                                .get()
                                .years
                                .into_iter()
                                .map(|y| view! { <option value=y.to_string()>{y.to_string()}</option> })
                                .collect_view()
                        }}
                    </Select>
                </div>

                <div class="sidebar__field">
                    <label>"Mes"</label>
                    <Select value=month_value size=SelectSize::Small>
                        {move || {
                            let year = ctx.year.get();
                            ctx.periods
                                .with(|p| p.months_of(year))
                                .into_iter()
                                .map(|m| view! { <option value=m.to_string()>{month_name_es(m)}</option> })
                                .collect_view()
                        }}
                    </Select>
                </div>

                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    disabled=refreshing
                    on_click=on_refresh
                >
                    {move || if refreshing.get() { "Actualizando..." } else { "Actualizar datos" }}
                </Button>
            </Flex>
        </aside>
    }
}
