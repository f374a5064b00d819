use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::api;
use crate::layout::global_context::DashboardContext;
use crate::layout::sidebar::Sidebar;
use crate::layout::tabs::DashboardTabs;

pub const CONNECTION_ERROR: &str =
    "No se pudo conectar con la fuente de datos. Intente nuevamente más tarde.";

#[component]
pub fn App() -> impl IntoView {
    let ctx = DashboardContext::new();
    provide_context(ctx);

    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_periods().await {
                Ok(periods) => ctx.set_periods(periods),
                Err(e) => {
                    log::error!("Failed to load periods: {}", e);
                    ctx.load_failed.set(true);
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <ConfigProvider>
            {move || {
                if ctx.load_failed.get() {
                    view! {
                        <div class="app-error">
                            <MessageBar intent=MessageBarIntent::Error>
                                {CONNECTION_ERROR}
                            </MessageBar>
                        </div>
                    }
                    .into_any()
                } else if loading.get() {
                    view! {
                        <Flex justify=FlexJustify::Center align=FlexAlign::Center class="app-loading">
                            <Spinner />
                            <span>"Cargando datos..."</span>
                        </Flex>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="app-shell">
                            <Sidebar />
                            <main class="app-main">
                                <DashboardTabs />
                            </main>
                        </div>
                    }
                    .into_any()
                }
            }}
        </ConfigProvider>
    }
}
