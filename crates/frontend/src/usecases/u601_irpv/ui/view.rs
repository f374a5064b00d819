use contracts::usecases::u601_irpv::{IrpvTable, PeriodThird};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

use crate::layout::global_context::use_dashboard_context;
use crate::shared::api_utils::ApiCallError;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use crate::usecases::u601_irpv::api;

/// `42,9 %` style cell text; buckets without sales show a dash.
fn rate_text(sold: u32, rate_pct: f64) -> String {
    if sold == 0 {
        "-".to_string()
    } else {
        format!("{:.1} %", rate_pct).replace('.', ",")
    }
}

fn selected_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    let input: web_sys::HtmlInputElement = ev.target()?.dyn_into().ok()?;
    input.files()?.get(0)
}

#[component]
fn IrpvTableView(table: IrpvTable) -> impl IntoView {
    let summary = format!(
        "Ventas: {} ({} registros) · Taller: {} ({} registros)",
        table.sales_file, table.sales_records, table.workshop_file, table.workshop_records
    );
    let skipped = (table.skipped_lines > 0).then(|| {
        view! {
            <div class="irpv__skipped">
                {format!("{} líneas con formato inválido fueron omitidas", table.skipped_lines)}
            </div>
        }
    });

    view! {
        <div class="irpv__result">
            <div class="irpv__summary">{summary}</div>
            {skipped}
            <table class="data-table__grid">
                <thead>
                    <tr>
                        <th>"Año"</th>
                        {PeriodThird::ALL.iter().map(|t| view! { <th>{t.label()}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {table
                        .rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <td>{row.year}</td>
                                    {row
                                        .cells
                                        .into_iter()
                                        .map(|cell| {
                                            let detail = format!("{} / {}", cell.retained, cell.sold);
                                            view! {
                                                <td title=detail>{rate_text(cell.sold, cell.rate_pct)}</td>
                                            }
                                        })
                                        .collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// Loyalty (IRPV) calculator hosted in the Historical tab
#[component]
pub fn IrpvPanel() -> impl IntoView {
    let ctx = use_dashboard_context();
    let session_id = ctx.session_id;

    let sales_file = StoredValue::new_local(None::<web_sys::File>);
    let workshop_file = StoredValue::new_local(None::<web_sys::File>);
    let (files_ready, set_files_ready) = signal((false, false));

    let (table, set_table) = signal(None::<IrpvTable>);
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let handle = move |result: Result<Option<IrpvTable>, ApiCallError>| match result {
        Ok(t) => {
            set_table.set(t);
            set_error.set(None);
        }
        Err(ApiCallError::Unavailable(e)) => {
            log::error!("IRPV request failed: {}", e);
            ctx.load_failed.set(true);
        }
        Err(ApiCallError::Rejected(e)) => set_error.set(Some(e)),
    };

    // cached table of this session
    Effect::new(move |_| {
        let id = session_id.get_value();
        spawn_local(async move {
            handle(api::get_table(&id).await.map(|r| r.table));
        });
    });

    let on_calculate = move |_| {
        let (Some(sales), Some(workshop)) = (sales_file.get_value(), workshop_file.get_value())
        else {
            set_error.set(Some("Seleccione ambos archivos".to_string()));
            return;
        };
        let id = session_id.get_value();
        set_busy.set(true);
        spawn_local(async move {
            handle(api::upload(&id, sales, workshop).await.map(|r| r.table));
            set_busy.set(false);
        });
    };

    let on_clear = move |_| {
        let id = session_id.get_value();
        spawn_local(async move {
            handle(api::clear_table(&id).await.map(|r| r.table));
        });
    };

    view! {
        <PageFrame page_id="u601_irpv--usecase".to_string() category=PAGE_CAT_USECASE>
            <section class="section irpv">
                <h3 class="section__title">"IRPV: índice de retención posventa"</h3>
                <Flex gap=FlexGap::Large align=FlexAlign::Center class="irpv__form">
                    <label>
                        "Ventas (CSV) "
                        <input
                            type="file"
                            accept=".csv,.txt"
                            on:change=move |ev| {
                                let file = selected_file(&ev);
                                set_files_ready.update(|r| r.0 = file.is_some());
                                sales_file.set_value(file);
                            }
                        />
                    </label>
                    <label>
                        "Taller (CSV) "
                        <input
                            type="file"
                            accept=".csv,.txt"
                            on:change=move |ev| {
                                let file = selected_file(&ev);
                                set_files_ready.update(|r| r.1 = file.is_some());
                                workshop_file.set_value(file);
                            }
                        />
                    </label>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || {
                            busy.get() || files_ready.get() != (true, true)
                        })
                        on_click=on_calculate
                    >
                        "Calcular"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        disabled=Signal::derive(move || table.with(Option::is_none))
                        on_click=on_clear
                    >
                        "Limpiar"
                    </Button>
                </Flex>

                <Show when=move || busy.get()>
                    <Flex align=FlexAlign::Center gap=FlexGap::Small>
                        <Spinner />
                        <span>"Procesando archivos..."</span>
                    </Flex>
                </Show>

                {move || {
                    error.get().map(|e| {
                        view! { <MessageBar intent=MessageBarIntent::Warning>{e}</MessageBar> }
                    })
                }}

                {move || match table.get() {
                    Some(t) => view! { <IrpvTableView table=t /> }.into_any(),
                    None => view! {
                        <div class="irpv__empty">
                            "Cargue el archivo de ventas y el de taller para calcular el índice."
                        </div>
                    }
                    .into_any(),
                }}
            </section>
        </PageFrame>
    }
}
