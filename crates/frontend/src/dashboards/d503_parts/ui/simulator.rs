use contracts::dashboards::d503_parts::{SpecialOperationRequest, SpecialOperationResult};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d503_parts::api;
use crate::layout::global_context::use_dashboard_context;
use crate::shared::api_utils::ApiCallError;
use crate::shared::number_input::parse_decimal;

const MAX_DISCOUNT: u32 = 50;

/// Validated inputs; `Err` names the offending field.
fn build_request(
    year: i32,
    month: u32,
    list_price: &str,
    unit_cost: &str,
    quantity: &str,
    discount_pct: f64,
) -> Result<SpecialOperationRequest, String> {
    let field = |raw: &str, name: &str| {
        parse_decimal(raw)
            .filter(|v| *v >= 0.0)
            .ok_or_else(|| format!("Valor inválido en \"{}\"", name))
    };
    Ok(SpecialOperationRequest {
        year,
        month,
        list_price: field(list_price, "Precio de lista")?,
        unit_cost: field(unit_cost, "Costo unitario")?,
        quantity: field(quantity, "Cantidad")?,
        discount_pct,
    })
}

#[component]
fn ResultView(result: SpecialOperationResult) -> impl IntoView {
    let status_class = format!("stat-card stat-card--{}", result.status.css_modifier());

    view! {
        <div class="simulator__result">
            <div class=status_class>
                <div class="stat-card__content">
                    <div class="stat-card__label">"Margen de la operación"</div>
                    <div class="stat-card__value">
                        {result.margin_pct_text} " "
                        <span class="stat-card__subtitle">{format!("(obj. {})", result.target_margin_text)}</span>
                    </div>
                    <div class="stat-card__subtitle">"Margen: " {result.margin_text}</div>
                </div>
            </div>
            <table class="data-table__grid">
                <tbody>
                    <tr><td>"Venta neta"</td><td>{result.net_sale_text}</td></tr>
                    <tr><td>"Costo total"</td><td>{result.total_cost_text}</td></tr>
                    <tr><td>"Cobertura del objetivo (actual)"</td><td>{result.coverage_before_text}</td></tr>
                    <tr><td>"Cobertura del objetivo (con operación)"</td><td>{result.coverage_after_text}</td></tr>
                </tbody>
            </table>
        </div>
    }
}

/// Special-operation margin simulator shown under the Parts tab
#[component]
pub fn SpecialOperationSimulator() -> impl IntoView {
    let ctx = use_dashboard_context();

    let list_price = RwSignal::new(String::new());
    let unit_cost = RwSignal::new(String::new());
    let quantity = RwSignal::new("1".to_string());
    let (discount, set_discount) = signal(0u32);

    let (result, set_result) = signal(None::<SpecialOperationResult>);
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let on_simulate = move |_| {
        let Some(period) = ctx.period() else {
            return;
        };
        let request = match build_request(
            period.year,
            period.month,
            &list_price.get_untracked(),
            &unit_cost.get_untracked(),
            &quantity.get_untracked(),
            discount.get_untracked() as f64,
        ) {
            Ok(r) => r,
            Err(msg) => {
                set_error.set(Some(msg));
                return;
            }
        };

        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::simulate(&request).await {
                Ok(r) => set_result.set(Some(r)),
                Err(ApiCallError::Unavailable(e)) => {
                    log::error!("Simulator request failed: {}", e);
                    ctx.load_failed.set(true);
                }
                Err(ApiCallError::Rejected(e)) => set_error.set(Some(e)),
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="section simulator" id="d503_parts--simulator">
            <h3 class="section__title">"Simulador de operación especial"</h3>
            <div class="simulator__form">
                <label>"Precio de lista" <Input value=list_price placeholder="0" /></label>
                <label>"Costo unitario" <Input value=unit_cost placeholder="0" /></label>
                <label>"Cantidad" <Input value=quantity /></label>
                <label class="simulator__slider">
                    {move || format!("Descuento: {} %", discount.get())}
                    <input
                        type="range"
                        min="0"
                        max=MAX_DISCOUNT.to_string()
                        step="1"
                        prop:value=move || discount.get().to_string()
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse::<u32>() {
                                set_discount.set(v.min(MAX_DISCOUNT));
                            }
                        }
                    />
                </label>
                <Button appearance=ButtonAppearance::Primary disabled=busy on_click=on_simulate>
                    "Simular"
                </Button>
            </div>

            {move || {
                error.get().map(|e| {
                    view! { <MessageBar intent=MessageBarIntent::Warning>{e}</MessageBar> }
                })
            }}
            {move || result.get().map(|r| view! { <ResultView result=r /> })}
        </section>
    }
}
