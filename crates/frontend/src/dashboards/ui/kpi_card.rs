use contracts::shared::kpi::KpiCard;
use leptos::prelude::*;

/// Actual value against the monthly objective
#[component]
pub fn KpiCardView(card: KpiCard) -> impl IntoView {
    let class = format!("stat-card stat-card--{}", card.status.css_modifier());
    let color = card.status.color();

    view! {
        <div class=class id=format!("kpi-{}", card.id)>
            <div class="stat-card__content">
                <div class="stat-card__label">{card.title}</div>
                <div class="stat-card__value">{card.value_text}</div>
                <div class="stat-card__subtitle">
                    "Objetivo parcial: " {card.partial_objective_text}
                </div>
                <div class="stat-card__subtitle">
                    "Objetivo mensual: " {card.objective_text}
                </div>
                <div class="stat-card__projection" style=format!("color: {}", color)>
                    "Proyección: " {card.projection_text}
                    <span class="stat-card__change">{format!("({})", card.attainment_text)}</span>
                </div>
            </div>
        </div>
    }
}
