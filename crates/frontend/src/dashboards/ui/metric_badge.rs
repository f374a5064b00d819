use contracts::shared::kpi::{KpiStatus, MetricBadge};
use leptos::prelude::*;
use thaw::*;

fn badge_color(status: KpiStatus) -> BadgeColor {
    match status {
        KpiStatus::OnTrack => BadgeColor::Success,
        KpiStatus::Behind => BadgeColor::Danger,
        KpiStatus::Neutral => BadgeColor::Informative,
    }
}

#[component]
pub fn MetricBadgeView(badge: MetricBadge) -> impl IntoView {
    let target = badge
        .target_text
        .map(|t| view! { <span class="metric-badge__target">{t}</span> });

    view! {
        <div class="metric-badge" id=format!("badge-{}", badge.id)>
            <span class="metric-badge__title">{badge.title}</span>
            <Badge appearance=BadgeAppearance::Tint color=badge_color(badge.status)>
                {badge.value_text}
            </Badge>
            {target}
        </div>
    }
}
