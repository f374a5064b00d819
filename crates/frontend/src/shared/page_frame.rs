//! PageFrame: standard root wrapper for every tab page.
//!
//! Sets `id` (`"{module}--{category}"`, e.g. `"d503_parts--dashboard"`) and
//! `data-page-category` on the root element.

use leptos::prelude::*;

pub const PAGE_CAT_DASHBOARD: &str = "dashboard";
pub const PAGE_CAT_USECASE: &str = "usecase";

#[component]
pub fn PageFrame(
    /// HTML id in format `{module}--{category}`
    page_id: String,
    /// `PAGE_CAT_DASHBOARD` or `PAGE_CAT_USECASE`
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id data-page-category=category class=class>
            {children()}
        </div>
    }
}
