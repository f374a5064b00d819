use contracts::shared::view::DataTable;
use leptos::prelude::*;

#[component]
pub fn DataTableView(table: DataTable) -> impl IntoView {
    let columns = table.columns;
    let rows = table.rows;

    view! {
        <div class="data-table">
            <div class="data-table__title">{table.title}</div>
            <table class="data-table__grid">
                <thead>
                    <tr>
                        {columns.into_iter().map(|c| view! { <th>{c}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    {row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
