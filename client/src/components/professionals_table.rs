//! Professionals table: a pure projection of the held list.

#[cfg(test)]
#[path = "professionals_table_test.rs"]
mod professionals_table_test;

use ats::types::{COLUMN_HEADERS, Professional};
use leptos::prelude::*;

/// Owned display cells for one record, in header order.
fn row_cells(professional: &Professional) -> [String; 6] {
    professional.cells().map(str::to_owned)
}

/// Headers stay visible when `items` is empty.
#[component]
pub fn ProfessionalsTable(#[prop(into)] items: Signal<Vec<Professional>>) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    {COLUMN_HEADERS.into_iter().map(|header| view! { <th>{header}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || items.get()
                    key=|professional: &Professional| professional.id.clone()
                    children=move |professional: Professional| {
                        view! {
                            <tr>
                                {row_cells(&professional)
                                    .into_iter()
                                    .map(|cell| view! { <td>{cell}</td> })
                                    .collect_view()}
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
