//! Source filter control for the professionals list.

use ats::types::{FILTER_OPTIONS, Source, filter_value, parse_filter};
use leptos::prelude::*;

/// Four-way select: All Sources, Direct, Partner, Internal.
#[component]
pub fn SourceFilter(#[prop(into)] value: Signal<Option<Source>>, on_change: Callback<Option<Source>>) -> impl IntoView {
    view! {
        <select
            class="filter-select"
            prop:value=move || filter_value(value.get())
            on:change=move |ev| match parse_filter(&event_target_value(&ev)) {
                Ok(filter) => on_change.run(filter),
                Err(err) => tracing::warn!(error = %err, "ignoring unknown filter value"),
            }
        >
            {FILTER_OPTIONS
                .into_iter()
                .map(|(option, label)| view! { <option value=option>{label}</option> })
                .collect_view()}
        </select>
    }
}
