//! Listing page: source filter plus the professionals table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The fetch is a declarative dependency of the listing's fetch key (filter
//! plus retry count): an effect tracks the key and re-runs the
//! fetch-and-replace routine whenever it changes, and once on mount.
//! Responses are applied through `ListingState::apply`, which drops any
//! response superseded by a newer request.

#[cfg(test)]
#[path = "professionals_test.rs"]
mod professionals_test;

use ats::flows::listing::{FetchKey, FetchTicket, ListingState};
use ats::notify::LIST_FAILURE_MESSAGE;
use ats::types::Source;
use leptos::prelude::*;

use crate::components::professionals_table::ProfessionalsTable;
use crate::components::source_filter::SourceFilter;
use crate::net::api::BrowserApi;

#[component]
pub fn ProfessionalsPage() -> impl IntoView {
    let api = expect_context::<BrowserApi>();
    let listing = RwSignal::new(ListingState::default());
    let filter = Memo::new(move |_| listing.with(ListingState::filter));
    let key = Memo::new(move |_| listing.with(ListingState::fetch_key));

    Effect::new(move |previous: Option<FetchKey>| {
        let current = key.get();
        if let Some(ticket) = listing.try_update(|state| fetch_on_key_change(state, previous, current)).flatten() {
            spawn_fetch(api.clone(), listing, ticket);
        }
        current
    });

    let on_filter = Callback::new(move |next: Option<Source>| {
        listing.update(|state| {
            state.set_filter(next);
        });
    });
    let on_retry = move |_| listing.update(ListingState::retry);

    view! {
        <section class="card">
            <h2 class="card__title">"Professionals"</h2>
            <div class="filter-bar">
                <SourceFilter value=filter on_change=on_filter/>
            </div>
            <Show when=move || listing.with(|state| state.error().is_some())>
                <p class="card__error">
                    {LIST_FAILURE_MESSAGE}
                    <button type="button" class="btn btn--secondary" on:click=on_retry>
                        "Retry"
                    </button>
                </p>
            </Show>
            <Show when=move || listing.with(ListingState::is_loading)>
                <p class="card__hint">"Loading..."</p>
            </Show>
            <ProfessionalsTable items=Signal::derive(move || listing.with(|state| state.items().to_vec()))/>
        </section>
    }
}

/// Effect body: start a fetch when the key differs from the one seen on the
/// previous run (always on the first run).
fn fetch_on_key_change(state: &mut ListingState, previous: Option<FetchKey>, current: FetchKey) -> Option<FetchTicket> {
    if previous == Some(current) {
        return None;
    }
    Some(state.begin_fetch())
}

fn spawn_fetch(api: BrowserApi, listing: RwSignal<ListingState>, ticket: FetchTicket) {
    #[cfg(feature = "hydrate")]
    {
        use ats::api::ProfessionalsApi;

        use crate::util::notify::AlertNotifier;

        leptos::task::spawn_local(async move {
            let result = api.list(ticket.filter()).await;
            listing.update(|state| {
                state.apply(ticket, result, &AlertNotifier);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, listing, ticket);
    }
}
