use super::*;
use ats::api::ApiError;
use ats::flows::listing::{FetchOutcome, ListingPhase};
use ats::notify::TracingNotifier;

fn run_effect(state: &mut ListingState, previous: Option<FetchKey>) -> (Option<FetchTicket>, FetchKey) {
    let current = state.fetch_key();
    (fetch_on_key_change(state, previous, current), current)
}

#[test]
fn first_run_fetches_unscoped() {
    let mut state = ListingState::default();

    let (ticket, _) = run_effect(&mut state, None);

    let ticket = ticket.expect("mount should fetch");
    assert_eq!(ticket.filter(), None);
    assert!(state.is_loading());
}

#[test]
fn unchanged_key_does_not_fetch() {
    let mut state = ListingState::default();
    let (first, seen) = run_effect(&mut state, None);
    state.apply(first.unwrap(), Ok(Vec::new()), &TracingNotifier);

    state.set_filter(None);
    let (ticket, _) = run_effect(&mut state, Some(seen));

    assert!(ticket.is_none());
    assert_eq!(*state.phase(), ListingPhase::Displaying);
}

#[test]
fn filter_change_fetches_scoped() {
    let mut state = ListingState::default();
    let (_, seen) = run_effect(&mut state, None);

    state.set_filter(Some(Source::Internal));
    let (ticket, _) = run_effect(&mut state, Some(seen));

    assert_eq!(ticket.unwrap().filter(), Some(Source::Internal));
}

#[test]
fn retry_after_failure_fetches_same_filter() {
    let mut state = ListingState::default();
    state.set_filter(Some(Source::Partner));
    let (first, seen) = run_effect(&mut state, None);
    let outcome = state.apply(first.unwrap(), Err(ApiError::Request("offline".to_owned())), &TracingNotifier);
    assert_eq!(outcome, FetchOutcome::Failed);

    state.retry();
    let (ticket, _) = run_effect(&mut state, Some(seen));

    assert_eq!(ticket.unwrap().filter(), Some(Source::Partner));
    assert!(state.is_loading());
}

#[test]
fn reselect_after_failure_fetches_again() {
    let mut state = ListingState::default();
    let (first, seen) = run_effect(&mut state, None);
    state.apply(first.unwrap(), Err(ApiError::Request("offline".to_owned())), &TracingNotifier);

    state.set_filter(None);
    let (ticket, _) = run_effect(&mut state, Some(seen));

    assert!(ticket.is_some());
}
