//! Add-professional page: owns the draft and runs the submission.

use ats::types::{DraftField, ProfessionalDraft};
use leptos::prelude::*;

use crate::components::professional_form::ProfessionalForm;
use crate::net::api::BrowserApi;

#[component]
pub fn AddProfessionalPage() -> impl IntoView {
    let api = expect_context::<BrowserApi>();
    let draft = RwSignal::new(ProfessionalDraft::default());
    let busy = RwSignal::new(false);

    let on_field = Callback::new(move |(field, value): (DraftField, String)| {
        draft.update(|d| {
            if let Err(err) = d.set(field, &value) {
                tracing::warn!(error = %err, field = field.name(), "rejected field update");
            }
        });
    });

    let on_submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        spawn_submit(api.clone(), draft, busy);
    });

    view! { <ProfessionalForm draft on_field on_submit busy/> }
}

/// Submit a snapshot of the draft; reset it only once the server accepted it.
fn spawn_submit(api: BrowserApi, draft: RwSignal<ProfessionalDraft>, busy: RwSignal<bool>) {
    let snapshot = draft.get_untracked();
    #[cfg(feature = "hydrate")]
    {
        use ats::flows::submission::submit_draft;

        use crate::util::notify::AlertNotifier;

        leptos::task::spawn_local(async move {
            if submit_draft(&api, &AlertNotifier, &snapshot).await.is_created() {
                draft.set(ProfessionalDraft::default());
            }
            busy.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, draft, snapshot);
        busy.set(false);
    }
}
