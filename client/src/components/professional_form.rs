//! Form for a new professional.
//!
//! Required fields carry the native `required` attribute, so the browser
//! blocks submission before `on_submit` ever runs.

use ats::types::{DraftField, ProfessionalDraft, Source};
use leptos::prelude::*;

#[component]
pub fn ProfessionalForm(
    draft: RwSignal<ProfessionalDraft>,
    on_field: Callback<(DraftField, String)>,
    on_submit: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <section class="card">
            <h2 class="card__title">"Add Professional"</h2>
            <form class="professional-form" on:submit=handle_submit>
                {DraftField::TEXT
                    .into_iter()
                    .map(|field| {
                        view! {
                            <label class="form-field">
                                <span class="form-field__label">{field.label()}</span>
                                <input
                                    class="form-field__input"
                                    type="text"
                                    name=field.name()
                                    required=field.is_required()
                                    prop:value=move || draft.with(|d| d.get(field).to_owned())
                                    on:input=move |ev| on_field.run((field, event_target_value(&ev)))
                                />
                            </label>
                        }
                    })
                    .collect_view()}
                <label class="form-field">
                    <span class="form-field__label">{DraftField::Source.label()}</span>
                    <select
                        class="form-field__input"
                        name=DraftField::Source.name()
                        prop:value=move || draft.with(|d| d.source.as_str())
                        on:change=move |ev| on_field.run((DraftField::Source, event_target_value(&ev)))
                    >
                        {Source::ALL
                            .into_iter()
                            .map(|source| view! { <option value=source.as_str()>{source.as_str()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Submit"
                </button>
            </form>
        </section>
    }
}
