//! App chrome: title bar with navigation between the list and the form.

use leptos::prelude::*;
use leptos_router::components::A;

pub const DEFAULT_TITLE: &str = "Demo ATS";

#[component]
pub fn Layout(#[prop(optional, into)] title: Option<String>, children: Children) -> impl IntoView {
    let title = title.unwrap_or_else(|| DEFAULT_TITLE.to_owned());

    view! {
        <header class="app-bar">
            <span class="app-bar__title">{title}</span>
            <nav class="app-bar__nav">
                <A href="/">"View List"</A>
                <A href="/add">"Add Professional"</A>
            </nav>
        </header>
        <main class="container">{children()}</main>
    }
}
