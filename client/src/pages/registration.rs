//! Registration route.

use leptos::prelude::*;

#[component]
pub fn RegistrationPage() -> impl IntoView {
    view! {
        <section class="page page--registration">
            <h1>"Registration"</h1>
        </section>
    }
}
