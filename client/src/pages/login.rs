//! Login route. Credential exchange is owned by the auth backend; this page
//! only hosts it.

use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <section class="page page--login">
            <h1>"Login"</h1>
        </section>
    }
}
