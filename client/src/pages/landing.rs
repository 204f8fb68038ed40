//! Public landing page at `/`.

use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <section class="page page--landing">
            <h1>"redject"</h1>
            <p>"Sign in or register to get started."</p>
        </section>
    }
}
