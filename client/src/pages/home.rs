//! Authenticated home at `/app`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing target of the signed-in menu's home link. `AppRoute::Home` is a
//! guarded route, so the shell redirects signed-out visitors before this
//! renders for them.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page page--home">
            <h1>"redject"</h1>
        </section>
    }
}
