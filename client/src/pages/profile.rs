//! Profile page for the signed-in user.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn ProfilePage(auth: ReadSignal<AuthState>) -> impl IntoView {
    let username = move || auth.with(|state| state.nav_slice().username.unwrap_or_default());
    let email = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .filter(|_| state.is_authenticated)
                .and_then(|user| user.email.clone())
        })
    };

    view! {
        <section class="page page--profile">
            <h1>"Profile"</h1>
            <p class="profile__username">{username}</p>
            <Show when=move || email().is_some()>
                <p class="profile__email">{move || email().unwrap_or_default()}</p>
            </Show>
        </section>
    }
}
