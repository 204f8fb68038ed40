//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! One guard, installed by the composition root, watches the current path and
//! applies the unauthenticated redirect to every route that asks for it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::AppRoute;
use crate::state::auth::AuthState;

/// True once the session request has finished and nobody is signed in.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated
}

/// True when `path` is a guarded route that the current state may not view.
/// Unknown paths are left to the router's fallback.
pub fn should_guard(path: &str, state: &AuthState) -> bool {
    AppRoute::from_path(path).is_some_and(AppRoute::requires_auth) && should_redirect_unauth(state)
}

/// Redirect to `/login` whenever a guarded route is shown without a user.
pub fn install_route_guard<F>(auth: ReadSignal<AuthState>, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let path = pathname.get();
        if auth.with(|state| should_guard(&path, state)) {
            navigate(AppRoute::Login.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
