//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is the single writer of `AuthState`. Components receive read-only
//! projections (`NavSlice`) and a dispatch callback from the composition root.
//!
//! DESIGN
//! ======
//! `reduce` is pure so every transition is unit-testable without a browser;
//! `AuthStore::dispatch` layers the network side effects on top of it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::{Session, User};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State before the session request has answered.
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Project the fields the navigation shell reads.
    ///
    /// User fields are never touched unless the session is authenticated.
    pub fn nav_slice(&self) -> NavSlice {
        let username = if self.is_authenticated {
            self.user.as_ref().map(|user| user.username.clone())
        } else {
            None
        };
        NavSlice { is_authenticated: self.is_authenticated, username }
    }
}

/// Read-only slice of `AuthState` consumed by `NavigationContainer`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavSlice {
    pub is_authenticated: bool,
    pub username: Option<String>,
}

/// Intents accepted by the auth store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    /// A session request is in flight.
    SessionLoading,
    /// The session request finished.
    SessionLoaded(Session),
    Logout,
}

/// Apply `action` to `state`, returning the next state.
pub fn reduce(state: &AuthState, action: AuthAction) -> AuthState {
    match action {
        AuthAction::SessionLoading => AuthState { loading: true, ..state.clone() },
        AuthAction::SessionLoaded(Session { is_authenticated, user }) => AuthState {
            is_authenticated,
            user: user.filter(|_| is_authenticated),
            loading: false,
        },
        AuthAction::Logout => AuthState::default(),
    }
}

/// Reactive owner of `AuthState`.
#[derive(Clone, Copy, Debug)]
pub struct AuthStore {
    state: RwSignal<AuthState>,
}

impl AuthStore {
    pub fn new(initial: AuthState) -> Self {
        Self { state: RwSignal::new(initial) }
    }

    /// Read-only view of the full state.
    pub fn state(self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Reactive `NavSlice`; recomputed on every state change.
    pub fn nav_slice(self) -> Signal<NavSlice> {
        let state = self.state;
        Signal::derive(move || state.with(AuthState::nav_slice))
    }

    /// Apply an intent. `Logout` also ends the server session in the browser;
    /// local state is cleared without waiting for the response.
    pub fn dispatch(self, action: AuthAction) {
        let is_logout = matches!(action, AuthAction::Logout);
        self.state.update(|state| *state = reduce(state, action));

        if is_logout {
            #[cfg(feature = "hydrate")]
            {
                log::info!("auth: logout dispatched");
                leptos::task::spawn_local(crate::net::api::logout());
            }
        }
    }

    /// Ask the server for an existing session and record the result.
    pub fn load_session(self) {
        self.dispatch(AuthAction::SessionLoading);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // A failed request counts as signed out.
            let session = crate::net::api::fetch_session().await.unwrap_or_default();
            log::debug!("auth: session loaded (signed in: {})", session.is_authenticated);
            self.dispatch(AuthAction::SessionLoaded(session));
        });
    }
}
