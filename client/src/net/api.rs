//! REST API helpers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`()` outputs instead of panics so session and logout
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Session;

pub const CURRENT_USER_ENDPOINT: &str = "/api/auth/me";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

#[cfg(any(test, feature = "hydrate"))]
fn logout_failed_message(status: u16) -> String {
    format!("logout failed: {status}")
}

/// Fetch the current session.
/// Returns `None` if the request fails or on the server.
pub async fn fetch_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CURRENT_USER_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Session>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// End the server session. Failures are logged and otherwise ignored.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        match gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            Ok(resp) if !resp.ok() => log::warn!("{}", logout_failed_message(resp.status())),
            Ok(_) => {}
            Err(e) => log::warn!("logout request failed: {e}"),
        }
    }
}
