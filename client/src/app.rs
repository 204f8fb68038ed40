//! Root application component: the composition root.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates the auth store once and hands each consumer exactly the slice
//! or callback it needs. Nothing downstream looks state up from context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::navigation::NavigationContainer;
use crate::pages::{
    home::HomePage, landing::LandingPage, login::LoginPage, profile::ProfilePage, registration::RegistrationPage,
};
use crate::routes::AppRoute;
use crate::state::auth::{AuthAction, AuthState, AuthStore};
use crate::util::auth::install_route_guard;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthStore::new(AuthState::pending());
    auth.load_session();

    view! {
        <Stylesheet id="leptos" href="/pkg/redject.css"/>
        <Title text="redject"/>

        <Router>
            <RoutedShell auth=auth/>
        </Router>
    }
}

/// Router-scoped half of the composition root; `use_navigate` and
/// `use_location` need the router context `App` installs.
#[component]
fn RoutedShell(auth: AuthStore) -> impl IntoView {
    let navigate = use_navigate();
    let state = auth.state();
    install_route_guard(state, use_location().pathname, navigate.clone());

    let on_navigate = Callback::new(move |route: AppRoute| navigate(route.path(), NavigateOptions::default()));
    let on_logout = Callback::new(move |()| auth.dispatch(AuthAction::Logout));

    let nav = auth.nav_slice();
    let is_authenticated = Signal::derive(move || nav.with(|slice| slice.is_authenticated));

    view! {
        <NavigationContainer is_authenticated=is_authenticated on_logout=on_logout on_navigate=on_navigate>
            <main class="page-outlet">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment(AppRoute::Landing.segment()) view=LandingPage/>
                    <Route path=StaticSegment(AppRoute::Home.segment()) view=HomePage/>
                    <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                    <Route path=StaticSegment(AppRoute::Registration.segment()) view=RegistrationPage/>
                    <Route
                        path=StaticSegment(AppRoute::Profile.segment())
                        view=move || view! { <ProfilePage auth=state/> }
                    />
                </Routes>
            </main>
        </NavigationContainer>
    }
}
