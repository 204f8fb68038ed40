//! Top navigation shell wrapping every routed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` renders the router outlet as children of `NavigationContainer`, so the
//! menu stays mounted across route changes while page content swaps beneath it.
//!
//! DESIGN
//! ======
//! The container receives its auth flag, logout dispatch, and navigation
//! handle as props. It never reads the store or router directly, which keeps
//! the menu a pure function of `is_authenticated`.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;

use crate::routes::AppRoute;

/// Which fixed menu the shell shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuVariant {
    SignedIn,
    SignedOut,
}

impl MenuVariant {
    /// Only an explicit `true` selects the signed-in menu; `false`, absent,
    /// and unknown flags all fall back to the signed-out menu.
    pub fn from_flag(flag: impl Into<Option<bool>>) -> Self {
        if flag.into() == Some(true) { Self::SignedIn } else { Self::SignedOut }
    }

    pub fn entries(self) -> &'static [NavEntry] {
        match self {
            Self::SignedIn => &SIGNED_IN_MENU,
            Self::SignedOut => &SIGNED_OUT_MENU,
        }
    }
}

/// What activating a menu entry does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Navigate to an in-app route.
    Go(AppRoute),
    /// Fire the logout intent. Not a link.
    Logout,
}

/// One item in the navigation list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub action: NavAction,
}

const SIGNED_IN_MENU: [NavEntry; 3] = [
    NavEntry { label: "redject", action: NavAction::Go(AppRoute::Home) },
    NavEntry { label: "Profile", action: NavAction::Go(AppRoute::Profile) },
    NavEntry { label: "Logout", action: NavAction::Logout },
];

const SIGNED_OUT_MENU: [NavEntry; 3] = [
    NavEntry { label: "redject", action: NavAction::Go(AppRoute::Landing) },
    NavEntry { label: "Login", action: NavAction::Go(AppRoute::Login) },
    NavEntry { label: "Registration", action: NavAction::Go(AppRoute::Registration) },
];

/// Route a menu activation to exactly one of the two handles.
pub fn activate(action: NavAction, navigate: impl FnOnce(AppRoute), logout: impl FnOnce()) {
    match action {
        NavAction::Go(route) => navigate(route),
        NavAction::Logout => logout(),
    }
}

/// Button and modifier state of a pointer or keyboard activation.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickInput {
    /// `MouseEvent.button`; 0 is the primary button.
    pub button: i16,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl ClickInput {
    /// Unmodified primary-button click; also what Enter/Space on a focused
    /// trigger counts as.
    pub fn primary() -> Self {
        Self::default()
    }

    pub fn from_mouse(ev: &leptos::ev::MouseEvent) -> Self {
        Self {
            button: ev.button(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
            alt: ev.alt_key(),
        }
    }
}

/// A click the app should handle itself. Modified or non-primary clicks are
/// left to the browser (new tab, new window, download).
pub fn is_plain_click(input: ClickInput) -> bool {
    input.button == 0 && !(input.ctrl || input.meta || input.shift || input.alt)
}

/// Keys that activate a focused `role="button"` element.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Build the activation handler for one menu entry.
///
/// The handler returns `true` when it consumed the activation, in which case
/// the caller must suppress the browser default. Links only consume plain
/// clicks; the logout trigger consumes any primary-button activation.
pub fn entry_handler<N, L>(entry: NavEntry, navigate: N, logout: L) -> impl Fn(ClickInput) -> bool + Clone + 'static
where
    N: Fn(AppRoute) + Clone + 'static,
    L: Fn() + Clone + 'static,
{
    move |input: ClickInput| {
        let handled = match entry.action {
            NavAction::Go(_) => is_plain_click(input),
            NavAction::Logout => input.button == 0,
        };
        if handled {
            activate(entry.action, &navigate, &logout);
        }
        handled
    }
}

/// Presentational frame for the menu and the page beneath it.
#[component]
pub fn Navigation(children: Children) -> impl IntoView {
    view! { <nav class="navigation">{children()}</nav> }
}

/// Auth-aware navigation menu followed by `children`.
#[component]
pub fn NavigationContainer(
    #[prop(into)] is_authenticated: Signal<bool>,
    on_logout: Callback<()>,
    on_navigate: Callback<AppRoute>,
    children: Children,
) -> impl IntoView {
    let menu = move || {
        MenuVariant::from_flag(is_authenticated.get())
            .entries()
            .iter()
            .map(|entry| nav_item(*entry, on_navigate, on_logout))
            .collect_view()
    };

    view! {
        <Navigation>
            <ul class="navigation__menu">{menu}</ul>
            {children()}
        </Navigation>
    }
}

fn nav_item(entry: NavEntry, on_navigate: Callback<AppRoute>, on_logout: Callback<()>) -> AnyView {
    let handle = entry_handler(entry, move |route| on_navigate.run(route), move || on_logout.run(()));
    let on_click = {
        let handle = handle.clone();
        move |ev: leptos::ev::MouseEvent| {
            if handle(ClickInput::from_mouse(&ev)) {
                ev.prevent_default();
            }
        }
    };

    match entry.action {
        NavAction::Go(route) => view! {
            <li class="navigation__item">
                <a href=route.path() on:click=on_click>{entry.label}</a>
            </li>
        }
        .into_any(),
        NavAction::Logout => {
            let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
                if is_activation_key(&ev.key()) && handle(ClickInput::primary()) {
                    ev.prevent_default();
                }
            };
            view! {
                <li
                    class="navigation__item navigation__item--logout"
                    role="button"
                    tabindex="0"
                    on:click=on_click
                    on:keydown=on_keydown
                >
                    {entry.label}
                </li>
            }
            .into_any()
        }
    }
}
