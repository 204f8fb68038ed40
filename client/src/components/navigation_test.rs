use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

fn links(variant: MenuVariant) -> Vec<(&'static str, AppRoute)> {
    variant
        .entries()
        .iter()
        .filter_map(|entry| match entry.action {
            NavAction::Go(route) => Some((entry.label, route)),
            NavAction::Logout => None,
        })
        .collect()
}

fn logout_count(variant: MenuVariant) -> usize {
    variant.entries().iter().filter(|entry| entry.action == NavAction::Logout).count()
}

// =============================================================
// MenuVariant
// =============================================================

#[test]
fn from_flag_only_true_signs_in() {
    assert_eq!(MenuVariant::from_flag(true), MenuVariant::SignedIn);
    assert_eq!(MenuVariant::from_flag(Some(true)), MenuVariant::SignedIn);
    assert_eq!(MenuVariant::from_flag(false), MenuVariant::SignedOut);
    assert_eq!(MenuVariant::from_flag(None::<bool>), MenuVariant::SignedOut);
}

#[test]
fn signed_in_menu_is_home_profile_logout() {
    let entries = MenuVariant::SignedIn.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(links(MenuVariant::SignedIn), vec![("redject", AppRoute::Home), ("Profile", AppRoute::Profile)]);
    assert_eq!(entries[2], NavEntry { label: "Logout", action: NavAction::Logout });
}

#[test]
fn signed_in_menu_has_no_login_or_registration() {
    let routes: Vec<_> = links(MenuVariant::SignedIn).into_iter().map(|(_, r)| r).collect();
    assert!(!routes.contains(&AppRoute::Login));
    assert!(!routes.contains(&AppRoute::Registration));
}

#[test]
fn signed_out_menu_is_home_login_registration() {
    assert_eq!(MenuVariant::SignedOut.entries().len(), 3);
    assert_eq!(
        links(MenuVariant::SignedOut),
        vec![("redject", AppRoute::Landing), ("Login", AppRoute::Login), ("Registration", AppRoute::Registration)]
    );
}

#[test]
fn signed_out_menu_has_no_profile_or_logout() {
    assert_eq!(logout_count(MenuVariant::SignedOut), 0);
    assert!(!links(MenuVariant::SignedOut).iter().any(|(_, r)| *r == AppRoute::Profile));
}

#[test]
fn signed_in_menu_has_exactly_one_logout_trigger() {
    assert_eq!(logout_count(MenuVariant::SignedIn), 1);
}

#[test]
fn switching_flag_replaces_whole_menu() {
    let before = MenuVariant::from_flag(false).entries();
    let after = MenuVariant::from_flag(true).entries();
    for entry in after {
        assert!(!before.iter().any(|b| b.action == entry.action), "{entry:?} carried over");
    }
}

// =============================================================
// activate
// =============================================================

#[test]
fn activating_logout_calls_logout_once_and_never_navigates() {
    let logouts = Cell::new(0);
    let navigated = RefCell::new(Vec::new());
    activate(NavAction::Logout, |route| navigated.borrow_mut().push(route), || logouts.set(logouts.get() + 1));
    assert_eq!(logouts.get(), 1);
    assert!(navigated.borrow().is_empty());
}

#[test]
fn activating_link_navigates_and_never_logs_out() {
    let logouts = Cell::new(0);
    let navigated = RefCell::new(Vec::new());
    activate(
        NavAction::Go(AppRoute::Profile),
        |route| navigated.borrow_mut().push(route),
        || logouts.set(logouts.get() + 1),
    );
    assert_eq!(logouts.get(), 0);
    assert_eq!(*navigated.borrow(), vec![AppRoute::Profile]);
}

#[test]
fn every_signed_out_entry_is_a_link() {
    let logouts = Cell::new(0);
    for entry in MenuVariant::SignedOut.entries() {
        activate(entry.action, |_| {}, || logouts.set(logouts.get() + 1));
    }
    assert_eq!(logouts.get(), 0);
}

// =============================================================
// Click filtering
// =============================================================

#[test]
fn plain_primary_click_is_handled() {
    assert!(is_plain_click(ClickInput::primary()));
}

#[test]
fn modified_clicks_are_left_to_the_browser() {
    let base = ClickInput::primary();
    for input in [
        ClickInput { ctrl: true, ..base },
        ClickInput { meta: true, ..base },
        ClickInput { shift: true, ..base },
        ClickInput { alt: true, ..base },
    ] {
        assert!(!is_plain_click(input), "{input:?}");
    }
}

#[test]
fn non_primary_buttons_are_left_to_the_browser() {
    assert!(!is_plain_click(ClickInput { button: 1, ..ClickInput::primary() }));
    assert!(!is_plain_click(ClickInput { button: 2, ..ClickInput::primary() }));
}

#[test]
fn enter_and_space_activate_buttons() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(is_activation_key("Spacebar"));
    assert!(!is_activation_key("Tab"));
    assert!(!is_activation_key("a"));
}

// =============================================================
// entry_handler
// =============================================================

fn logout_entry() -> NavEntry {
    MenuVariant::SignedIn.entries()[2]
}

fn profile_entry() -> NavEntry {
    MenuVariant::SignedIn.entries()[1]
}

#[test]
fn logout_handler_runs_logout_once_per_activation() {
    let logouts = Rc::new(Cell::new(0));
    let navigations = Rc::new(Cell::new(0));
    let handle = entry_handler(
        logout_entry(),
        {
            let navigations = navigations.clone();
            move |_| navigations.set(navigations.get() + 1)
        },
        {
            let logouts = logouts.clone();
            move || logouts.set(logouts.get() + 1)
        },
    );

    assert!(handle(ClickInput::primary()));
    assert_eq!(logouts.get(), 1);
    assert!(handle(ClickInput { ctrl: true, ..ClickInput::primary() }));
    assert_eq!(logouts.get(), 2);
    assert_eq!(navigations.get(), 0);
}

#[test]
fn logout_handler_ignores_secondary_button() {
    let logouts = Rc::new(Cell::new(0));
    let handle = entry_handler(logout_entry(), |_| {}, {
        let logouts = logouts.clone();
        move || logouts.set(logouts.get() + 1)
    });
    assert!(!handle(ClickInput { button: 2, ..ClickInput::primary() }));
    assert_eq!(logouts.get(), 0);
}

#[test]
fn link_handler_navigates_on_plain_click() {
    let navigated = Rc::new(RefCell::new(Vec::new()));
    let handle = entry_handler(
        profile_entry(),
        {
            let navigated = navigated.clone();
            move |route| navigated.borrow_mut().push(route)
        },
        || {
            panic!("link must not log out");
        },
    );
    assert!(handle(ClickInput::primary()));
    assert_eq!(*navigated.borrow(), vec![AppRoute::Profile]);
}

#[test]
fn link_handler_leaves_ctrl_click_to_browser() {
    let navigated = Rc::new(RefCell::new(Vec::new()));
    let handle = entry_handler(
        profile_entry(),
        {
            let navigated = navigated.clone();
            move |route| navigated.borrow_mut().push(route)
        },
        || {},
    );
    assert!(!handle(ClickInput { ctrl: true, ..ClickInput::primary() }));
    assert!(!handle(ClickInput { meta: true, ..ClickInput::primary() }));
    assert!(!handle(ClickInput { button: 1, ..ClickInput::primary() }));
    assert!(navigated.borrow().is_empty());
}

// =============================================================
// SSR rendering
// =============================================================

#[cfg(feature = "ssr")]
mod render {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    fn render_shell(is_authenticated: bool) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let on_logout = Callback::new(|()| {});
            let on_navigate = Callback::new(|_: AppRoute| {});
            view! {
                <NavigationContainer is_authenticated=is_authenticated on_logout=on_logout on_navigate=on_navigate>
                    <p class="routed-page">"routed page"</p>
                </NavigationContainer>
            }
            .to_html()
        })
    }

    #[test]
    fn signed_in_markup_links_home_and_profile() {
        let html = render_shell(true);
        assert!(html.contains(r#"href="/app""#));
        assert!(html.contains(r#"href="/profile""#));
        assert!(html.contains("Logout"));
        assert!(!html.contains(r#"href="/login""#));
        assert!(!html.contains(r#"href="/registration""#));
    }

    #[test]
    fn signed_out_markup_links_login_and_registration() {
        let html = render_shell(false);
        assert!(html.contains(r#"href="/""#));
        assert!(html.contains(r#"href="/login""#));
        assert!(html.contains(r#"href="/registration""#));
        assert!(!html.contains("Logout"));
        assert!(!html.contains(r#"href="/profile""#));
    }

    #[test]
    fn children_follow_the_menu_in_both_branches() {
        for flag in [true, false] {
            let html = render_shell(flag);
            let menu_end = html.find("</ul>").expect("menu rendered");
            let child = html.find("routed page").expect("child rendered");
            assert!(child > menu_end);
        }
    }

    #[test]
    fn logout_trigger_is_keyboard_reachable() {
        let html = render_shell(true);
        let start = html.find("navigation__item--logout").expect("logout trigger rendered");
        let tag_end = start + html[start..].find('>').expect("tag closed");
        let tag = &html[start..tag_end];
        assert!(tag.contains(r#"role="button""#));
        assert!(tag.contains(r#"tabindex="0""#));
        let item_end = tag_end + html[tag_end..].find("</li>").expect("item closed");
        assert!(html[tag_end..item_end].contains("Logout"));
    }
}
