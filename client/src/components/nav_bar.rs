//! Fixed top navigation with scroll-aware styling and a mobile menu.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::content::{BRAND, NAV_LINKS};
use crate::state::nav::NavState;

/// Site navigation bar.
///
/// Turns solid once the page scrolls past the threshold (or on any page but
/// home), highlights the current route, and closes the mobile menu on
/// navigation.
#[component]
pub fn NavBar() -> impl IntoView {
    let location = use_location();
    let nav = RwSignal::new(NavState { current_path: location.pathname.get_untracked(), ..NavState::default() });

    Effect::new(move || {
        let path = location.pathname.get();
        nav.update(|n| n.set_path(path));
    });

    #[cfg(feature = "hydrate")]
    {
        let sample = move || {
            let y = window().scroll_y().unwrap_or(0.0);
            nav.update(|n| n.set_scroll(y));
        };
        Effect::new(move || sample());
        let handle = window_event_listener(leptos::ev::scroll, move |_| sample());
        on_cleanup(move || handle.remove());
    }

    let solid = Memo::new(move |_| nav.with(NavState::solid_background));
    let menu_open = Memo::new(move |_| nav.with(|n| n.mobile_menu_open));
    let toggle_menu = move |_| nav.update(NavState::toggle_mobile_menu);

    let links = move |mobile: bool| {
        NAV_LINKS
            .iter()
            .map(|link| {
                let href = link.href;
                let active = move || nav.with(|n| n.is_active_route(href));
                view! {
                    <A href=href attr:class=move || link_class(mobile, active())>
                        {link.label}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="nav-bar" class:nav-bar--solid=move || solid.get()>
            <div class="nav-bar__inner">
                <A href="/" attr:class="nav-bar__logo">
                    <span class="nav-bar__logo-mark" aria-hidden="true">"\u{2600}"</span>
                    <span class="nav-bar__logo-text">{BRAND}</span>
                </A>
                <div class="nav-bar__links">{links(false)}</div>
                <A href="/contact" attr:class="btn btn--accent nav-bar__cta">"Get a quote"</A>
                <button
                    class="nav-bar__menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=toggle_menu
                >
                    {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>
        </nav>
        <div class="mobile-menu" class:mobile-menu--open=move || menu_open.get()>
            <div class="mobile-menu__links">
                {links(true)}
                <A href="/contact" attr:class="btn btn--accent">"Get a quote"</A>
            </div>
        </div>
    }
}

fn link_class(mobile: bool, active: bool) -> &'static str {
    match (mobile, active) {
        (false, false) => "nav-bar__link",
        (false, true) => "nav-bar__link nav-bar__link--active",
        (true, false) => "mobile-menu__link",
        (true, true) => "mobile-menu__link mobile-menu__link--active",
    }
}
