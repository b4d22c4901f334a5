//! Site footer with link columns and a back-to-top control.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::{BRAND, CONTACT_EMAIL, CONTACT_PHONE, NAV_LINKS};
use crate::util::anchor;

/// Element id placed at the top of every page.
pub const TOP_ANCHOR: &str = "top";

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div class="site-footer__brand">
                    <span class="site-footer__logo">{BRAND}</span>
                    <p class="site-footer__blurb">
                        "Powering homes and businesses with clean, renewable solar energy."
                    </p>
                </div>
                <div class="site-footer__column">
                    <h4>"Company"</h4>
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <A href=link.href>{link.label}</A> })
                        .collect_view()}
                </div>
                <div class="site-footer__column">
                    <h4>"Contact"</h4>
                    <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                    <span>{CONTACT_PHONE}</span>
                </div>
            </div>
            <div class="site-footer__bottom">
                <span>{format!("\u{a9} {BRAND} Solar. All rights reserved.")}</span>
                <button class="site-footer__top" aria-label="Back to top" on:click=move |_| anchor::scroll_to(TOP_ANCHOR)>
                    "\u{2191}"
                </button>
            </div>
        </footer>
    }
}
