//! Scroll-linked section wrappers for the tour page.

use leptos::prelude::*;

use crate::util::scroll_motion::{Motion, PinnedMotion, use_pin_progress, use_reveal_progress};

/// A tall section whose inner frame sticks to the viewport while the
/// content moves through its entrance, settle and exit phases.
#[component]
pub fn PinnedSection(
    #[prop(optional)] id: Option<&'static str>,
    #[prop(default = PinnedMotion::PANEL)] motion: PinnedMotion,
    #[prop(default = "")] extra_class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<leptos::html::Section>::new();
    let progress = use_pin_progress(node);
    let style = move || motion.at(progress.get()).style();

    view! {
        <section node_ref=node id=id class=format!("motion-pinned {extra_class}")>
            <div class="motion-pinned__frame">
                <div class="motion-pinned__content" style=style>
                    {children()}
                </div>
            </div>
        </section>
    }
}

/// A regular-height section that fades up into place as it enters the
/// viewport and then stays put.
#[component]
pub fn RevealSection(
    #[prop(optional)] id: Option<&'static str>,
    #[prop(default = "")] extra_class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<leptos::html::Section>::new();
    let progress = use_reveal_progress(node);
    let style = move || Motion::LIFT_IN.lerp(Motion::REST, progress.get()).style();

    view! {
        <section node_ref=node id=id class=format!("motion-reveal {extra_class}")>
            <div class="motion-reveal__content" style=style>
                {children()}
            </div>
        </section>
    }
}
