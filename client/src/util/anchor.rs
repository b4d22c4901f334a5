//! In-page anchor helpers for the "Get a quote" style buttons.
//!
//! Smooth scrolling requires a browser environment; on the server these are
//! no-ops.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Element id of the section holding the quote form.
pub const CONTACT_ANCHOR: &str = "contact";

/// `#id` selector for an element id.
#[must_use]
pub fn selector(id: &str) -> String {
    format!("#{}", id.trim_start_matches('#'))
}

/// Smoothly scroll the element with `id` into view. Missing elements are ignored.
pub fn scroll_to(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(Some(el)) = doc.query_selector(&selector(id)) else {
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
