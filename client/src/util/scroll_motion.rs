//! Scroll-linked section motion.
//!
//! Sections animate as a pure function of scroll position: the progress
//! through a pinned section (or through its reveal window) is mapped to a
//! CSS transform. None of this feeds back into application state.
//!
//! Listeners are owned by the section that asks for them: `use_pin_progress`
//! and `use_reveal_progress` register a window scroll listener when the
//! section mounts and remove it in `on_cleanup`.

#[cfg(test)]
#[path = "scroll_motion_test.rs"]
mod scroll_motion_test;

use leptos::html::Section;
use leptos::prelude::*;

/// Progress at which a pinned section has finished entering.
pub const ENTRANCE_END: f64 = 0.3;
/// Progress at which a pinned section starts exiting.
pub const EXIT_START: f64 = 0.7;

/// Reveal starts when the section top reaches 80% of the viewport height.
pub const REVEAL_START: f64 = 0.8;
/// Reveal completes when the section top reaches 35% of the viewport height.
pub const REVEAL_END: f64 = 0.35;

/// Visual transform for one element. Translations are in viewport units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub x_vw: f64,
    pub y_vh: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Motion {
    /// Resting pose: in place, full size, opaque.
    pub const REST: Self = Self { x_vw: 0.0, y_vh: 0.0, scale: 1.0, opacity: 1.0 };
    /// Card fading in from slightly smaller.
    pub const GROW_IN: Self = Self { x_vw: 0.0, y_vh: 0.0, scale: 0.92, opacity: 0.0 };
    /// Panel rising from below.
    pub const RISE_IN: Self = Self { x_vw: 0.0, y_vh: 22.0, scale: 1.0, opacity: 0.0 };
    /// Short rise used by reveal-on-scroll blocks.
    pub const LIFT_IN: Self = Self { x_vw: 0.0, y_vh: 2.0, scale: 1.0, opacity: 0.0 };
    /// Card leaving to the left.
    pub const EXIT_LEFT: Self = Self { x_vw: -55.0, y_vh: 0.0, scale: 1.0, opacity: 0.0 };

    #[must_use]
    pub fn lerp(self, to: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            x_vw: lerp(self.x_vw, to.x_vw, t),
            y_vh: lerp(self.y_vh, to.y_vh, t),
            scale: lerp(self.scale, to.scale, t),
            opacity: lerp(self.opacity, to.opacity, t),
        }
    }

    /// Inline `style` value.
    #[must_use]
    pub fn style(self) -> String {
        format!(
            "transform: translate({:.3}vw, {:.3}vh) scale({:.4}); opacity: {:.3};",
            self.x_vw, self.y_vh, self.scale, self.opacity
        )
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Quadratic ease-in used for exits.
#[must_use]
pub fn ease_in_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Pinned-section choreography: enter over `[0, ENTRANCE_END]`, hold, then
/// exit over `[EXIT_START, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinnedMotion {
    pub enter_from: Motion,
    pub exit_to: Motion,
}

impl PinnedMotion {
    /// Hero card: already visible on load, exits left.
    pub const HERO: Self = Self { enter_from: Motion::REST, exit_to: Motion::EXIT_LEFT };
    pub const CARD: Self = Self { enter_from: Motion::GROW_IN, exit_to: Motion::EXIT_LEFT };
    pub const PANEL: Self = Self { enter_from: Motion::RISE_IN, exit_to: Motion::EXIT_LEFT };

    #[must_use]
    pub fn at(self, progress: f64) -> Motion {
        let p = progress.clamp(0.0, 1.0);
        if p < ENTRANCE_END {
            self.enter_from.lerp(Motion::REST, p / ENTRANCE_END)
        } else if p <= EXIT_START {
            Motion::REST
        } else {
            let t = (p - EXIT_START) / (1.0 - EXIT_START);
            Motion::REST.lerp(self.exit_to, ease_in_quad(t))
        }
    }
}

/// Progress through a pinned section whose sticky inner frame is one
/// viewport tall. `0.0` when the section top reaches the viewport top,
/// `1.0` when its bottom reaches the viewport bottom.
#[must_use]
pub fn pin_progress(section_top: f64, section_height: f64, viewport_height: f64) -> f64 {
    let travel = section_height - viewport_height;
    if travel <= 0.0 {
        return 0.0;
    }
    (-section_top / travel).clamp(0.0, 1.0)
}

/// Progress through the reveal window of a non-pinned section.
#[must_use]
pub fn reveal_progress(section_top: f64, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 1.0;
    }
    let start = viewport_height * REVEAL_START;
    let end = viewport_height * REVEAL_END;
    ((start - section_top) / (start - end)).clamp(0.0, 1.0)
}

/// Section geometry sampled on each scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

/// Pinned progress for `node`, updated on every window scroll.
pub fn use_pin_progress(node: NodeRef<Section>) -> ReadSignal<f64> {
    track_section(node, |r| pin_progress(r.top, r.height, r.viewport_height))
}

/// Reveal progress for `node`, updated on every window scroll.
pub fn use_reveal_progress(node: NodeRef<Section>) -> ReadSignal<f64> {
    track_section(node, |r| reveal_progress(r.top, r.viewport_height))
}

#[cfg(feature = "hydrate")]
fn track_section(node: NodeRef<Section>, measure: fn(SectionRect) -> f64) -> ReadSignal<f64> {
    let (progress, set_progress) = signal(0.0);

    let sample = move || {
        let Some(el) = node.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let viewport_height = window()
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        set_progress.set(measure(SectionRect { top: rect.top(), height: rect.height(), viewport_height }));
    };

    Effect::new(move || sample());
    let handle = window_event_listener(leptos::ev::scroll, move |_| sample());
    on_cleanup(move || handle.remove());

    progress
}

#[cfg(not(feature = "hydrate"))]
fn track_section(node: NodeRef<Section>, measure: fn(SectionRect) -> f64) -> ReadSignal<f64> {
    let _ = (node, measure);
    signal(0.0).0
}
