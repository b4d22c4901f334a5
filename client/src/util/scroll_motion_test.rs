use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Motion
// =============================================================

#[test]
fn lerp_endpoints_are_exact() {
    assert_eq!(Motion::GROW_IN.lerp(Motion::REST, 0.0), Motion::GROW_IN);
    assert_eq!(Motion::GROW_IN.lerp(Motion::REST, 1.0), Motion::REST);
}

#[test]
fn lerp_clamps_parameter() {
    assert_eq!(Motion::REST.lerp(Motion::EXIT_LEFT, 2.0), Motion::EXIT_LEFT);
    assert_eq!(Motion::REST.lerp(Motion::EXIT_LEFT, -1.0), Motion::REST);
}

#[test]
fn style_renders_transform_and_opacity() {
    assert_eq!(
        Motion::REST.style(),
        "transform: translate(0.000vw, 0.000vh) scale(1.0000); opacity: 1.000;"
    );
}

#[test]
fn ease_in_quad_is_slow_then_fast() {
    assert_eq!(ease_in_quad(0.0), 0.0);
    assert_eq!(ease_in_quad(0.5), 0.25);
    assert_eq!(ease_in_quad(1.0), 1.0);
    assert_eq!(ease_in_quad(3.0), 1.0);
}

// =============================================================
// PinnedMotion
// =============================================================

#[test]
fn pinned_card_enters_settles_and_exits() {
    let motion = PinnedMotion::CARD;
    assert_eq!(motion.at(0.0), Motion::GROW_IN);
    assert_eq!(motion.at(ENTRANCE_END), Motion::REST);
    assert_eq!(motion.at(0.5), Motion::REST);
    assert_eq!(motion.at(EXIT_START), Motion::REST);
    assert_eq!(motion.at(1.0), Motion::EXIT_LEFT);
}

#[test]
fn pinned_entrance_is_linear() {
    let mid = PinnedMotion::PANEL.at(ENTRANCE_END / 2.0);
    assert!(approx(mid.y_vh, 11.0));
    assert!(approx(mid.opacity, 0.5));
}

#[test]
fn pinned_exit_eases_in() {
    let mid = PinnedMotion::HERO.at(0.85);
    assert!(approx(mid.x_vw, -55.0 * 0.25));
}

#[test]
fn hero_is_visible_at_top() {
    assert_eq!(PinnedMotion::HERO.at(0.0), Motion::REST);
}

// =============================================================
// Progress sampling
// =============================================================

#[test]
fn pin_progress_tracks_scroll_through_section() {
    // 230vh section in a 1000px viewport travels 1300px.
    assert_eq!(pin_progress(0.0, 2300.0, 1000.0), 0.0);
    assert!(approx(pin_progress(-650.0, 2300.0, 1000.0), 0.5));
    assert_eq!(pin_progress(-1300.0, 2300.0, 1000.0), 1.0);
}

#[test]
fn pin_progress_clamps_outside_section() {
    assert_eq!(pin_progress(400.0, 2300.0, 1000.0), 0.0);
    assert_eq!(pin_progress(-5000.0, 2300.0, 1000.0), 1.0);
}

#[test]
fn pin_progress_short_section_never_moves() {
    assert_eq!(pin_progress(-200.0, 800.0, 1000.0), 0.0);
}

#[test]
fn reveal_progress_spans_window() {
    assert_eq!(reveal_progress(900.0, 1000.0), 0.0);
    assert_eq!(reveal_progress(800.0, 1000.0), 0.0);
    assert!(approx(reveal_progress(575.0, 1000.0), 0.5));
    assert!(approx(reveal_progress(350.0, 1000.0), 1.0));
    assert_eq!(reveal_progress(-100.0, 1000.0), 1.0);
}

#[test]
fn reveal_progress_without_viewport_shows_content() {
    assert_eq!(reveal_progress(500.0, 0.0), 1.0);
}
