use super::*;

// =============================================================
// NavState defaults
// =============================================================

#[test]
fn nav_state_default_at_top_of_home() {
    let state = NavState::default();
    assert!(!state.is_scrolled());
    assert!(state.is_active_route("/"));
    assert!(!state.mobile_menu_open);
    assert!(!state.solid_background());
}

// =============================================================
// Scroll threshold
// =============================================================

#[test]
fn scrolled_only_strictly_past_threshold() {
    let mut state = NavState::default();
    state.set_scroll(100.0);
    assert!(!state.is_scrolled());
    state.set_scroll(100.5);
    assert!(state.is_scrolled());
    assert!(state.solid_background());
    state.set_scroll(0.0);
    assert!(!state.is_scrolled());
}

// =============================================================
// Routes
// =============================================================

#[test]
fn active_route_is_exact_match() {
    let mut state = NavState::default();
    state.set_path("/about");
    assert!(state.is_active_route("/about"));
    assert!(!state.is_active_route("/about/"));
    assert!(!state.is_active_route("/"));
}

#[test]
fn non_home_route_has_solid_background() {
    let mut state = NavState::default();
    state.set_path("/contact");
    assert!(!state.is_scrolled());
    assert!(state.solid_background());
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn mobile_menu_toggles() {
    let mut state = NavState::default();
    state.toggle_mobile_menu();
    assert!(state.mobile_menu_open);
    state.toggle_mobile_menu();
    assert!(!state.mobile_menu_open);
}

#[test]
fn route_change_closes_mobile_menu() {
    let mut state = NavState::default();
    state.toggle_mobile_menu();
    state.set_path("/services");
    assert!(!state.mobile_menu_open);
}
