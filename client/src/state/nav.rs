//! Navigation bar state: scroll threshold, active route, mobile menu.
//!
//! DESIGN
//! ======
//! `scroll_y` and `current_path` are samples of browser state pushed in by the
//! nav component (scroll listener, router location). Everything else is
//! derived from them on read.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scroll offset past which the nav bar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    pub scroll_y: f64,
    pub current_path: String,
    pub mobile_menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self { scroll_y: 0.0, current_path: "/".to_owned(), mobile_menu_open: false }
    }
}

impl NavState {
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scroll_y > SCROLL_THRESHOLD_PX
    }

    /// Exact path match; `/about` and `/about/` are different routes.
    #[must_use]
    pub fn is_active_route(&self, path: &str) -> bool {
        self.current_path == path
    }

    /// Solid background when scrolled or anywhere but the landing page.
    #[must_use]
    pub fn solid_background(&self) -> bool {
        self.is_scrolled() || self.current_path != "/"
    }

    pub fn set_scroll(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
    }

    /// Record a route change; the mobile menu always closes on navigation.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
        self.mobile_menu_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }
}
