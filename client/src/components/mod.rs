//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and the interactive widgets. Each one
//! owns its state in local signals backed by the pure types in `state`.

pub mod contact_form;
pub mod faq_list;
pub mod motion_section;
pub mod nav_bar;
pub mod savings_calculator;
pub mod site_footer;
pub mod step_selector;
pub mod testimonial_carousel;
