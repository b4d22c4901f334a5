//! Project gallery.

use leptos::prelude::*;

use crate::components::testimonial_carousel::TestimonialCarousel;
use crate::pages::sections::{ProjectsGrid, StatsStrip};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <div class="page page--projects">
            <section class="section section--intro">
                <span class="micro-label">"Portfolio"</span>
                <h1>"Our projects"</h1>
                <p>"Residential and commercial installations delivering real savings across the country."</p>
            </section>
            <section class="section">
                <ProjectsGrid/>
            </section>
            <section class="section section--tinted">
                <StatsStrip/>
            </section>
            <section class="section">
                <TestimonialCarousel/>
            </section>
        </div>
    }
}
