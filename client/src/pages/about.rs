//! Company story, stats and values.

use leptos::prelude::*;

use crate::components::testimonial_carousel::TestimonialCarousel;
use crate::content::BRAND;
use crate::pages::sections::{StatsStrip, ValuesGrid};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page page--about">
            <section class="section section--intro">
                <span class="micro-label">"About us"</span>
                <h1>{format!("About {BRAND}")}</h1>
                <p>
                    "For over fifteen years we have helped homeowners and businesses take control of their energy. "
                    "Every system is designed in-house and installed by our own certified crews."
                </p>
            </section>
            <section class="section">
                <StatsStrip/>
            </section>
            <section class="section section--tinted">
                <header class="section__header">
                    <span class="micro-label">"Our values"</span>
                    <h2>"What we stand for"</h2>
                </header>
                <ValuesGrid/>
            </section>
            <section class="section">
                <TestimonialCarousel/>
            </section>
        </div>
    }
}
