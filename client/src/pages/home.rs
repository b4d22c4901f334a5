//! Landing page: hero calculator, values, process, testimonials, FAQ and
//! the quote form.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::faq_list::FaqList;
use crate::components::step_selector::StepSelector;
use crate::components::testimonial_carousel::TestimonialCarousel;
use crate::pages::sections::{ContactBlock, HeroSection, ProjectsGrid, ValuesGrid};
use crate::util::anchor::CONTACT_ANCHOR;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <section class="section section--hero">
                <HeroSection/>
            </section>
            <section class="section">
                <header class="section__header">
                    <span class="micro-label">"Why solar"</span>
                    <h2>"Clean energy that pays for itself"</h2>
                </header>
                <ValuesGrid/>
            </section>
            <section class="section section--tinted">
                <header class="section__header">
                    <span class="micro-label">"How it works"</span>
                    <h2>"Three steps to solar"</h2>
                </header>
                <StepSelector/>
            </section>
            <section class="section">
                <header class="section__header">
                    <span class="micro-label">"Recent work"</span>
                    <h2>"Featured projects"</h2>
                    <A href="/projects" attr:class="section__more">"View all projects"</A>
                </header>
                <ProjectsGrid/>
            </section>
            <section class="section section--tinted">
                <TestimonialCarousel/>
            </section>
            <section class="section">
                <header class="section__header">
                    <span class="micro-label">"FAQ"</span>
                    <h2>"Common questions"</h2>
                </header>
                <FaqList/>
            </section>
            <section id=CONTACT_ANCHOR class="section section--cta">
                <ContactBlock/>
            </section>
        </div>
    }
}
