//! Single-page tour with scroll-linked section motion.
//!
//! Every section is pinned while its content enters, settles and exits to
//! the left. The FAQ and contact sections only reveal, so the form stays put
//! while someone is typing into it.

use leptos::prelude::*;

use crate::components::faq_list::FaqList;
use crate::components::motion_section::{PinnedSection, RevealSection};
use crate::components::step_selector::StepSelector;
use crate::components::testimonial_carousel::TestimonialCarousel;
use crate::pages::sections::{ContactBlock, HeroSection, ProjectsGrid, ServicesGrid, StatsStrip, ValuesGrid};
use crate::util::anchor::CONTACT_ANCHOR;
use crate::util::scroll_motion::PinnedMotion;

#[component]
pub fn TourPage() -> impl IntoView {
    view! {
        <div class="page page--tour">
            <PinnedSection motion=PinnedMotion::HERO extra_class="tour__hero">
                <HeroSection/>
            </PinnedSection>
            <PinnedSection id="about" motion=PinnedMotion::CARD>
                <h2>"Why homeowners choose us"</h2>
                <StatsStrip/>
                <ValuesGrid/>
            </PinnedSection>
            <PinnedSection id="services">
                <h2>"Services"</h2>
                <ServicesGrid/>
            </PinnedSection>
            <PinnedSection id="how-it-works" motion=PinnedMotion::CARD>
                <h2>"How it works"</h2>
                <StepSelector/>
            </PinnedSection>
            <PinnedSection id="projects">
                <h2>"Projects"</h2>
                <ProjectsGrid/>
            </PinnedSection>
            <PinnedSection id="testimonials" motion=PinnedMotion::CARD>
                <TestimonialCarousel/>
            </PinnedSection>
            <RevealSection id="faq">
                <h2>"FAQ"</h2>
                <FaqList/>
            </RevealSection>
            <RevealSection id=CONTACT_ANCHOR extra_class="tour__contact">
                <ContactBlock/>
            </RevealSection>
        </div>
    }
}
