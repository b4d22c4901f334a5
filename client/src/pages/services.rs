//! Service catalogue and installation process.

use leptos::prelude::*;

use crate::components::step_selector::StepSelector;
use crate::pages::sections::ServicesGrid;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="page page--services">
            <section class="section section--intro">
                <span class="micro-label">"Services"</span>
                <h1>"Complete solar solutions"</h1>
                <p>"From the first roof survey to decades of monitoring, one team handles every part of your system."</p>
            </section>
            <section class="section">
                <ServicesGrid detailed=true/>
            </section>
            <section class="section section--tinted">
                <header class="section__header">
                    <span class="micro-label">"Process"</span>
                    <h2>"How it works"</h2>
                </header>
                <StepSelector/>
            </section>
        </div>
    }
}
