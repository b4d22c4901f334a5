//! Section blocks shared by the multi-page site and the tour page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::contact_form::ContactForm;
use crate::components::savings_calculator::SavingsCalculator;
use crate::content::{
    COMPANY_STATS, CONTACT_EMAIL, CONTACT_HOURS, CONTACT_PHONE, PROJECTS, Project, SERVICE_AREA, SERVICES, VALUES,
};
use crate::util::anchor::{self, CONTACT_ANCHOR};

/// Headline, trust badges and the savings calculator.
#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <div class="hero">
            <img class="hero__backdrop" src="/images/hero.jpg" alt="Solar panels on a roof at sunset"/>
            <div class="hero__grid">
                <div class="hero__copy">
                    <span class="micro-label">"Residential & Commercial"</span>
                    <h1 class="hero__title">"Power Your Home " <span class="hero__accent">"With Solar"</span></h1>
                    <p class="hero__lede">
                        "Save money, increase your property value, and reduce your carbon footprint with our premium solar solutions."
                    </p>
                    <div class="hero__actions">
                        <button class="btn btn--accent" on:click=move |_| anchor::scroll_to(CONTACT_ANCHOR)>
                            "Get a free quote"
                        </button>
                        <A href="/services" attr:class="btn btn--ghost">"Learn more"</A>
                    </div>
                    <ul class="hero__badges">
                        <li>"25-year warranty"</li>
                        <li>"$0 down options"</li>
                        <li>"Premium panels"</li>
                    </ul>
                </div>
                <SavingsCalculator/>
            </div>
        </div>
    }
}

#[component]
pub fn StatsStrip() -> impl IntoView {
    view! {
        <div class="stats-strip">
            {COMPANY_STATS
                .iter()
                .map(|stat| {
                    view! {
                        <div class="stats-strip__item">
                            <span class="stats-strip__value">{stat.value}</span>
                            <span class="stats-strip__label">{stat.label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ValuesGrid() -> impl IntoView {
    view! {
        <div class="values-grid">
            {VALUES
                .iter()
                .map(|value| {
                    view! {
                        <article class="values-grid__card">
                            <h3>{value.title}</h3>
                            <p>{value.description}</p>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Service cards. `detailed` adds the feature checklist.
#[component]
pub fn ServicesGrid(#[prop(optional)] detailed: bool) -> impl IntoView {
    view! {
        <div class="services-grid">
            {SERVICES
                .iter()
                .map(|service| {
                    view! {
                        <article class="service-card">
                            <img class="service-card__image" src=service.image alt=service.title/>
                            <span class="service-card__number">{service.number}</span>
                            <h3 class="service-card__title">{service.title}</h3>
                            <p class="service-card__body">{service.description}</p>
                            {detailed
                                .then(|| {
                                    view! {
                                        <ul class="service-card__features">
                                            {service.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                        </ul>
                                    }
                                })}
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ProjectsGrid() -> impl IntoView {
    view! {
        <div class="projects-grid">
            {PROJECTS
                .iter()
                .map(|project| {
                    view! {
                        <article class="project-card">
                            <img class="project-card__image" src=project.image alt=project.title/>
                            <div class="project-card__body">
                                <span class="project-card__location">{project.location}</span>
                                <h3 class="project-card__title">{project.title}</h3>
                                <p class="project-card__meta">{project_meta(project)}</p>
                                <p>{project.description}</p>
                                <dl class="project-card__figures">
                                    <dt>"CO\u{2082} saved"</dt>
                                    <dd>{project.co2_saved}</dd>
                                    <dt>"Savings"</dt>
                                    <dd>{project.savings}</dd>
                                </dl>
                            </div>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Contact details next to the quote form. The caller places this inside
/// the element carrying the contact anchor id.
#[component]
pub fn ContactBlock() -> impl IntoView {
    view! {
        <div class="contact-block">
            <div class="contact-block__info">
                <span class="micro-label">"Get in touch"</span>
                <h2>"Ready to go solar?"</h2>
                <p>"Talk to a specialist about your home and get a free, no-obligation quote."</p>
                <ul class="contact-block__details">
                    <li>
                        <span>"Email"</span>
                        <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                    </li>
                    <li>
                        <span>"Phone"</span>
                        <a href=format!("tel:{CONTACT_PHONE}")>{CONTACT_PHONE}</a>
                    </li>
                    <li>
                        <span>"Hours"</span>
                        {CONTACT_HOURS}
                    </li>
                    <li>
                        <span>"Area"</span>
                        {SERVICE_AREA}
                    </li>
                </ul>
            </div>
            <ContactForm/>
        </div>
    }
}

/// One-line summary under a project title, e.g. `32 panels · 12.4 kW`.
pub fn project_meta(project: &Project) -> String {
    format!("{} panels \u{b7} {}", project.panels, project.system_size)
}

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;
