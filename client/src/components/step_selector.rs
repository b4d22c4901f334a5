//! "How it works" step selector: one step is always active.

use leptos::prelude::*;

use crate::content::STEPS;
use crate::state::accordion::AccordionState;

#[component]
pub fn StepSelector() -> impl IntoView {
    let steps = RwSignal::new(AccordionState::new(STEPS.len()));
    let active = move || steps.with(|s| s.open_index().unwrap_or(0));

    view! {
        <div class="steps">
            <div class="steps__tabs">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(index, step)| {
                        view! {
                            <button
                                class="steps__tab"
                                class:steps__tab--active=move || active() == index
                                on:click=move |_| steps.update(|s| s.select(index))
                            >
                                <span class="steps__number">{step.number}</span>
                                <span class="steps__title">{step.title}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="steps__detail">
                <span class="steps__detail-number">{move || STEPS[active()].number}</span>
                <h3 class="steps__detail-title">{move || STEPS[active()].title}</h3>
                <p class="steps__detail-body">{move || STEPS[active()].description}</p>
            </div>
        </div>
    }
}
