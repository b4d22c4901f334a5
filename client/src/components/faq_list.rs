//! FAQ accordion: one answer open at a time.

use leptos::prelude::*;

use crate::content::FAQS;
use crate::state::accordion::AccordionState;

#[component]
pub fn FaqList() -> impl IntoView {
    let accordion = RwSignal::new(AccordionState::new(FAQS.len()));

    view! {
        <div class="faq-list">
            {FAQS
                .iter()
                .enumerate()
                .map(|(index, faq)| {
                    let is_open = move || accordion.with(|a| a.is_open(index));
                    view! {
                        <div class="faq-item" class:faq-item--open=is_open>
                            <button
                                class="faq-item__question"
                                aria-expanded=move || is_open().to_string()
                                on:click=move |_| accordion.update(|a| a.toggle(index))
                            >
                                <span>{faq.question}</span>
                                <span class="faq-item__chevron" aria-hidden="true">"\u{25BE}"</span>
                            </button>
                            <div class="faq-item__answer">
                                <p>{faq.answer}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
