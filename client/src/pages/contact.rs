//! Quote request page.

use leptos::prelude::*;

use crate::components::faq_list::FaqList;
use crate::pages::sections::ContactBlock;
use crate::util::anchor::CONTACT_ANCHOR;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="page page--contact">
            <section id=CONTACT_ANCHOR class="section section--intro">
                <ContactBlock/>
            </section>
            <section class="section section--tinted">
                <header class="section__header">
                    <span class="micro-label">"FAQ"</span>
                    <h2>"Before you reach out"</h2>
                </header>
                <FaqList/>
            </section>
        </div>
    }
}
