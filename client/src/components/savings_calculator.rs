//! Monthly-bill slider and the savings estimate it drives.

use leptos::prelude::*;

use crate::state::savings::{Payback, format_usd};
use crate::state::slider::{BILL_MAX, BILL_MIN, BILL_STEP, SliderInput};

/// Calculator card: slider, panel count, payback, and yearly/monthly savings.
#[component]
pub fn SavingsCalculator() -> impl IntoView {
    let slider = RwSignal::new(SliderInput::default());
    let estimate = Memo::new(move |_| slider.get().estimate());

    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        slider.update(|s| s.set_from_input(&raw));
    };

    view! {
        <div class="calculator">
            <div class="calculator__card">
                <div class="calculator__header">
                    <span class="calculator__label">"Estimated Monthly Bill"</span>
                    <span class="calculator__bill">{move || format!("${}/mo", slider.get().value())}</span>
                </div>
                <input
                    class="calculator__range"
                    type="range"
                    min=BILL_MIN.to_string()
                    max=BILL_MAX.to_string()
                    step=BILL_STEP.to_string()
                    prop:value=move || slider.get().value().to_string()
                    style=move || format!("--value: {:.2}%", slider.get().fill_percent())
                    on:input=on_input
                />
                <div class="calculator__range-labels">
                    <span>{format!("${BILL_MIN}")}</span>
                    <span>{format!("${BILL_MAX}")}</span>
                </div>
                <div class="calculator__results">
                    <div class="calculator__result">
                        <span class="calculator__result-label">"Panels Needed"</span>
                        <span class="calculator__result-value">
                            {move || format!("~{}", estimate.get().panel_count)}
                        </span>
                    </div>
                    <div class="calculator__result">
                        <span class="calculator__result-label">"Payback"</span>
                        <span class="calculator__result-value">
                            {move || payback_text(estimate.get().payback)}
                        </span>
                    </div>
                </div>
            </div>
            <div class="calculator__stats">
                <div class="stat-tile">
                    <span class="stat-tile__value">"25+"</span>
                    <span class="stat-tile__label">"Years Savings"</span>
                </div>
                <div class="stat-tile">
                    <span class="stat-tile__value">
                        {move || format!("${}", format_usd(estimate.get().monthly_savings))}
                    </span>
                    <span class="stat-tile__label">"Monthly Savings"</span>
                </div>
                <div class="stat-tile">
                    <span class="stat-tile__value">
                        {move || format!("${}", format_usd(estimate.get().yearly_savings))}
                    </span>
                    <span class="stat-tile__label">"Yearly Savings"</span>
                </div>
            </div>
        </div>
    }
}

fn payback_text(payback: Payback) -> String {
    match payback {
        Payback::Years(_) => format!("~{} yrs", payback.label()),
        Payback::NotApplicable => payback.label(),
    }
}
