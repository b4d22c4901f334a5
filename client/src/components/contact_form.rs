//! Quote request form with a timed confirmation.
//!
//! DESIGN
//! ======
//! The form owns its `FormSession`. On a valid submit it shows the
//! confirmation immediately, forwards the payload to the intake endpoint in
//! the background, and arms a timer that resets the form after
//! `RESET_DELAY`. The pending timer belongs to this component instance and
//! is cancelled in `on_cleanup`, so a timer can never fire into a form that
//! has been unmounted.

use leptos::prelude::*;

use crate::state::contact::{FormField, FormSession, Submission};

#[component]
pub fn ContactForm() -> impl IntoView {
    let session = RwSignal::new(FormSession::default());

    #[cfg(feature = "hydrate")]
    let pending_reset = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);
    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        let _ = pending_reset.try_update_value(|timer| drop(timer.take()));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(submission)) = session.try_update(FormSession::submit) else {
            return;
        };
        let Submission { ticket, payload } = submission;

        #[cfg(feature = "hydrate")]
        {
            #[allow(clippy::cast_possible_truncation)]
            let delay_ms = crate::state::contact::RESET_DELAY.as_millis() as u32;
            let timer = gloo_timers::callback::Timeout::new(delay_ms, move || {
                session.try_update(|s| s.complete_reset(ticket));
            });
            pending_reset.set_value(Some(timer));

            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::submit_contact(&payload).await {
                    leptos::logging::warn!("contact submission failed: {e}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, payload);
        }
    };

    let submitted = Memo::new(move |_| session.with(FormSession::is_submitted));

    view! {
        <div class="contact-form">
            <Show
                when=move || submitted.get()
                fallback=move || {
                    view! {
                        <h3 class="contact-form__title">"Request a Quote"</h3>
                        <p class="contact-form__intro">
                            "Fill out the form below and we'll get back to you with a personalized estimate."
                        </p>
                        <form class="contact-form__form" novalidate=true on:submit=on_submit>
                            <FormInput session field=FormField::Name label="Full Name" placeholder="John Smith"/>
                            <div class="contact-form__row">
                                <FormInput session field=FormField::Email label="Email" input_type="email" placeholder="john@example.com"/>
                                <FormInput session field=FormField::Phone label="Phone" input_type="tel" placeholder="(555) 123-4567"/>
                            </div>
                            <FormInput session field=FormField::Address label="Address" placeholder="123 Solar Street, City, State"/>
                            <FormMessage session/>
                            <button type="submit" class="btn btn--accent contact-form__submit">
                                "Request a quote"
                            </button>
                        </form>
                    }
                }
            >
                <div class="contact-form__confirmation">
                    <div class="contact-form__check" aria-hidden="true">"\u{2713}"</div>
                    <h3>"Thank you!"</h3>
                    <p>"We've received your message and will be in touch within 24 hours."</p>
                </div>
            </Show>
        </div>
    }
}

/// Single-line input bound to one form field.
#[component]
fn FormInput(
    session: RwSignal<FormSession>,
    field: FormField,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let error = move || session.with(|s| s.error_for(field));

    view! {
        <div class="contact-form__field" class:contact-form__field--invalid=move || error().is_some()>
            <label class="contact-form__label" for=field.key()>
                {label}
                {field.is_required().then_some(" *")}
            </label>
            <input
                id=field.key()
                name=field.key()
                type=input_type
                class="contact-form__input"
                placeholder=placeholder
                prop:value=move || session.with(|s| s.value(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    session.update(|s| {
                        s.set_field(field, value);
                    });
                }
            />
            {move || error().map(|message| view! { <p class="contact-form__error">{message}</p> })}
        </div>
    }
}

/// Free-text message area.
#[component]
fn FormMessage(session: RwSignal<FormSession>) -> impl IntoView {
    let field = FormField::Message;

    view! {
        <div class="contact-form__field">
            <label class="contact-form__label" for=field.key()>"Message"</label>
            <textarea
                id=field.key()
                name=field.key()
                rows="4"
                class="contact-form__input contact-form__input--area"
                placeholder="Tell us about your energy needs..."
                prop:value=move || session.with(|s| s.value(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    session.update(|s| {
                        s.set_field(field, value);
                    });
                }
            ></textarea>
        </div>
    }
}
