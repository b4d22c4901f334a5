//! Testimonial carousel with prev/next arrows and dot navigation.

use leptos::prelude::*;

use crate::content::TESTIMONIALS;
use crate::state::carousel::CarouselState;

#[component]
pub fn TestimonialCarousel() -> impl IntoView {
    let carousel = RwSignal::new(CarouselState::new(TESTIMONIALS.len()));
    let current = move || TESTIMONIALS[carousel.get().active()];

    view! {
        <div class="testimonial">
            <div class="testimonial__image">
                <img src=move || current().image alt=move || current().name/>
            </div>
            <div class="testimonial__content">
                <div class="testimonial__rating" aria-label=move || format!("{} out of 5 stars", current().rating)>
                    {move || "\u{2605}".repeat(usize::from(current().rating))}
                </div>
                <blockquote class="testimonial__quote">{move || format!("\u{201C}{}\u{201D}", current().quote)}</blockquote>
                <div class="testimonial__author">
                    <span class="testimonial__name">{move || current().name}</span>
                    <span class="testimonial__role">{move || current().role}</span>
                </div>
                <div class="testimonial__nav">
                    <div class="testimonial__dots">
                        {(0..TESTIMONIALS.len())
                            .map(|index| {
                                view! {
                                    <button
                                        class="testimonial__dot"
                                        class:testimonial__dot--active=move || carousel.get().active() == index
                                        aria-label=format!("Show testimonial {}", index + 1)
                                        on:click=move |_| carousel.update(|c| c.jump_to(index))
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="testimonial__arrows">
                        <button class="testimonial__arrow" aria-label="Previous testimonial" on:click=move |_| carousel.update(CarouselState::prev)>
                            "\u{2039}"
                        </button>
                        <button class="testimonial__arrow" aria-label="Next testimonial" on:click=move |_| carousel.update(CarouselState::next)>
                            "\u{203A}"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
