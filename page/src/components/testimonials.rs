//! Testimonials section

use crate::types::TestimonialsBlock;
use leptos::prelude::*;

/// Client quotes on the alternate background
#[component]
pub fn TestimonialCards(testimonials: TestimonialsBlock) -> impl IntoView {
    view! {
        <section id=testimonials.anchor class="section alt-bg">
            <h3>{testimonials.heading}</h3>
            <div class="card-container">
                {testimonials.entries.into_iter().map(|entry| view! {
                    <div class="card calm-dark">
                        <p>{format!("“{}”", entry.quote)}</p>
                        <strong>{format!("— {}", entry.author)}</strong>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
