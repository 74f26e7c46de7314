//! Service cards section

use crate::types::ServicesBlock;
use leptos::prelude::*;

/// "What We Offer" grid, one card per service
#[component]
pub fn ServiceCards(services: ServicesBlock) -> impl IntoView {
    view! {
        <section id=services.anchor class="section">
            <h3>{services.heading}</h3>
            <div class="card-container">
                {services.cards.into_iter().map(|card| view! {
                    <div class="card calm">
                        <h4>{card.title}</h4>
                        <p>{card.description}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
