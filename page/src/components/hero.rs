//! Hero banner section

use crate::types::Hero;
use leptos::prelude::*;

/// Banner with the headline and call to action
#[component]
pub fn HeroBanner(hero: Hero) -> impl IntoView {
    view! {
        <section class="hero">
            <h2>{hero.heading}</h2>
            <p>{hero.tagline}</p>
            <a class="btn" href=hero.call_to_action.href>{hero.call_to_action.label}</a>
        </section>
    }
}
