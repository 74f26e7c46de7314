//! Root document component - the complete HTML page

use super::{
    ContactSection, HeroBanner, ServiceCards, SiteFooter, SiteHeader, TestimonialCards,
};
use crate::styles::PAGE_CSS;
use crate::types::{ContentBlock, DisplayTree};
use leptos::prelude::*;

/// The complete HTML document for the page
#[component]
pub fn PageDocument(tree: DisplayTree) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"TerraFlow Studio"</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <div class="App v5">
                    {tree.blocks.into_iter().map(|block| view! { <BlockView block=block /> }).collect::<Vec<_>>()}
                </div>
            </body>
        </html>
    }
}

/// Dispatch one block to its component
#[component]
fn BlockView(block: ContentBlock) -> impl IntoView {
    match block {
        ContentBlock::Header(header) => view! { <SiteHeader header=header /> }.into_any(),
        ContentBlock::Hero(hero) => view! { <HeroBanner hero=hero /> }.into_any(),
        ContentBlock::Services(services) => view! { <ServiceCards services=services /> }.into_any(),
        ContentBlock::Testimonials(testimonials) => {
            view! { <TestimonialCards testimonials=testimonials /> }.into_any()
        }
        ContentBlock::ContactForm(form) => view! { <ContactSection form=form /> }.into_any(),
        ContentBlock::Footer(footer) => view! { <SiteFooter footer=footer /> }.into_any(),
    }
}
