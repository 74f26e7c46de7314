//! Site header with logo and navigation

use crate::types::Header;
use leptos::prelude::*;

/// Logo and in-page navigation
#[component]
pub fn SiteHeader(header: Header) -> impl IntoView {
    view! {
        <header class="header">
            <h1 class="logo">{header.logo}</h1>
            <nav>
                {header.links.into_iter().map(|link| view! {
                    <a href=link.href>{link.label}</a>
                }).collect::<Vec<_>>()}
            </nav>
        </header>
    }
}
