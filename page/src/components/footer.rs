//! Page footer

use crate::types::Footer;
use leptos::prelude::*;

/// Copyright line
#[component]
pub fn SiteFooter(footer: Footer) -> impl IntoView {
    view! {
        <footer>
            <p>{footer.copyright}</p>
        </footer>
    }
}
