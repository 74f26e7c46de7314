//! # terraflow-page
//!
//! Leptos SSR renderer for the TerraFlow Studio landing page.
//!
//! The page is fixed copy: a header, a hero banner, three service cards,
//! two testimonials, a contact form shell and a footer. The footer year is
//! the only value read at render time.
//!
//! ## Quick Start
//!
//! ```rust
//! use terraflow_page::{render_page_with, clock::FixedYear};
//!
//! let html = render_page_with(&FixedYear(2024));
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("© 2024 TerraFlow Studio"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - literal copy
//! - [`types`] - the display tree handed to the renderer
//! - [`clock`] - where the footer year comes from
//! - [`form`] - contact field rules
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! Rendering uses Leptos 0.8's `RenderHtml::to_html`. No reactive runtime or
//! hydration is involved.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod clock;
pub mod components;
pub mod content;
pub mod form;
pub mod styles;
pub mod types;

use clock::{Clock, SystemClock, derived_year};
use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{ContentBlock, DisplayTree};

/// Build the display tree using the local wall clock.
pub fn display_tree() -> DisplayTree {
    display_tree_with(&SystemClock)
}

/// Build the display tree, reading the footer year from `clock`.
///
/// Block order is fixed: header, hero, services, testimonials, contact form,
/// footer.
pub fn display_tree_with(clock: &dyn Clock) -> DisplayTree {
    let year = derived_year(clock);
    DisplayTree {
        blocks: vec![
            ContentBlock::Header(content::header()),
            ContentBlock::Hero(content::hero()),
            ContentBlock::Services(content::services()),
            ContentBlock::Testimonials(content::testimonials()),
            ContentBlock::ContactForm(content::contact_form()),
            ContentBlock::Footer(content::footer(year)),
        ],
    }
}

/// Render the full HTML page using the local wall clock.
pub fn render_page() -> String {
    render_page_with(&SystemClock)
}

/// Render the full HTML page, reading the footer year from `clock`.
pub fn render_page_with(clock: &dyn Clock) -> String {
    render_tree(&display_tree_with(clock))
}

/// Render an already built display tree to a complete HTML document.
///
/// # Example
///
/// ```rust
/// use terraflow_page::{display_tree_with, render_tree, clock::FixedYear};
///
/// let tree = display_tree_with(&FixedYear(2030));
/// let html = render_tree(&tree);
/// assert!(html.contains("Brand Strategy"));
/// ```
pub fn render_tree(tree: &DisplayTree) -> String {
    let doc = view! { <PageDocument tree=tree.clone() /> };

    let html = doc.to_html();
    tracing::debug!(blocks = tree.blocks.len(), bytes = html.len(), "rendered page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clock::FixedYear;
    use pretty_assertions::assert_eq;

    fn kinds(tree: &DisplayTree) -> Vec<&'static str> {
        tree.blocks
            .iter()
            .map(|block| match block {
                ContentBlock::Header(_) => "header",
                ContentBlock::Hero(_) => "hero",
                ContentBlock::Services(_) => "services",
                ContentBlock::Testimonials(_) => "testimonials",
                ContentBlock::ContactForm(_) => "contact_form",
                ContentBlock::Footer(_) => "footer",
            })
            .collect()
    }

    #[test]
    fn blocks_in_fixed_order() {
        let tree = display_tree_with(&FixedYear(2024));
        assert_eq!(
            kinds(&tree),
            vec!["header", "hero", "services", "testimonials", "contact_form", "footer"]
        );
    }

    #[test]
    fn three_services_in_order() {
        let tree = display_tree_with(&FixedYear(2024));
        let titles: Vec<_> = tree
            .services()
            .map(|s| s.cards.iter().map(|c| c.title).collect())
            .unwrap_or_default();
        assert_eq!(titles, vec!["Brand Strategy", "Web Design", "SEO + Growth"]);
    }

    #[test]
    fn two_testimonials_in_order() {
        let tree = display_tree_with(&FixedYear(2024));
        let authors: Vec<_> = tree
            .testimonials()
            .map(|t| t.entries.iter().map(|e| e.author).collect())
            .unwrap_or_default();
        assert_eq!(authors, vec!["Sarah Bloom", "Aiden West"]);
    }

    #[test]
    fn footer_carries_year() {
        let tree = display_tree_with(&FixedYear(2024));
        let footer = tree.footer().cloned();
        assert_eq!(
            footer,
            Some(types::Footer {
                year: 2024,
                copyright: "© 2024 TerraFlow Studio — Gently Built with Care 🍃".into(),
            })
        );
    }

    #[test]
    fn contact_form_has_three_required_fields() {
        let tree = display_tree_with(&FixedYear(2024));
        let fields = tree.contact_form().map(|f| f.fields.clone()).unwrap_or_default();
        let names: Vec<_> = fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Name", "Email", "Message"]);
        assert!(fields.iter().all(|f| f.required));
    }

    #[test]
    fn renders_document_shell() {
        let html = render_page_with(&FixedYear(2024));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>TerraFlow Studio</title>"));
        assert!(html.contains("<style>"));
    }

    #[test]
    fn renders_footer_year() {
        let html = render_page_with(&FixedYear(2024));
        assert!(html.contains("© 2024 TerraFlow Studio — Gently Built with Care"));
    }

    #[test]
    fn rerender_is_identical() {
        let clock = FixedYear(2025);
        assert_eq!(render_page_with(&clock), render_page_with(&clock));
    }

    #[test]
    fn system_clock_render_uses_current_year() {
        let year = SystemClock.current_year();
        let rendered = display_tree().footer().map(|f| f.year).unwrap_or_default();
        // a render straddling New Year's Eve may see the next year
        assert!(rendered == year || rendered == year + 1, "footer year {rendered}");
    }

    #[test]
    fn json_tags_blocks_by_kind() {
        let json = display_tree_with(&FixedYear(2024))
            .to_json_pretty()
            .unwrap_or_default();
        assert!(json.contains("\"kind\": \"header\""));
        assert!(json.contains("\"kind\": \"contact_form\""));
        assert!(json.contains("\"year\": 2024"));
    }
}
