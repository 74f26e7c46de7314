//! Rendered HTML checks for the landing page.

use pretty_assertions::assert_eq;
use terraflow_page::clock::FixedYear;
use terraflow_page::{content, display_tree_with, render_page_with, render_tree};

/// Byte offsets of each needle, panicking with the missing one.
fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            html.find(needle)
                .unwrap_or_else(|| panic!("{needle:?} not found in rendered page"))
        })
        .collect()
}

fn assert_ascending(offsets: &[usize]) {
    let mut sorted = offsets.to_vec();
    sorted.sort_unstable();
    assert_eq!(offsets, sorted.as_slice());
}

#[test]
fn sections_render_in_page_order() {
    let html = render_page_with(&FixedYear(2024));
    let offsets = positions(
        &html,
        &[
            "<header class=\"header\">",
            "<section class=\"hero\">",
            "id=\"services\"",
            "id=\"testimonials\"",
            "id=\"contact\"",
            "<footer>",
        ],
    );
    assert_ascending(&offsets);
}

#[test]
fn service_cards_render_once_each_in_order() {
    let html = render_page_with(&FixedYear(2024));
    assert_eq!(html.matches("card calm\"").count(), 3);

    let titles: Vec<_> = content::SERVICES.iter().map(|card| card.title).collect();
    assert_eq!(titles, vec!["Brand Strategy", "Web Design", "SEO + Growth"]);
    assert_ascending(&positions(&html, &titles));
}

#[test]
fn testimonials_render_with_attribution() {
    let html = render_page_with(&FixedYear(2024));
    assert_eq!(html.matches("card calm-dark").count(), 2);
    assert_ascending(&positions(&html, &["— Sarah Bloom", "— Aiden West"]));
    assert!(html.contains("“Their approach feels like working with a friend who gets it.”"));
}

#[test]
fn contact_form_renders_three_required_fields() {
    let html = render_page_with(&FixedYear(2024));
    let offsets = positions(
        &html,
        &[
            "placeholder=\"Name\"",
            "placeholder=\"Email\"",
            "placeholder=\"Message\"",
        ],
    );
    assert_ascending(&offsets);
    assert_eq!(html.matches("<input").count(), 2);
    assert_eq!(html.matches("<textarea").count(), 1);
    assert!(html.contains("type=\"email\""));
    assert!(html.contains("Send Message"));
}

#[test]
fn every_contact_field_is_marked_required() {
    let html = render_page_with(&FixedYear(2024));

    for placeholder in ["Name", "Email", "Message"] {
        let attr = format!("placeholder=\"{placeholder}\"");
        let start = html
            .find(&attr)
            .unwrap_or_else(|| panic!("{attr} not found in rendered page"));
        let tag_end = start + html[start..].find('>').unwrap_or(0);
        let tag_tail = &html[start..=tag_end];
        assert!(
            tag_tail.ends_with(" required>") || tag_tail.ends_with(" required=\"\">"),
            "{placeholder} field is not required: {tag_tail}"
        );
    }
    assert_eq!(html.matches(" required").count(), 3);
}

#[test]
fn navigation_targets_section_anchors() {
    let html = render_page_with(&FixedYear(2024));
    for anchor in ["services", "testimonials", "contact"] {
        assert!(html.contains(&format!("href=\"#{anchor}\"")));
        assert!(html.contains(&format!("id=\"{anchor}\"")));
    }
}

#[test]
fn footer_year_follows_clock() {
    for year in [2024, 2031] {
        let html = render_page_with(&FixedYear(year));
        assert!(html.contains(&content::copyright_line(year)));
    }
    let html = render_page_with(&FixedYear(2024));
    assert!(!html.contains("© 2031"));
}

#[test]
fn render_tree_matches_render_page() {
    let clock = FixedYear(2026);
    assert_eq!(render_tree(&display_tree_with(&clock)), render_page_with(&clock));
}
