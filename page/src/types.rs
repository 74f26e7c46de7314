//! Display tree types for the landing page.
//!
//! A [`DisplayTree`] is the ordered list of [`ContentBlock`]s handed to the
//! renderer. All fields are literal copy except the footer year.
//!
//! The types are:
//!
//! - **Serializable** - the tree can be dumped as JSON for a host renderer
//! - **Clone-friendly** - components take owned blocks
//! - **Comparable** - tests assert on whole blocks
//!
//! # Example
//!
//! ```rust
//! use terraflow_page::{display_tree_with, clock::FixedYear, types::ContentBlock};
//!
//! let tree = display_tree_with(&FixedYear(2024));
//! assert!(matches!(tree.blocks.first(), Some(ContentBlock::Header(_))));
//! ```

use serde::Serialize;

use crate::form::ContactField;

/// The complete page, top to bottom.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayTree {
    /// Blocks in display order
    pub blocks: Vec<ContentBlock>,
}

impl DisplayTree {
    /// Services section, if present.
    pub fn services(&self) -> Option<&ServicesBlock> {
        self.blocks.iter().find_map(|block| match block {
            ContentBlock::Services(services) => Some(services),
            _ => None,
        })
    }

    /// Testimonials section, if present.
    pub fn testimonials(&self) -> Option<&TestimonialsBlock> {
        self.blocks.iter().find_map(|block| match block {
            ContentBlock::Testimonials(testimonials) => Some(testimonials),
            _ => None,
        })
    }

    /// Contact form shell, if present.
    pub fn contact_form(&self) -> Option<&ContactForm> {
        self.blocks.iter().find_map(|block| match block {
            ContentBlock::ContactForm(form) => Some(form),
            _ => None,
        })
    }

    /// Footer, if present.
    pub fn footer(&self) -> Option<&Footer> {
        self.blocks.iter().find_map(|block| match block {
            ContentBlock::Footer(footer) => Some(footer),
            _ => None,
        })
    }

    /// Pretty JSON for hosts that render the tree themselves.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// One unit of page content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Logo and in-page navigation
    Header(Header),
    /// Hero banner with call to action
    Hero(Hero),
    /// Service cards section
    Services(ServicesBlock),
    /// Testimonial cards section
    Testimonials(TestimonialsBlock),
    /// Contact form shell (no submit handler)
    ContactForm(ContactForm),
    /// Copyright footer
    Footer(Footer),
}

/// In-page anchor link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Visible text
    pub label: &'static str,
    /// Target, e.g. `#services`
    pub href: &'static str,
}

/// Page header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Brand wordmark
    pub logo: &'static str,
    /// Navigation links in display order
    pub links: Vec<NavLink>,
}

/// Hero banner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Hero {
    /// Main heading
    pub heading: &'static str,
    /// Supporting line under the heading
    pub tagline: &'static str,
    /// Call-to-action button
    pub call_to_action: NavLink,
}

/// A single offered service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceCard {
    /// Card title
    pub title: &'static str,
    /// One-line description
    pub description: &'static str,
}

/// Services section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServicesBlock {
    /// Element id used by navigation
    pub anchor: &'static str,
    /// Section heading
    pub heading: &'static str,
    /// Cards in display order
    pub cards: Vec<ServiceCard>,
}

/// A client quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    /// Quote text, without surrounding quotation marks
    pub quote: &'static str,
    /// Person quoted
    pub author: &'static str,
}

/// Testimonials section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestimonialsBlock {
    /// Element id used by navigation
    pub anchor: &'static str,
    /// Section heading
    pub heading: &'static str,
    /// Entries in display order
    pub entries: Vec<Testimonial>,
}

/// Contact form shell.
///
/// Fields are rendered with browser-level validation attributes. Nothing is
/// submitted anywhere; [`ContactForm::validate`] applies the same rules
/// outside a browser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    /// Element id used by navigation
    pub anchor: &'static str,
    /// Section heading
    pub heading: &'static str,
    /// Inputs in display order
    pub fields: Vec<ContactField>,
    /// Submit button label
    pub submit_label: &'static str,
}

/// Page footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Footer {
    /// Year read from the clock at render time
    pub year: i32,
    /// Copyright line with the year already interpolated
    pub copyright: String,
}
