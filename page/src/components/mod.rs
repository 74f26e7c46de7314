//! Leptos components for the landing page.
//!
//! Each [`ContentBlock`](crate::types::ContentBlock) variant has exactly one
//! component. [`PageDocument`] wraps them in the html shell.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── BlockView (per content block, in tree order)
//!     ├── SiteHeader
//!     ├── HeroBanner
//!     ├── ServiceCards
//!     ├── TestimonialCards
//!     ├── ContactSection
//!     └── SiteFooter
//! ```

mod contact;
mod document;
mod footer;
mod header;
mod hero;
mod services;
mod testimonials;

pub use contact::ContactSection;
pub use document::PageDocument;
pub use footer::SiteFooter;
pub use header::SiteHeader;
pub use hero::HeroBanner;
pub use services::ServiceCards;
pub use testimonials::TestimonialCards;
