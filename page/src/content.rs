//! Literal page copy.
//!
//! Everything the page says lives here. Only the footer year is filled in at
//! render time.

use crate::form::{ContactField, FieldId, FieldKind};
use crate::types::{
    ContactForm, Footer, Header, Hero, NavLink, ServiceCard, ServicesBlock, Testimonial,
    TestimonialsBlock,
};

/// Studio name used in the footer.
pub const STUDIO: &str = "TerraFlow Studio";

const LOGO: &str = "TerraFlow";

const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "Testimonials", href: "#testimonials" },
    NavLink { label: "Contact", href: "#contact" },
];

/// Service cards, in display order.
pub const SERVICES: [ServiceCard; 3] = [
    ServiceCard {
        title: "Brand Strategy",
        description: "Authentic storytelling that resonates deeply.",
    },
    ServiceCard {
        title: "Web Design",
        description: "Simple, stunning websites that feel natural.",
    },
    ServiceCard {
        title: "SEO + Growth",
        description: "Organic reach with sustainable tactics.",
    },
];

/// Testimonials, in display order.
pub const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        quote: "Their approach feels like working with a friend who gets it.",
        author: "Sarah Bloom",
    },
    Testimonial {
        quote: "We’ve never felt more aligned as a brand.",
        author: "Aiden West",
    },
];

/// Contact inputs, in display order.
pub const CONTACT_FIELDS: [ContactField; 3] = [
    ContactField {
        id: FieldId::Name,
        name: "Name",
        placeholder: "Name",
        kind: FieldKind::Text,
        required: true,
    },
    ContactField {
        id: FieldId::Email,
        name: "Email",
        placeholder: "Email",
        kind: FieldKind::Email,
        required: true,
    },
    ContactField {
        id: FieldId::Message,
        name: "Message",
        placeholder: "Message",
        kind: FieldKind::Multiline { rows: 5 },
        required: true,
    },
];

pub(crate) fn header() -> Header {
    Header {
        logo: LOGO,
        links: NAV_LINKS.to_vec(),
    }
}

pub(crate) fn hero() -> Hero {
    Hero {
        heading: "Inspired by Nature, Driven by Design",
        tagline: "Helping brands grow through mindful digital experiences.",
        call_to_action: NavLink {
            label: "Let’s Collaborate",
            href: "#contact",
        },
    }
}

pub(crate) fn services() -> ServicesBlock {
    ServicesBlock {
        anchor: "services",
        heading: "What We Offer",
        cards: SERVICES.to_vec(),
    }
}

pub(crate) fn testimonials() -> TestimonialsBlock {
    TestimonialsBlock {
        anchor: "testimonials",
        heading: "Kind Words",
        entries: TESTIMONIALS.to_vec(),
    }
}

pub(crate) fn contact_form() -> ContactForm {
    ContactForm {
        anchor: "contact",
        heading: "Start Something Beautiful",
        fields: CONTACT_FIELDS.to_vec(),
        submit_label: "Send Message",
    }
}

pub(crate) fn footer(year: i32) -> Footer {
    Footer {
        year,
        copyright: copyright_line(year),
    }
}

/// Footer copyright text for `year`.
pub fn copyright_line(year: i32) -> String {
    format!("© {year} {STUDIO} — Gently Built with Care 🍃")
}
