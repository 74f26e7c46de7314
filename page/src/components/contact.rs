//! Contact form shell
//!
//! Renders inputs with `required` and the right `type` so the browser
//! validates them. The form has no action and no handler.

use crate::form::{ContactField, FieldKind};
use crate::types::ContactForm;
use leptos::prelude::*;

/// "Start Something Beautiful" section with the form
#[component]
pub fn ContactSection(form: ContactForm) -> impl IntoView {
    view! {
        <section id=form.anchor class="section">
            <h3>{form.heading}</h3>
            <form>
                {form.fields.into_iter().map(|field| view! { <FieldInput field=field /> }).collect::<Vec<_>>()}
                <button type="submit">{form.submit_label}</button>
            </form>
        </section>
    }
}

#[component]
fn FieldInput(field: ContactField) -> impl IntoView {
    match field.kind {
        FieldKind::Multiline { rows } => view! {
            <textarea
                name=field.id.as_str()
                placeholder=field.placeholder
                rows=rows.to_string()
                required=field.required
            ></textarea>
        }
        .into_any(),
        kind => {
            let input_type = kind.input_type().unwrap_or("text");
            view! {
                <input
                    type=input_type
                    name=field.id.as_str()
                    placeholder=field.placeholder
                    required=field.required
                />
            }
            .into_any()
        }
    }
}
