//! Contact form wiring. Submissions never leave the page.

use router::ContactSubmission;
use tracing::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Window};

const FORM_ID: &str = "contactForm";

/// Bind the submit handler if the current section has a contact form.
///
/// Returns `Ok(false)` when there is no form to bind.
pub fn bind_contact_form(window: &Window, document: &Document) -> Result<bool, JsValue> {
    let Some(form) = document.get_element_by_id(FORM_ID) else {
        return Ok(false);
    };
    let form: HtmlFormElement = form.dyn_into()?;

    let on_submit = {
        let window = window.clone();
        let document = document.clone();
        let form = form.clone();
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();

            let submission = ContactSubmission::new(
                field_value(&document, "name"),
                field_value(&document, "email"),
                field_value(&document, "message"),
            );

            match submission.acknowledge() {
                Ok(ack) => {
                    info!("contact form acknowledged");
                    let _ = window.alert_with_message(&ack.message());
                    form.reset();
                }
                Err(e) => {
                    debug!(error = %e, "contact form rejected");
                    let _ = window.alert_with_message(&e.to_string());
                }
            }
        })
    };

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    Ok(true)
}

/// Value of an `<input>` or `<textarea>` by id; empty when absent.
fn field_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };

    match el.dyn_into::<HtmlInputElement>() {
        Ok(input) => input.value(),
        Err(el) => el
            .dyn_into::<HtmlTextAreaElement>()
            .map(|area| area.value())
            .unwrap_or_default(),
    }
}
