//! Binds the rendered contact form to [`ContactForm`].

use models::FormField;
use models::markers::{CONTACT_FIELD_SELECTOR, SUBMIT_BUTTON_ID};
use portfolio_core::form::{ContactForm, Notifier};

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use log::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement, Window};

/// Confirmation notices via `window.alert`.
pub(crate) struct AlertNotifier {
    window: Window,
}

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            warn!("Failed to show confirmation: {e:?}");
        }
    }
}

/// Wire every named contact input and the submit button.
///
/// Returns the listeners; dropping them unbinds the form.
pub(crate) fn bind(
    document: &Document,
    window: &Window,
    confirmation: &str,
) -> Result<Vec<EventListener>, JsValue> {
    let form = Rc::new(RefCell::new(ContactForm::new(
        AlertNotifier {
            window: window.clone(),
        },
        confirmation,
    )));

    let inputs = named_inputs(document)?;
    let mut listeners = Vec::with_capacity(inputs.len() + 1);

    for (field, input) in &inputs {
        let form = Rc::clone(&form);
        let field = *field;
        let source = input.clone();
        listeners.push(EventListener::new(input, "input", move |_| {
            form.borrow_mut().update(field, value_of(&source));
        }));
    }

    let Some(button) = document.get_element_by_id(SUBMIT_BUTTON_ID) else {
        warn!("No #{SUBMIT_BUTTON_ID} button, contact form left unbound");
        return Ok(listeners);
    };

    listeners.push(EventListener::new(&button, "click", move |_| {
        let mut form = form.borrow_mut();
        form.submit();
        for (field, input) in &inputs {
            set_value(input, form.state().get(*field));
        }
    }));

    debug!("Contact form bound ({} fields)", listeners.len() - 1);
    Ok(listeners)
}

fn named_inputs(document: &Document) -> Result<Vec<(FormField, Element)>, JsValue> {
    let nodes = document.query_selector_all(CONTACT_FIELD_SELECTOR)?;
    let mut inputs = Vec::with_capacity(nodes.length() as usize);

    for index in 0..nodes.length() {
        let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let name = element.get_attribute("name").unwrap_or_default();
        match name.parse::<FormField>() {
            Ok(field) => inputs.push((field, element)),
            Err(e) => warn!("Skipping contact input: {e}"),
        }
    }

    Ok(inputs)
}

fn value_of(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn set_value(element: &Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}
