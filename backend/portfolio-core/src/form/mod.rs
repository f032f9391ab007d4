//! Contact form stub.
//!
//! Holds the three inputs and fakes a submission: one confirmation notice,
//! then every field is cleared. Nothing leaves the page.

use models::{FormField, FormState};

use log::{debug, info};

/// Surfaces a notice to the visitor (a browser alert in production).
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<F: Fn(&str)> Notifier for F {
    fn notify(&self, message: &str) {
        self(message)
    }
}

pub struct ContactForm<N: Notifier> {
    state: FormState,
    notifier: N,
    confirmation: String,
}

impl<N: Notifier> ContactForm<N> {
    pub fn new(notifier: N, confirmation: impl Into<String>) -> Self {
        Self {
            state: FormState::default(),
            notifier,
            confirmation: confirmation.into(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Overwrite a single field with the visitor's input.
    pub fn update(&mut self, field: FormField, value: impl Into<String>) {
        self.state.set(field, value);
    }

    /// Show the confirmation notice, then reset every field.
    ///
    /// Returns the values that were "sent".
    pub fn submit(&mut self) -> FormState {
        self.notifier.notify(&self.confirmation);
        let submitted = self.state.take();
        if submitted.is_empty() {
            debug!("Contact form submitted with every field empty");
        }
        info!(
            "Contact form submitted ({} chars of message), fields reset",
            submitted.message.chars().count()
        );
        submitted
    }
}
