// Unit tests for the contact form stub

use crate::form::ContactForm;

use models::{FormField, FormState};

use std::cell::RefCell;

/// **VALUE**: Verifies submit shows exactly one notice and resets every field.
///
/// **WHY THIS MATTERS**: This is the whole observable contract of the contact form.
///
/// **BUG THIS CATCHES**: Would catch a double alert, a reset before the notice, or a
/// field that survives the reset.
#[test]
fn given_filled_form_when_submitted_then_one_notice_and_fields_reset() {
    // GIVEN: A form filled with A / a@b.com / hi
    let notices = RefCell::new(Vec::new());
    let mut form = ContactForm::new(
        |message: &str| notices.borrow_mut().push(message.to_string()),
        "Thanks!",
    );
    form.update(FormField::Name, "A");
    form.update(FormField::Email, "a@b.com");
    form.update(FormField::Message, "hi");

    // WHEN: Submitting
    let submitted = form.submit();

    // THEN: One notice with the confirmation text
    assert_eq!(*notices.borrow(), vec!["Thanks!".to_string()]);

    // AND: State reset, submitted snapshot returned
    assert_eq!(form.state(), &FormState::default());
    assert_eq!(submitted, FormState::new("A", "a@b.com", "hi"));
}

/// **VALUE**: Verifies each update overwrites only its own field.
///
/// **WHY THIS MATTERS**: The browser host forwards one input event at a time.
///
/// **BUG THIS CATCHES**: Would catch an update that appends instead of overwriting, or
/// touches a neighbouring field.
#[test]
fn given_form_when_field_updated_twice_then_last_value_wins_and_others_untouched() {
    // GIVEN: A form with a name
    let mut form = ContactForm::new(|_: &str| {}, "ok");
    form.update(FormField::Name, "Al");
    form.update(FormField::Email, "al@b.com");

    // WHEN: Updating the name again
    form.update(FormField::Name, "Alice");

    // THEN: Name replaced, email untouched, message still empty
    assert_eq!(form.state(), &FormState::new("Alice", "al@b.com", ""));
}

/// **VALUE**: Verifies submitting an empty form still shows the notice.
///
/// **WHY THIS MATTERS**: There is no validation path; required-field checks belong to the
/// browser.
///
/// **BUG THIS CATCHES**: Would catch an added emptiness check that silently swallows submit.
#[test]
fn given_empty_form_when_submitted_then_notice_still_shown() {
    let count = RefCell::new(0);
    let mut form = ContactForm::new(|_: &str| *count.borrow_mut() += 1, "ok");

    form.submit();

    assert_eq!(*count.borrow(), 1);
}
