use crate::{FormField, FormState, ModelError};

/// **VALUE**: Verifies that setting one field leaves the other two untouched.
///
/// **WHY THIS MATTERS**: Input events arrive one field at a time. An update that clobbered
/// its neighbours would wipe what the visitor already typed.
///
/// **BUG THIS CATCHES**: Would catch a `set()` that rebuilds the whole state instead of
/// overwriting a single slot.
#[test]
fn given_filled_state_when_one_field_set_then_others_unchanged() {
    // GIVEN: A state with all three fields filled
    let mut state = FormState::new("A", "a@b.com", "hi");

    // WHEN: Overwriting only the email
    state.set(FormField::Email, "new@b.com");

    // THEN: Only email changed
    assert_eq!(state, FormState::new("A", "new@b.com", "hi"));
}

/// **VALUE**: Verifies that `take()` returns the old values and leaves an empty state.
///
/// **WHY THIS MATTERS**: Submission relies on `take()` to reset the form in one step.
///
/// **BUG THIS CATCHES**: Would catch a reset that forgets a field.
#[test]
fn given_filled_state_when_taken_then_state_is_empty_and_snapshot_returned() {
    // GIVEN: A filled state
    let mut state = FormState::new("A", "a@b.com", "hi");

    // WHEN: Taking the values
    let snapshot = state.take();

    // THEN: Snapshot holds the values, state is empty
    assert_eq!(snapshot.get(FormField::Name), "A");
    assert_eq!(snapshot.get(FormField::Message), "hi");
    assert!(state.is_empty(), "State should be reset");
}

/// **VALUE**: Verifies that input `name` attributes parse back into fields.
///
/// **WHY THIS MATTERS**: The browser host only sees the DOM `name` attribute of the input
/// that changed.
///
/// **BUG THIS CATCHES**: Would catch drift between `as_str()` and `from_str()`.
#[test]
fn given_field_names_when_parsed_then_round_trip_and_unknown_rejected() {
    for field in FormField::ALL {
        let parsed: FormField = field.as_str().parse().unwrap();
        assert_eq!(parsed, field);
    }

    let unknown = "phone".parse::<FormField>();
    assert!(matches!(unknown, Err(ModelError::UnknownField { ref name, .. }) if name == "phone"));
}

/// **VALUE**: Verifies the serialized form uses the lowercase field names.
///
/// **WHY THIS MATTERS**: The same names appear in the rendered markup and in logs.
///
/// **BUG THIS CATCHES**: Would catch removal of `rename_all = "lowercase"`.
#[test]
fn given_form_field_when_serialized_then_uses_lowercase_name() {
    let json = serde_json::to_string(&FormField::Message).unwrap();
    assert_eq!(json, "\"message\"");
}
