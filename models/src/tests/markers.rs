use crate::markers::{
    CONTACT_FIELD_SELECTOR, PROJECT_CARD_CLASS, REVEAL_SELECTOR, SKILL_ITEM_CLASS,
};
use crate::SectionId;

/// **VALUE**: Verifies the reveal selector is built from the two target class markers.
///
/// **WHY THIS MATTERS**: The browser host queries targets with this selector. If it drifted
/// from the class names the renderer emits, nothing would ever reveal.
///
/// **BUG THIS CATCHES**: Would catch a typo in the `concatcp!` expression.
#[test]
fn given_target_classes_when_selector_built_then_matches_both() {
    assert_eq!(REVEAL_SELECTOR, ".skill-item, .project-card");
    assert!(REVEAL_SELECTOR.contains(SKILL_ITEM_CLASS));
    assert!(REVEAL_SELECTOR.contains(PROJECT_CARD_CLASS));
}

/// **VALUE**: Verifies the contact field selector targets named inputs inside the form.
///
/// **BUG THIS CATCHES**: Would catch the host binding inputs outside the contact form.
#[test]
fn given_contact_form_class_when_field_selector_built_then_scoped_to_form() {
    assert_eq!(CONTACT_FIELD_SELECTOR, ".contact-form [name]");
}

/// **VALUE**: Verifies every section fragment is `#` plus its element id.
///
/// **WHY THIS MATTERS**: Navbar anchors carry the fragment while sections carry the id. The
/// scroll controller resolves one to the other by stripping the `#`.
///
/// **BUG THIS CATCHES**: Would catch a fragment and id drifting apart for one section.
#[test]
fn given_sections_when_fragment_built_then_matches_element_id() {
    for section in SectionId::ALL {
        assert_eq!(section.fragment(), format!("#{}", section.as_str()));
    }
}
