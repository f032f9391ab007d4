use portfolio_core::scroll::{PageSurface, ScrollAlignment, ScrollBehavior, ScrollOptions};

use log::warn;
use web_sys::{
    Document, Element, ScrollBehavior as DomScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

/// The live document as a [`PageSurface`].
pub(crate) struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub(crate) fn new(document: Document) -> Self {
        Self { document }
    }
}

impl PageSurface for DomSurface {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn scroll_into_view(&self, element: &Element, options: ScrollOptions) {
        let dom_options = ScrollIntoViewOptions::new();
        dom_options.set_behavior(match options.behavior {
            ScrollBehavior::Smooth => DomScrollBehavior::Smooth,
            ScrollBehavior::Instant => DomScrollBehavior::Instant,
        });
        dom_options.set_block(match options.block {
            ScrollAlignment::Start => ScrollLogicalPosition::Start,
            ScrollAlignment::Center => ScrollLogicalPosition::Center,
            ScrollAlignment::End => ScrollLogicalPosition::End,
            ScrollAlignment::Nearest => ScrollLogicalPosition::Nearest,
        });
        element.scroll_into_view_with_scroll_into_view_options(&dom_options);
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&self, element: &Element, class: &str) {
        if let Err(e) = element.class_list().add_1(class) {
            warn!("Failed to add class '{class}': {e:?}");
        }
    }
}
