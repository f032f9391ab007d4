//! Mounting the page: builds the controller and hands it every DOM hook.

use crate::dom::DomSurface;
use crate::form;
use crate::timers::TimeoutScheduler;

use models::RevealOptions;
use models::markers::{CLIENT_CONFIG_ELEMENT_ID, IN_PAGE_ANCHOR_SELECTOR, REVEAL_SELECTOR};
use portfolio_core::config::client::ClientConfig;
use portfolio_core::scroll::{IntersectionEntry, ScrollController};

use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions};
use js_sys::Array;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, PageTransitionEvent,
};

pub(crate) type PageController = ScrollController<DomSurface, TimeoutScheduler>;

/// Mount the controller and form on the current document.
pub(crate) fn mount() -> Result<Rc<PageController>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let embedded = document
        .get_element_by_id(CLIENT_CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    let client = ClientConfig::from_embedded(embedded.as_deref());

    let controller = Rc::new(ScrollController::mount(
        DomSurface::new(document.clone()),
        TimeoutScheduler,
        client.reveal.clone(),
    ));

    wire_anchors(&document, &controller)?;
    wire_reveals(&document, &controller, &client.reveal)?;

    let form_listeners = form::bind(&document, &window, &client.confirmation)?;
    controller.attach(move || drop(form_listeners));

    info!("Portfolio page mounted");
    Ok(controller)
}

/// Whether a `pagehide` discards the page.
///
/// Pages entering the back-forward cache report `persisted` and keep their
/// listeners, observer and pending reveals for when they are shown again.
pub(crate) fn is_final_unload(event: &Event) -> bool {
    discards_page(
        event
            .dyn_ref::<PageTransitionEvent>()
            .map(PageTransitionEvent::persisted),
    )
}

/// `persisted` is `None` when the event carries no transition details.
pub(crate) fn discards_page(persisted: Option<bool>) -> bool {
    !persisted.unwrap_or(false)
}

fn wire_anchors(document: &Document, controller: &Rc<PageController>) -> Result<(), JsValue> {
    let anchors = elements(document, IN_PAGE_ANCHOR_SELECTOR)?;
    let mut listeners = Vec::with_capacity(anchors.len());

    for anchor in anchors {
        let weak: Weak<PageController> = Rc::downgrade(controller);
        let source = anchor.clone();
        listeners.push(EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(controller) = weak.upgrade() else {
                    return;
                };
                let href = source.get_attribute("href").unwrap_or_default();
                if controller.on_anchor_click(&href).prevents_default() {
                    event.prevent_default();
                }
            },
        ));
    }

    debug!("{} in-page anchors wired", listeners.len());
    controller.attach(move || drop(listeners));
    Ok(())
}

fn wire_reveals(
    document: &Document,
    controller: &Rc<PageController>,
    options: &RevealOptions,
) -> Result<(), JsValue> {
    let weak: Weak<PageController> = Rc::downgrade(controller);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let Some(controller) = weak.upgrade() else {
                return;
            };
            let batch: Vec<IntersectionEntry<Element>> = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| IntersectionEntry::new(entry.target(), entry.is_intersecting()))
                .collect();
            controller.on_intersections(&batch);
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

    let targets = elements(document, REVEAL_SELECTOR)?;
    for target in &targets {
        observer.observe(target);
    }
    debug!("Observing {} reveal targets", targets.len());

    controller.attach(move || {
        observer.disconnect();
        drop(callback);
    });
    Ok(())
}

fn elements(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
