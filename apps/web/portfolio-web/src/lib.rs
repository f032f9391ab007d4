//! Browser host for the portfolio page.
//!
//! Built to wasm and loaded by the module script the renderer emits. On start
//! it binds the scroll controller and the contact form to the live DOM. A
//! `pagehide` that discards the page (or an explicit `unmount()` from JS) tears
//! everything down; a page kept in the back-forward cache stays mounted.

mod console;
mod dom;
mod form;
mod page;
mod timers;

#[cfg(test)]
mod tests;

use page::PageController;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use log::LevelFilter;
use wasm_bindgen::prelude::*;

thread_local! {
    static MOUNTED: RefCell<Option<Rc<PageController>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console::initialize(LevelFilter::Info);

    let controller = page::mount()?;
    let previous = MOUNTED.with(|slot| slot.borrow_mut().replace(controller));
    if let Some(previous) = previous {
        previous.teardown();
    }

    if let Some(window) = web_sys::window() {
        // Lives as long as the page; unmount() is idempotent.
        EventListener::new(&window, "pagehide", |event| {
            if page::is_final_unload(event) {
                unmount();
            }
        })
        .forget();
    }

    Ok(())
}

/// Tear down the page controller. Safe to call more than once.
#[wasm_bindgen]
pub fn unmount() {
    let controller = MOUNTED.with(|slot| slot.borrow_mut().take());
    if let Some(controller) = controller {
        controller.teardown();
    }
}
