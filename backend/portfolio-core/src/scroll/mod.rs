//! Scroll controller: smooth in-page anchor navigation and staggered
//! scroll-triggered reveals.
//!
//! # Architecture
//!
//! The controller never talks to a browser directly. A host supplies:
//!
//! - a [`PageSurface`] that can look up elements by id, scroll them into view
//!   and add the revealed class
//! - a [`Scheduler`] whose timers cancel when dropped
//! - any number of [`Release`] resources (click listeners, the intersection
//!   observer) handed over with [`ScrollController::attach`]
//!
//! The host forwards anchor clicks to [`ScrollController::on_anchor_click`] and
//! observation batches to [`ScrollController::on_intersections`]. Teardown
//! (explicit or on drop) cancels every pending reveal and releases every
//! attached resource.

mod anchor;
mod controller;
pub mod surface;

pub use anchor::{AnchorOutcome, fragment_of};
pub use controller::ScrollController;
pub use surface::{
    IntersectionEntry, PageSurface, Release, Scheduler, ScrollAlignment, ScrollBehavior,
    ScrollOptions,
};
