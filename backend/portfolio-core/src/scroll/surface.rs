//! Host boundary for the scroll controller.

use std::time::Duration;

/// How a scroll animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Where the target lands in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlignment {
    Start,
    Center,
    End,
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollAlignment,
}

impl ScrollOptions {
    /// Smooth scroll with the target's top edge at the top of the viewport.
    pub const SMOOTH_TO_TOP: ScrollOptions = ScrollOptions {
        behavior: ScrollBehavior::Smooth,
        block: ScrollAlignment::Start,
    };
}

/// The rendered page as seen by the controller.
pub trait PageSurface: 'static {
    /// Handle to a DOM element (or a test stand-in).
    type Element: Clone + 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Fire-and-forget: the controller never waits for the animation.
    fn scroll_into_view(&self, element: &Self::Element, options: ScrollOptions);

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Must be idempotent: adding a class twice leaves one class.
    fn add_class(&self, element: &Self::Element, class: &str);
}

/// Deferred execution on the host's event loop.
pub trait Scheduler {
    /// Pending task handle. Dropping it cancels the task.
    type Timer;

    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Timer;
}

/// A host resource owned by the controller until teardown.
pub trait Release {
    fn release(self: Box<Self>);
}

impl<F: FnOnce()> Release for F {
    fn release(self: Box<Self>) {
        (*self)()
    }
}

/// One entry of an observation batch.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry<E> {
    pub target: E,
    pub is_intersecting: bool,
}

impl<E> IntersectionEntry<E> {
    pub fn new(target: E, is_intersecting: bool) -> Self {
        Self {
            target,
            is_intersecting,
        }
    }
}
