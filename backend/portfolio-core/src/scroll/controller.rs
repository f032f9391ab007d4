use super::anchor::{AnchorOutcome, fragment_of};
use super::surface::{IntersectionEntry, PageSurface, Release, Scheduler, ScrollOptions};

use models::RevealOptions;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, info, trace};

/// Surface plus the attached flag, shared with pending reveal tasks.
struct MountedPage<P> {
    surface: P,
    attached: Cell<bool>,
}

/// A scheduled reveal. `fired` flips once the task has run so the timer can be pruned.
struct PendingReveal<T> {
    _timer: T,
    fired: Rc<Cell<bool>>,
}

/// Drives anchor navigation and scroll reveals for one page view.
///
/// Single-threaded by construction (`Rc`/`Cell`), matching the browser event
/// loop it runs on. Dropping the controller tears it down.
pub struct ScrollController<P: PageSurface, S: Scheduler> {
    page: Rc<MountedPage<P>>,
    scheduler: S,
    options: RevealOptions,
    timers: RefCell<Vec<PendingReveal<S::Timer>>>,
    resources: RefCell<Vec<Box<dyn Release>>>,
}

impl<P: PageSurface, S: Scheduler> ScrollController<P, S> {
    pub fn mount(surface: P, scheduler: S, options: RevealOptions) -> Self {
        info!(
            "Scroll controller mounted (threshold {}, margin '{}', stagger {}ms)",
            options.threshold, options.root_margin, options.stagger_ms
        );

        Self {
            page: Rc::new(MountedPage {
                surface,
                attached: Cell::new(true),
            }),
            scheduler,
            options,
            timers: RefCell::new(Vec::new()),
            resources: RefCell::new(Vec::new()),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.page.attached.get()
    }

    /// Number of reveals scheduled but not yet run.
    pub fn pending_reveals(&self) -> usize {
        self.timers
            .borrow()
            .iter()
            .filter(|pending| !pending.fired.get())
            .count()
    }

    /// Hand a host resource to the controller; it is released on teardown.
    ///
    /// Attaching to a torn-down controller releases the resource immediately.
    pub fn attach<R: Release + 'static>(&self, resource: R) {
        if !self.is_attached() {
            Box::new(resource).release();
            return;
        }
        self.resources.borrow_mut().push(Box::new(resource));
    }

    /// Handle activation of an anchor with the given `href`.
    pub fn on_anchor_click(&self, href: &str) -> AnchorOutcome {
        if !self.is_attached() {
            return AnchorOutcome::Ignored;
        }

        let Some(fragment) = fragment_of(href) else {
            return AnchorOutcome::Ignored;
        };

        let target = if fragment.is_empty() {
            None
        } else {
            self.page.surface.element_by_id(fragment)
        };

        match target {
            Some(element) => {
                self.page
                    .surface
                    .scroll_into_view(&element, ScrollOptions::SMOOTH_TO_TOP);
                debug!("Scrolling to #{fragment}");
                AnchorOutcome::Scrolled
            }
            None => {
                debug!("No element for #{fragment}, navigation suppressed");
                AnchorOutcome::Suppressed
            }
        }
    }

    /// Handle one observation batch.
    ///
    /// Each intersecting entry is revealed after `index * stagger`, where
    /// `index` is its position in the batch. Entries that are already
    /// revealed are skipped. Returns the number of reveals scheduled.
    pub fn on_intersections(&self, batch: &[IntersectionEntry<P::Element>]) -> usize {
        if !self.is_attached() {
            return 0;
        }

        let mut timers = self.timers.borrow_mut();
        timers.retain(|pending| !pending.fired.get());
        let mut scheduled = 0;

        for (rank, entry) in batch.iter().enumerate() {
            if !entry.is_intersecting {
                continue;
            }
            if self
                .page
                .surface
                .has_class(&entry.target, &self.options.revealed_class)
            {
                continue;
            }

            let fired = Rc::new(Cell::new(false));
            let task = reveal_task(
                Rc::downgrade(&self.page),
                entry.target.clone(),
                self.options.revealed_class.clone(),
                Rc::clone(&fired),
            );
            timers.push(PendingReveal {
                _timer: self.scheduler.defer(self.options.delay_for(rank), task),
                fired,
            });
            scheduled += 1;
        }
        drop(timers);

        trace!(
            "Observation batch of {} entries, {scheduled} reveals scheduled, {} pending",
            batch.len(),
            self.pending_reveals()
        );
        scheduled
    }

    /// Stop everything: cancel pending reveals and release attached resources.
    ///
    /// Idempotent. After this returns no reveal fires and no click is intercepted.
    pub fn teardown(&self) {
        if !self.page.attached.replace(false) {
            return;
        }

        let timers = std::mem::take(&mut *self.timers.borrow_mut());
        let cancelled = timers.iter().filter(|pending| !pending.fired.get()).count();
        drop(timers);

        let resources = std::mem::take(&mut *self.resources.borrow_mut());
        let released = resources.len();
        for resource in resources.into_iter().rev() {
            resource.release();
        }

        info!(
            "Scroll controller torn down ({cancelled} pending reveals cancelled, {released} resources released)"
        );
    }
}

impl<P: PageSurface, S: Scheduler> Drop for ScrollController<P, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn reveal_task<P: PageSurface>(
    page: Weak<MountedPage<P>>,
    target: P::Element,
    class: String,
    fired: Rc<Cell<bool>>,
) -> Box<dyn FnOnce()> {
    Box::new(move || {
        fired.set(true);
        let Some(page) = page.upgrade() else {
            return;
        };
        // A target can be scheduled twice if it left and re-entered before its first reveal.
        if page.attached.get() && !page.surface.has_class(&target, &class) {
            page.surface.add_class(&target, &class);
        }
    })
}
