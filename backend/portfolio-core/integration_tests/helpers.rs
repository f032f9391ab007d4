//! Test doubles for the scroll controller.
//!
//! - [`FakePage`]: a page whose elements are plain id strings
//! - [`ManualScheduler`]: a virtual clock advanced explicitly by the test

use portfolio_core::scroll::{PageSurface, Scheduler, ScrollOptions};

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashSet};
use std::rc::Rc;
use std::time::Duration;

#[derive(Default)]
struct PageLog {
    ids: HashSet<String>,
    classes: BTreeSet<(String, String)>,
    scrolls: Vec<(String, ScrollOptions)>,
    reveal_order: Vec<(String, Duration)>,
    add_class_calls: Vec<String>,
}

/// Fake page. Clones share state so the test can inspect what the controller did.
#[derive(Clone)]
pub struct FakePage {
    log: Rc<RefCell<PageLog>>,
    clock: ManualScheduler,
}

impl FakePage {
    pub fn with_ids(ids: &[&str], clock: &ManualScheduler) -> Self {
        let log = PageLog {
            ids: ids.iter().map(|id| id.to_string()).collect(),
            ..PageLog::default()
        };
        Self {
            log: Rc::new(RefCell::new(log)),
            clock: clock.clone(),
        }
    }

    pub fn scrolls(&self) -> Vec<(String, ScrollOptions)> {
        self.log.borrow().scrolls.clone()
    }

    /// Revealed ids with the virtual time at which each was marked.
    pub fn reveals(&self) -> Vec<(String, Duration)> {
        self.log.borrow().reveal_order.clone()
    }

    /// How many times the controller asked to add a class to `id`.
    pub fn add_class_calls(&self, id: &str) -> usize {
        self.log
            .borrow()
            .add_class_calls
            .iter()
            .filter(|called| called.as_str() == id)
            .count()
    }

    pub fn is_revealed(&self, id: &str, class: &str) -> bool {
        self.log
            .borrow()
            .classes
            .contains(&(id.to_string(), class.to_string()))
    }
}

impl PageSurface for FakePage {
    type Element = String;

    fn element_by_id(&self, id: &str) -> Option<String> {
        self.log.borrow().ids.get(id).cloned()
    }

    fn scroll_into_view(&self, element: &String, options: ScrollOptions) {
        self.log.borrow_mut().scrolls.push((element.clone(), options));
    }

    fn has_class(&self, element: &String, class: &str) -> bool {
        self.is_revealed(element, class)
    }

    fn add_class(&self, element: &String, class: &str) {
        let mut log = self.log.borrow_mut();
        log.add_class_calls.push(element.clone());
        if log.classes.insert((element.clone(), class.to_string())) {
            let now = self.clock.now();
            log.reveal_order.push((element.clone(), now));
        }
    }
}

struct PendingTask {
    due: Duration,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_seq: u64,
    queue: Vec<PendingTask>,
    ignore_cancellation: bool,
}

/// Virtual-time scheduler. Tasks only run inside [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ClockState>>,
    live_timers: Rc<Cell<usize>>,
}

/// Cancels its task when dropped, like a browser timeout handle.
pub struct ManualTimer {
    cancelled: Option<Rc<Cell<bool>>>,
    live_timers: Rc<Cell<usize>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        if let Some(cancelled) = &self.cancelled {
            cancelled.set(true);
        }
        self.live_timers.set(self.live_timers.get() - 1);
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scheduler whose timers keep running after their handle is dropped,
    /// like a host that misses a cancellation.
    pub fn ignoring_cancellation() -> Self {
        let scheduler = Self::default();
        scheduler.state.borrow_mut().ignore_cancellation = true;
        scheduler
    }

    /// Timer handles created and not yet dropped.
    pub fn live_timers(&self) -> usize {
        self.live_timers.get()
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Tasks queued and not yet run or cancelled.
    pub fn pending(&self) -> usize {
        self.state
            .borrow()
            .queue
            .iter()
            .filter(|task| !task.cancelled.get())
            .count()
    }

    /// Move the clock forward, running every due task in (due, insertion) order.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;

        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let index = state
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.due <= target)
                    .min_by_key(|(_, task)| (task.due, task.seq))
                    .map(|(index, _)| index);
                match index {
                    Some(index) => {
                        let task = state.queue.remove(index);
                        state.now = task.due;
                        Some(task)
                    }
                    None => None,
                }
            };

            let Some(task) = next else {
                break;
            };
            if !task.cancelled.get() {
                (task.task)();
            }
        }

        self.state.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Timer = ManualTimer;

    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ManualTimer {
        let cancelled = Rc::new(Cell::new(false));
        let mut state = self.state.borrow_mut();
        let seq = state.next_seq;
        state.next_seq += 1;
        let due = state.now + delay;
        state.queue.push(PendingTask {
            due,
            seq,
            cancelled: Rc::clone(&cancelled),
            task,
        });
        let ignore_cancellation = state.ignore_cancellation;
        self.live_timers.set(self.live_timers.get() + 1);
        ManualTimer {
            cancelled: (!ignore_cancellation).then_some(cancelled),
            live_timers: Rc::clone(&self.live_timers),
        }
    }
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
