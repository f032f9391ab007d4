use portfolio_core::scroll::Scheduler;

use std::time::Duration;

use gloo::timers::callback::Timeout;

/// `setTimeout`-backed scheduler. Dropping the returned [`Timeout`] clears it.
pub(crate) struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Timer = Timeout;

    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_millis(delay), task)
    }
}

/// `setTimeout` takes whole milliseconds as a `u32`; longer delays saturate.
pub(crate) fn delay_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
