use std::collections::HashMap;

use gloo::timers::callback::{Interval, Timeout};

use super::app;
use crate::controller::Scheduler;
use crate::game::Event;

/// Browser timers. Dropping a gloo handle clears the underlying
/// `setInterval`/`setTimeout`, so releasing a handle is just dropping it.
#[derive(Default)]
pub struct WebScheduler {
    ticker: Option<Interval>,
    removals: HashMap<(u64, u32), Timeout>,
}

impl WebScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for WebScheduler {
    fn start_ticker(&mut self, period_ms: u32) {
        // Replacing drops (and clears) the previous interval.
        self.ticker = Some(Interval::new(period_ms, || app::dispatch(Event::Tick)));
    }

    fn stop_ticker(&mut self) {
        self.ticker = None;
    }

    fn schedule_removal(&mut self, round: u64, index: u32, delay_ms: u32) {
        let timeout = Timeout::new(delay_ms, move || {
            app::dispatch(Event::RemoveTarget { round, index })
        });
        self.removals.insert((round, index), timeout);
    }

    fn release_removal(&mut self, round: u64, index: u32) {
        // Already fired; clearing a spent timeout id is a no-op.
        self.removals.remove(&(round, index));
    }

    fn cancel_removals(&mut self) {
        if !self.removals.is_empty() {
            log::debug!("cancelling {} pending removals", self.removals.len());
        }
        self.removals.clear();
    }
}
