//! Owns one game: its state snapshot, its RNG and the timers driving it.

use crate::error::Result;
use crate::game::{Effect, Event, GameConfig, GameState, reduce};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Timer backend for a game.
///
/// Implementations fire `Event::Tick` every `period_ms` while the ticker runs,
/// and `Event::RemoveTarget { round, index }` once per scheduled removal.
/// Handles must be released when stopped, cancelled, or when the scheduler is
/// dropped.
pub trait Scheduler {
    fn start_ticker(&mut self, period_ms: u32);
    fn stop_ticker(&mut self);
    fn schedule_removal(&mut self, round: u64, index: u32, delay_ms: u32);
    /// Forget the handle of a removal that has fired.
    fn release_removal(&mut self, round: u64, index: u32);
    fn cancel_removals(&mut self);
}

pub struct GameController<S: Scheduler> {
    config: GameConfig,
    state: GameState,
    rng: StdRng,
    scheduler: S,
}

impl<S: Scheduler> GameController<S> {
    pub fn new(config: GameConfig, scheduler: S) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            state: GameState::new(),
            rng,
            scheduler,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Run one event through the reducer and carry out its effects.
    pub fn dispatch(&mut self, event: Event) -> &GameState {
        if let Event::RemoveTarget { round, index } = event {
            self.scheduler.release_removal(round, index);
        }
        let step = reduce(&self.state, &event, &self.config, &mut self.rng);
        self.state = step.state;
        for effect in step.effects {
            self.apply(effect);
        }
        &self.state
    }

    /// The button handler: Play before the first round, Restart afterwards.
    pub fn press_button(&mut self) -> &GameState {
        let event = if self.state.has_started() {
            Event::Restart
        } else {
            Event::Play
        };
        self.dispatch(event)
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::StartTicker { period_ms } => self.scheduler.start_ticker(period_ms),
            Effect::StopTicker => self.scheduler.stop_ticker(),
            Effect::ScheduleRemoval {
                round,
                index,
                delay_ms,
            } => self.scheduler.schedule_removal(round, index, delay_ms),
            Effect::CancelRemovals => self.scheduler.cancel_removals(),
        }
    }
}

impl<S: Scheduler> Drop for GameController<S> {
    fn drop(&mut self) {
        self.scheduler.stop_ticker();
        self.scheduler.cancel_removals();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Phase;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Timers {
        ticker: Option<u32>,
        ticker_starts: usize,
        removals: Vec<(u64, u32, u32)>,
    }

    #[derive(Clone, Default)]
    struct FakeScheduler(Rc<RefCell<Timers>>);

    impl Scheduler for FakeScheduler {
        fn start_ticker(&mut self, period_ms: u32) {
            let mut t = self.0.borrow_mut();
            t.ticker = Some(period_ms);
            t.ticker_starts += 1;
        }
        fn stop_ticker(&mut self) {
            self.0.borrow_mut().ticker = None;
        }
        fn schedule_removal(&mut self, round: u64, index: u32, delay_ms: u32) {
            self.0.borrow_mut().removals.push((round, index, delay_ms));
        }
        fn release_removal(&mut self, round: u64, index: u32) {
            self.0
                .borrow_mut()
                .removals
                .retain(|&(r, i, _)| (r, i) != (round, index));
        }
        fn cancel_removals(&mut self) {
            self.0.borrow_mut().removals.clear();
        }
    }

    fn controller(count: &str) -> (GameController<FakeScheduler>, Rc<RefCell<Timers>>) {
        let scheduler = FakeScheduler::default();
        let timers = scheduler.0.clone();
        let mut c = GameController::new(GameConfig::seeded(11), scheduler).unwrap();
        c.dispatch(Event::SetTargetCount(count.into()));
        (c, timers)
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = GameConfig {
            tick_ms: 0,
            ..Default::default()
        };
        assert!(GameController::new(config, FakeScheduler::default()).is_err());
    }

    #[test]
    fn test_ticker_follows_running() {
        let (mut c, timers) = controller("2");
        assert_eq!(timers.borrow().ticker, None);

        c.press_button();
        assert_eq!(timers.borrow().ticker, Some(100));

        c.dispatch(Event::Click(2));
        assert_eq!(c.state().phase, Phase::Failed);
        assert_eq!(timers.borrow().ticker, None);
    }

    #[test]
    fn test_restart_replaces_ticker() {
        let (mut c, timers) = controller("2");
        c.press_button();
        c.press_button();
        assert_eq!(c.state().round, 2);
        assert_eq!(timers.borrow().ticker_starts, 2);
        assert_eq!(timers.borrow().ticker, Some(100));
    }

    #[test]
    fn test_button_switches_after_first_round() {
        let (mut c, _timers) = controller("0");
        c.press_button();
        assert!(c.state().outcome.is_some());
        assert!(!c.state().has_started());

        c.dispatch(Event::SetTargetCount("3".into()));
        c.press_button();
        assert!(c.state().has_started());

        // Restart with zero points does nothing
        c.dispatch(Event::SetTargetCount("0".into()));
        let before = c.state().clone();
        c.press_button();
        assert_eq!(c.state(), &before);
    }

    #[test]
    fn test_removals_scheduled_and_released() {
        let (mut c, timers) = controller("3");
        c.press_button();
        c.dispatch(Event::Click(1));
        c.dispatch(Event::Click(2));
        assert_eq!(timers.borrow().removals, vec![(1, 1, 700)]);

        c.dispatch(Event::RemoveTarget { round: 1, index: 1 });
        assert!(timers.borrow().removals.is_empty());
        assert!(c.state().target(1).is_none());
    }

    #[test]
    fn test_new_round_cancels_pending_removals() {
        let (mut c, timers) = controller("3");
        c.press_button();
        c.dispatch(Event::Click(1));
        c.dispatch(Event::Click(2));
        assert_eq!(timers.borrow().removals.len(), 1);

        c.press_button();
        assert!(timers.borrow().removals.is_empty());
        assert_eq!(c.state().targets.len(), 3);
    }

    #[test]
    fn test_drop_releases_timers() {
        let (mut c, timers) = controller("3");
        c.press_button();
        c.dispatch(Event::Click(1));
        c.dispatch(Event::Click(2));
        drop(c);

        let t = timers.borrow();
        assert_eq!(t.ticker, None);
        assert!(t.removals.is_empty());
    }

    #[test]
    fn test_seeded_layout_is_reproducible() {
        let (mut a, _) = controller("6");
        let (mut b, _) = controller("6");
        a.press_button();
        b.press_button();
        assert_eq!(a.state().targets, b.state().targets);
    }
}
