use super::{
    config::GameConfig,
    event::{Effect, Event},
    input::parse_target_count,
    layout::random_layout,
    state::{GameState, Outcome, Phase},
};
use rand::Rng;

/// Result of applying one event
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: GameState,
    pub effects: Vec<Effect>,
}

impl Step {
    fn unchanged(state: &GameState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
        }
    }
}

/// Apply `event` to `state`, returning the next state and the timer effects
/// the caller must carry out. The RNG is only consulted when a round starts.
pub fn reduce<R: Rng + ?Sized>(
    state: &GameState,
    event: &Event,
    config: &GameConfig,
    rng: &mut R,
) -> Step {
    match event {
        Event::SetTargetCount(raw) => set_target_count(state, raw),
        Event::Play => {
            if !is_playable(state.target_count, config) {
                let mut next = state.clone();
                next.outcome = Some(Outcome::invalid_count());
                log::info!("play rejected: point count is {}", state.target_count);
                Step {
                    state: next,
                    effects: Vec::new(),
                }
            } else {
                start_round(state, config, rng)
            }
        }
        // Only reachable after a round has started; an unplayable count is ignored.
        Event::Restart => {
            if !is_playable(state.target_count, config) {
                Step::unchanged(state)
            } else {
                start_round(state, config, rng)
            }
        }
        Event::Click(index) => click(state, *index, config),
        Event::Tick => {
            if !state.is_running() {
                return Step::unchanged(state);
            }
            let mut next = state.clone();
            next.elapsed_ms += u64::from(config.tick_ms);
            Step {
                state: next,
                effects: Vec::new(),
            }
        }
        Event::RemoveTarget { round, index } => remove_target(state, *round, *index),
    }
}

/// A round needs at least one point and no more than the board allows.
fn is_playable(count: u32, config: &GameConfig) -> bool {
    count > 0 && count <= config.max_targets
}

fn set_target_count(state: &GameState, raw: &str) -> Step {
    match parse_target_count(raw) {
        Some(count) => {
            let mut next = state.clone();
            next.target_count = count;
            Step {
                state: next,
                effects: Vec::new(),
            }
        }
        None => Step::unchanged(state),
    }
}

fn start_round<R: Rng + ?Sized>(state: &GameState, config: &GameConfig, rng: &mut R) -> Step {
    let count = state.target_count;
    let next = GameState {
        target_count: count,
        targets: random_layout(count, config, rng),
        next_index: 1,
        previous_index: None,
        elapsed_ms: 0,
        phase: Phase::Running,
        outcome: None,
        round: state.round + 1,
        round_size: count,
    };
    log::info!("round {} started with {} points", next.round, count);
    Step {
        state: next,
        effects: vec![
            Effect::CancelRemovals,
            Effect::StartTicker {
                period_ms: config.tick_ms,
            },
        ],
    }
}

fn click(state: &GameState, index: u32, config: &GameConfig) -> Step {
    if !state.is_running() {
        return Step::unchanged(state);
    }

    let mut next = state.clone();
    let mut effects = Vec::new();

    if index != state.next_index {
        log::info!(
            "round {} failed: clicked {} while {} was required",
            state.round,
            index,
            state.next_index
        );
        next.outcome = Some(Outcome::game_over());
        next.phase = Phase::Failed;
        effects.push(Effect::StopTicker);
        return Step {
            state: next,
            effects,
        };
    }

    let current = state.next_index;
    next.next_index = current + 1;

    if let Some(previous) = state.previous_index {
        if let Some(target) = next.target_mut(previous) {
            target.fading = true;
        }
        effects.push(Effect::ScheduleRemoval {
            round: state.round,
            index: previous,
            delay_ms: config.fade_ms,
        });
    }

    next.previous_index = Some(index);
    if let Some(target) = next.target_mut(index) {
        target.clicked = true;
    }
    log::debug!("round {}: cleared point {}", state.round, index);

    // Index as it was before advancing, against the live point count.
    if current == state.target_count {
        log::info!("round {} cleared in {}", state.round, state.elapsed_label());
        next.outcome = Some(Outcome::cleared());
        next.phase = Phase::Cleared;
        effects.push(Effect::StopTicker);
    }

    Step {
        state: next,
        effects,
    }
}

fn remove_target(state: &GameState, round: u64, index: u32) -> Step {
    if round != state.round {
        log::debug!(
            "ignoring removal of point {} from stale round {} (current {})",
            index,
            round,
            state.round
        );
        return Step::unchanged(state);
    }
    let mut next = state.clone();
    next.targets.retain(|t| t.index != index);
    Step {
        state: next,
        effects: Vec::new(),
    }
}
