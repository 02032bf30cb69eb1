#[cfg(feature = "serde")]
use serde::Serialize;

pub const MSG_ALL_CLEARED: &str = "ALL CLEARED";
pub const MSG_GAME_OVER: &str = "GAME OVER";
pub const MSG_INVALID_COUNT: &str = "Please enter a valid number of points.";

/// Top-left corner of a target inside the play area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One numbered point on the board.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Target {
    /// 1-based rank; the order it must be clicked in
    pub index: u32,
    pub position: Position,
    /// Set once the target was clicked in order; never cleared
    pub clicked: bool,
    /// Set while the target is on its way out
    pub fading: bool,
}

impl Target {
    pub fn new(index: u32, position: Position) -> Self {
        Self {
            index,
            position,
            clicked: false,
            fading: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Phase {
    /// Nothing played yet
    Idle,
    Running,
    /// Every target clicked in order
    Cleared,
    /// Out-of-order click
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum OutcomeKind {
    Success,
    Failure,
}

/// Message shown above the board plus its colour class.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Outcome {
    pub message: &'static str,
    pub kind: OutcomeKind,
}

impl Outcome {
    pub fn cleared() -> Self {
        Self {
            message: MSG_ALL_CLEARED,
            kind: OutcomeKind::Success,
        }
    }

    pub fn game_over() -> Self {
        Self {
            message: MSG_GAME_OVER,
            kind: OutcomeKind::Failure,
        }
    }

    pub fn invalid_count() -> Self {
        Self {
            message: MSG_INVALID_COUNT,
            kind: OutcomeKind::Failure,
        }
    }
}

/// Complete game state. Treated as an immutable snapshot: the reducer
/// produces a new value for every event.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GameState {
    /// Value of the point-count field
    pub target_count: u32,
    /// Targets still on the board, in index order
    pub targets: Vec<Target>,
    /// The only index that may be clicked next
    pub next_index: u32,
    /// Last correctly clicked index, kept until its fade starts
    pub previous_index: Option<u32>,
    pub elapsed_ms: u64,
    pub phase: Phase,
    pub outcome: Option<Outcome>,
    /// Id of the current round; 0 until the first round starts
    pub round: u64,
    /// `target_count` as it was when the current round started
    pub round_size: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            target_count: 0,
            targets: Vec::new(),
            next_index: 1,
            previous_index: None,
            elapsed_ms: 0,
            phase: Phase::Idle,
            outcome: None,
            round: 0,
            round_size: 0,
        }
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// True once any round has been started; drives the Play/Restart switch.
    pub fn has_started(&self) -> bool {
        self.round > 0
    }

    pub fn target(&self, index: u32) -> Option<&Target> {
        self.targets.iter().find(|t| t.index == index)
    }

    pub(crate) fn target_mut(&mut self, index: u32) -> Option<&mut Target> {
        self.targets.iter_mut().find(|t| t.index == index)
    }

    /// Elapsed time as shown in the readout, e.g. `"2.3s"`.
    pub fn elapsed_label(&self) -> String {
        format_elapsed(self.elapsed_ms)
    }
}

pub fn format_elapsed(elapsed_ms: u64) -> String {
    format!("{:.1}s", elapsed_ms as f64 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.is_running());
        assert!(!state.has_started());
        assert_eq!(state.next_index, 1);
        assert!(state.targets.is_empty());
        assert!(state.outcome.is_none());
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "0.0s");
        assert_eq!(format_elapsed(100), "0.1s");
        assert_eq!(format_elapsed(2300), "2.3s");
        assert_eq!(format_elapsed(61_000), "61.0s");
    }

    #[test]
    fn test_target_lookup() {
        let mut state = GameState::new();
        state.targets = vec![
            Target::new(1, Position::new(0.0, 0.0)),
            Target::new(2, Position::new(10.0, 10.0)),
        ];
        assert_eq!(state.target(2).map(|t| t.position.x), Some(10.0));
        assert!(state.target(3).is_none());

        state.target_mut(1).unwrap().clicked = true;
        assert!(state.target(1).unwrap().clicked);
    }

    #[test]
    fn test_outcome_colours() {
        assert_eq!(Outcome::cleared().kind, OutcomeKind::Success);
        assert_eq!(Outcome::game_over().kind, OutcomeKind::Failure);
        assert_eq!(Outcome::invalid_count().kind, OutcomeKind::Failure);
        assert_eq!(Outcome::invalid_count().message, MSG_INVALID_COUNT);
    }
}
