/// Everything that can happen to a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Raw text typed into the point-count field
    SetTargetCount(String),
    /// Play button (no round started yet)
    Play,
    /// Restart button (a round has been started before)
    Restart,
    /// A target was clicked
    Click(u32),
    /// Elapsed-time ticker fired
    Tick,
    /// Deferred removal of a faded target came due
    RemoveTarget { round: u64, index: u32 },
}

/// Side effects requested by the reducer. The reducer never touches timers
/// itself; the controller carries these out against its scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// (Re)start the elapsed-time ticker
    StartTicker { period_ms: u32 },
    StopTicker,
    /// Fire `Event::RemoveTarget { round, index }` after `delay_ms`
    ScheduleRemoval { round: u64, index: u32, delay_ms: u32 },
    /// Drop every pending removal
    CancelRemovals,
}
