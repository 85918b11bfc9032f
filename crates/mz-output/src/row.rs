//! Plain data row types written by output backends.

/// One agent at a snapshot tick, with the decision that put it there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub tick:     u64,
    pub agent_id: u32,
    pub role:     &'static str,
    pub x:        i32,
    pub y:        i32,
    /// Behavioral state label; empty before the agent's first decision and
    /// right after a reset.
    pub state:    &'static str,
    pub action:   &'static str,
    pub outcome:  &'static str,
    /// Edges in the committed path.
    pub path_len: u32,
    /// Winning candidate score, when the decision ranked candidates.
    pub score:    Option<i64>,
}

/// Score and movement totals for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:      u64,
    pub moved:     u64,
    pub score:     u64,
    pub eaten:     u64,
    pub remaining: u64,
    pub captures:  u64,
}
