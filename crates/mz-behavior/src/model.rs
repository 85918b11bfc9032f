//! The `BehaviorModel` trait — the seam between the tick driver and the
//! controllers.

use mz_agent::AgentMind;
use mz_core::AgentId;

use crate::{Decision, TickContext};

/// Pluggable agent behavior.
///
/// Called once per agent per tick, in tick order.  The context is rebuilt
/// before every call so each agent sees the moves already made this tick.
/// The model may update the agent's own memory (fear counter, heading) and
/// consume its RNG; everything else is read-only.  The returned
/// [`Decision`] is applied by the driver: occupancy, position, visited set,
/// and performance history.
///
/// # Example
///
/// ```rust,ignore
/// struct StandStill;
///
/// impl BehaviorModel for StandStill {
///     fn decide(&self, _agent: AgentId, _ctx: &TickContext<'_>, _mind: &mut AgentMind) -> Decision {
///         Decision::stay(
///             BehavioralState::Pursuer(PursuerState::Normal),
///             Completion::Pursuer(ChaseState::Chasing),
///             Action::Stop,
///             Outcome::Stopped,
///         )
///     }
/// }
/// ```
pub trait BehaviorModel: Send + Sync + 'static {
    fn decide(
        &self,
        agent: AgentId,
        ctx:   &TickContext<'_>,
        mind:  &mut AgentMind,
    ) -> Decision;
}
