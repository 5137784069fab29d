//! Per-tick entry point
//!
//! ```text
//! queue busy  → step top action (no decision work)
//! queue empty → classify → behavior table → push ≤ 1 action → step it
//! ```
//!
//! The freshly pushed action is stepped in the same tick so its control output
//! wins over the return-home steering issued during the decision.

use serde::Serialize;

use crate::config::DecisionConfig;

use super::action_queue::{ActionKind, ActionQueue, StepOutcome};
use super::behavior::{Behavior, BehaviorSelector};
use super::services::BotServices;
use super::tactical::TacticalFacts;
use super::world::WorldSnapshot;

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickReport {
    pub tick: u64,
    /// True when an in-progress action ran and no decision was made
    pub deferred: bool,
    pub behavior: Option<Behavior>,
    pub facts: Option<TacticalFacts>,
    /// Kind of the action pushed this tick, if any
    pub pushed: Option<ActionKind>,
    pub returned_home: bool,
    pub step: StepOutcome,
    /// Stack depth after the tick
    pub queue_depth: usize,
}

/// 에이전트 하나의 의사결정 엔진. 액션 스택을 소유한다.
#[derive(Debug, Default)]
pub struct DecisionEngine {
    selector: BehaviorSelector,
    queue: ActionQueue,
}

impl DecisionEngine {
    pub fn new(config: DecisionConfig) -> Self {
        Self { selector: BehaviorSelector::new(config), queue: ActionQueue::new() }
    }

    pub fn config(&self) -> &DecisionConfig {
        self.selector.config()
    }

    pub fn queue(&self) -> &ActionQueue {
        &self.queue
    }

    /// Drop queued work, e.g. after a goal reset.
    pub fn reset(&mut self) {
        self.queue.clear();
    }

    pub fn tick<S: BotServices + ?Sized>(
        &mut self,
        world: &WorldSnapshot,
        services: &mut S,
    ) -> TickReport {
        if !self.queue.is_empty() {
            let step = self.queue.step_top(world);
            return TickReport {
                tick: world.tick,
                deferred: true,
                behavior: None,
                facts: None,
                pushed: None,
                returned_home: false,
                step,
                queue_depth: self.queue.len(),
            };
        }

        let decision = self.selector.decide(world, services);
        let pushed = decision.action.as_ref().map(|a| a.kind().clone());
        if let Some(action) = decision.action {
            self.queue.push(action);
        }

        tracing::debug!(
            tick = world.tick,
            behavior = decision.behavior.as_str(),
            pushed = pushed.as_ref().map(ActionKind::as_str),
            ball_closer = decision.facts.ball_closer_than_agent_to_own_goal,
            opponent_closer = decision.facts.opponent_closer_than_agent_to_ball,
            boost = world.me.boost,
            "decision"
        );

        let step = self.queue.step_top(world);
        TickReport {
            tick: world.tick,
            deferred: false,
            behavior: Some(decision.behavior),
            facts: Some(decision.facts),
            pushed,
            returned_home: decision.returned_home,
            step,
            queue_depth: self.queue.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::geometry::vec3;
    use crate::engine::scripted::ScriptedServices;
    use crate::engine::services::CLEAR_TARGET;
    use crate::engine::world::{AgentState, TeamSide};

    fn open_play() -> WorldSnapshot {
        WorldSnapshot::new(
            TeamSide::Blue,
            AgentState::new(vec3(0.0, -3000.0, 17.0), 50.0),
            vec3(0.0, 0.0, 93.0),
        )
    }

    #[test]
    fn test_decides_then_defers() {
        let mut engine = DecisionEngine::default();
        let mut services = ScriptedServices::default().with_routine_ticks(3);
        let world = open_play();

        let first = engine.tick(&world, &mut services);
        assert!(!first.deferred);
        assert_eq!(first.behavior, Some(Behavior::ShotAttempt));
        assert!(matches!(first.pushed, Some(ActionKind::Shot { .. })));
        assert_eq!(first.queue_depth, 1);

        let second = engine.tick(&world.clone().with_tick(1), &mut services);
        assert!(second.deferred);
        assert!(second.pushed.is_none());
        assert!(matches!(second.step, StepOutcome::Running(_)));

        let third = engine.tick(&world.clone().with_tick(2), &mut services);
        assert!(matches!(third.step, StepOutcome::Completed(_)));
        assert_eq!(third.queue_depth, 0);

        // queue drained: decides again
        let fourth = engine.tick(&world.with_tick(3), &mut services);
        assert!(!fourth.deferred);
    }

    #[test]
    fn test_busy_queue_makes_no_service_calls() {
        let mut engine = DecisionEngine::default();
        let mut services = ScriptedServices::default().with_intercepts(CLEAR_TARGET, 1);
        let world = open_play();
        engine.tick(&world, &mut services);
        let before = services.calls().len();

        engine.tick(&world, &mut services);
        assert_eq!(services.calls().len(), before);
    }

    #[test]
    fn test_reset_clears_queue() {
        let mut engine = DecisionEngine::default();
        let mut services = ScriptedServices::default();
        engine.tick(&open_play(), &mut services);
        assert!(!engine.queue().is_empty());
        engine.reset();
        assert!(engine.queue().is_empty());
    }
}
