//! Behavior selector (priority table)
//!
//! Not a persistent state machine: evaluated fresh on every tick where the
//! action queue is empty.
//!
//! ```text
//! kickoff                              → KickoffApproach (pad, then home)
//! opp closer ∧ ball closer to our goal → StandardDefense
//! opp closer ∧ ¬ball closer            → ClearAttempt, else ShotAttempt
//! ¬opp closer ∧ ball closer            → StandardDefense, clear layered on top
//! neither                              → ShotAttempt
//! ```

use serde::Serialize;

use crate::config::DecisionConfig;

use super::action_queue::Action;
use super::geometry::vec3;
use super::resource_selector::select_best_pad;
use super::services::{take_best, BotServices, NamedTargets, TargetPair, CLEAR_TARGET};
use super::tactical::{classify_with_scope, TacticalFacts};
use super::world::WorldSnapshot;

/// 이번 틱에 선택된 행동
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    KickoffApproach,
    StandardDefense,
    ClearAttempt,
    ShotAttempt,
}

impl Behavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            Behavior::KickoffApproach => "kickoff_approach",
            Behavior::StandardDefense => "standard_defense",
            Behavior::ClearAttempt => "clear_attempt",
            Behavior::ShotAttempt => "shot_attempt",
        }
    }
}

/// Output of one evaluation of the table.
#[derive(Debug)]
pub struct Decision {
    pub behavior: Behavior,
    pub facts: TacticalFacts,
    /// At most one new action per tick
    pub action: Option<Action>,
    /// Whether return-home steering was issued this tick
    pub returned_home: bool,
}

/// Side-wall clearing points at the ball's current length position.
///
/// The pair is mirrored across the field center and scaled by team side.
pub fn clear_targets(world: &WorldSnapshot, lateral_offset: f32) -> TargetPair {
    let x = lateral_offset * world.team.side();
    let y = world.ball.location.y;
    (vec3(-x, y, 0.0), vec3(x, y, 0.0))
}

#[derive(Debug, Clone, Default)]
pub struct BehaviorSelector {
    config: DecisionConfig,
}

impl BehaviorSelector {
    pub fn new(config: DecisionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// Evaluate the table for `world`. The caller pushes `Decision::action`.
    pub fn decide<S: BotServices + ?Sized>(
        &self,
        world: &WorldSnapshot,
        services: &mut S,
    ) -> Decision {
        let facts = classify_with_scope(world, self.config.opponent_scope);
        let home = world.own_goal;

        if world.kickoff {
            let action = self.pad_detour(world, services);
            services.return_home(world, home);
            return Decision {
                behavior: Behavior::KickoffApproach,
                facts,
                action,
                returned_home: true,
            };
        }

        let mut targets = NamedTargets::new();
        targets.insert(
            CLEAR_TARGET.to_string(),
            clear_targets(world, self.config.clear_lateral_offset),
        );
        let mut options = services.find_intercepts(world, &targets);
        let clear = take_best(&mut options, CLEAR_TARGET);

        match (facts.opponent_closer_than_agent_to_ball, facts.ball_closer_than_agent_to_own_goal)
        {
            (true, true) => {
                let action = self.standard_defense(world, &facts, services);
                Decision { behavior: Behavior::StandardDefense, facts, action, returned_home: true }
            }
            (true, false) => match clear {
                Some(action) => Decision {
                    behavior: Behavior::ClearAttempt,
                    facts,
                    action: Some(action),
                    returned_home: false,
                },
                None => self.shot(world, facts, services),
            },
            (false, true) => match clear {
                // the clear runs first; home steering stays the fallback beneath it
                Some(action) => {
                    services.return_home(world, home);
                    Decision {
                        behavior: Behavior::ClearAttempt,
                        facts,
                        action: Some(action),
                        returned_home: true,
                    }
                }
                None => {
                    let action = self.standard_defense(world, &facts, services);
                    Decision {
                        behavior: Behavior::StandardDefense,
                        facts,
                        action,
                        returned_home: true,
                    }
                }
            },
            (false, false) => self.shot(world, facts, services),
        }
    }

    /// 기본 수비: 부스트가 충분하거나 공이 위험하면 바로 복귀, 아니면 패드 경유.
    ///
    /// Always steers home this tick; may hand back a pad detour to queue.
    pub fn standard_defense<S: BotServices + ?Sized>(
        &self,
        world: &WorldSnapshot,
        facts: &TacticalFacts,
        services: &mut S,
    ) -> Option<Action> {
        let home = world.own_goal;

        if world.me.boost > self.config.boost_threshold {
            services.return_home(world, home);
            return None;
        }

        // urgency overrides boost collection
        if facts.ball_to_own_goal + self.config.urgency_margin < facts.agent_to_own_goal {
            services.return_home(world, home);
            return None;
        }

        let action = self.pad_detour(world, services);
        services.return_home(world, home);
        action
    }

    fn pad_detour<S: BotServices + ?Sized>(
        &self,
        world: &WorldSnapshot,
        services: &mut S,
    ) -> Option<Action> {
        let pad = select_best_pad(world, self.config.alignment_margin)?;
        Some(services.path_to_pad(pad, world.own_goal))
    }

    fn shot<S: BotServices + ?Sized>(
        &self,
        world: &WorldSnapshot,
        facts: TacticalFacts,
        services: &mut S,
    ) -> Decision {
        let action = services.attempt_shot(world.foe_goal);
        Decision { behavior: Behavior::ShotAttempt, facts, action: Some(action), returned_home: false }
    }
}
