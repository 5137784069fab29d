//! 전술 상황 분류기 (Tactical Classifier)
//!
//! Raw positions → two booleans the behavior table branches on:
//! - 공이 나보다 우리 골대에 더 가까운가
//! - 상대가 나보다 공에 더 가까운가
//!
//! Pure function of the snapshot; recomputed every tick, never stored.

use serde::Serialize;

use crate::config::OpponentScope;

use super::geometry::distance;
use super::world::WorldSnapshot;

/// Facts derived from one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TacticalFacts {
    pub ball_closer_than_agent_to_own_goal: bool,
    /// Always false when there are no opponents.
    pub opponent_closer_than_agent_to_ball: bool,
    /// Distance ball → own goal
    pub ball_to_own_goal: f32,
    /// Distance agent → own goal
    pub agent_to_own_goal: f32,
}

/// Classify with the single-opponent rule (first listed opponent only).
pub fn classify(world: &WorldSnapshot) -> TacticalFacts {
    classify_with_scope(world, OpponentScope::FirstListed)
}

pub fn classify_with_scope(world: &WorldSnapshot, scope: OpponentScope) -> TacticalFacts {
    let ball_to_own_goal = distance(&world.ball.location, &world.own_goal);
    let agent_to_own_goal = distance(&world.me.location, &world.own_goal);

    let opponent_closer_than_agent_to_ball = match opponent_distance_to_ball(world, scope) {
        Some(foe_dist) => foe_dist < distance(&world.me.location, &world.ball.location),
        None => false,
    };

    TacticalFacts {
        ball_closer_than_agent_to_own_goal: ball_to_own_goal < agent_to_own_goal,
        opponent_closer_than_agent_to_ball,
        ball_to_own_goal,
        agent_to_own_goal,
    }
}

fn opponent_distance_to_ball(world: &WorldSnapshot, scope: OpponentScope) -> Option<f32> {
    let ball = &world.ball.location;
    match scope {
        OpponentScope::FirstListed => world.foes.first().map(|foe| distance(&foe.location, ball)),
        OpponentScope::Nearest => world
            .foes
            .iter()
            .map(|foe| distance(&foe.location, ball))
            .min_by(|a, b| a.total_cmp(b)),
    }
}
