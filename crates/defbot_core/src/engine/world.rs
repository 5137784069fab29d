//! World snapshot for a single decision tick
//!
//! ## Design Principles
//! 1. **Snapshot is SSOT**: classifier, pad selection and dispatch all read the same view
//! 2. **Immutable**: supplied fresh by the harness every tick, never modified by the engine
//! 3. **Plain data**: serde-friendly so scenarios can be written as JSON

use serde::{Deserialize, Deserializer, Serialize};

use super::field_constants::{boost, field, STANDARD_PADS};
use super::geometry::{vec3, Vec3};

// ============================================================================
// Team side
// ============================================================================

/// 팀 (Blue = team 0, Orange = team 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    #[default]
    Blue,
    Orange,
}

impl TeamSide {
    /// -1.0 for blue, 1.0 for orange. Multiplies Y for own-goal lookups and
    /// X for clearing targets.
    #[inline]
    pub const fn side(self) -> f32 {
        match self {
            TeamSide::Blue => -1.0,
            TeamSide::Orange => 1.0,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            TeamSide::Blue => TeamSide::Orange,
            TeamSide::Orange => TeamSide::Blue,
        }
    }

    /// Center of the goal this team defends.
    pub fn own_goal_location(self) -> Vec3 {
        vec3(0.0, field::BACK_WALL_Y * self.side(), field::GOAL_CENTER_Z)
    }
}

// ============================================================================
// Entities
// ============================================================================

/// 우리 차량 상태
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    pub location: Vec3,
    /// Boost amount (0..=100)
    #[serde(default, deserialize_with = "deserialize_boost")]
    pub boost: f32,
}

impl AgentState {
    pub fn new(location: Vec3, boost: f32) -> Self {
        Self { location, boost: clamp_boost(boost) }
    }
}

#[inline]
fn clamp_boost(boost: f32) -> f32 {
    boost.clamp(0.0, boost::MAX)
}

fn deserialize_boost<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
    f32::deserialize(deserializer).map(clamp_boost)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub location: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentState {
    pub location: Vec3,
}

/// 부스트 패드 크기
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PadSize {
    /// Full refill
    Large,
    /// Partial refill
    Small,
}

/// Field pickup that refills boost.
///
/// `active` goes false when either car drives over it and comes back after the
/// simulation's respawn delay; the engine only observes the flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourcePad {
    pub location: Vec3,
    #[serde(default = "default_active")]
    pub active: bool,
    pub size: PadSize,
}

fn default_active() -> bool {
    true
}

impl ResourcePad {
    pub fn new(location: Vec3, size: PadSize, active: bool) -> Self {
        Self { location, active, size }
    }

    #[inline]
    pub fn is_large(&self) -> bool {
        self.size == PadSize::Large
    }
}

// ============================================================================
// WorldSnapshot - Main Structure
// ============================================================================

/// Tick 시작 시점의 읽기전용 월드 스냅샷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Elapsed ticks since match start
    #[serde(default)]
    pub tick: u64,
    #[serde(default)]
    pub team: TeamSide,
    pub me: AgentState,
    pub ball: BallState,
    /// Ordered opponent list; may be empty
    #[serde(default)]
    pub foes: Vec<OpponentState>,
    /// Pad order is fixed by the arena
    #[serde(default)]
    pub pads: Vec<ResourcePad>,
    pub own_goal: Vec3,
    pub foe_goal: Vec3,
    #[serde(default)]
    pub kickoff: bool,
}

impl WorldSnapshot {
    /// Snapshot with goals placed for `team`, no opponents and no pads.
    pub fn new(team: TeamSide, me: AgentState, ball_location: Vec3) -> Self {
        Self {
            tick: 0,
            team,
            me,
            ball: BallState { location: ball_location },
            foes: Vec::new(),
            pads: Vec::new(),
            own_goal: team.own_goal_location(),
            foe_goal: team.opponent().own_goal_location(),
            kickoff: false,
        }
    }

    pub fn with_foe(mut self, location: Vec3) -> Self {
        self.foes.push(OpponentState { location });
        self
    }

    pub fn with_pad(mut self, pad: ResourcePad) -> Self {
        self.pads.push(pad);
        self
    }

    /// Replace the pad list with the 34-pad arena layout, all active.
    pub fn with_standard_pads(mut self) -> Self {
        self.pads = standard_pads();
        self
    }

    pub fn with_kickoff(mut self, kickoff: bool) -> Self {
        self.kickoff = kickoff;
        self
    }

    pub fn with_tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    pub fn active_pads(&self) -> impl Iterator<Item = &ResourcePad> {
        self.pads.iter().filter(|p| p.active)
    }
}

/// The arena's standard pad layout, all active.
pub fn standard_pads() -> Vec<ResourcePad> {
    STANDARD_PADS
        .iter()
        .map(|&(x, y, large)| {
            let size = if large { PadSize::Large } else { PadSize::Small };
            ResourcePad::new(vec3(x, y, field::PAD_Z), size, true)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_sign() {
        assert_eq!(TeamSide::Blue.side(), -1.0);
        assert_eq!(TeamSide::Orange.side(), 1.0);
        assert_eq!(TeamSide::Blue.opponent(), TeamSide::Orange);
    }

    #[test]
    fn test_goals_face_each_other() {
        let world = WorldSnapshot::new(
            TeamSide::Blue,
            AgentState::new(vec3(0.0, 0.0, 17.0), 33.0),
            vec3(0.0, 0.0, 93.0),
        );
        assert!(world.own_goal.y < 0.0);
        assert!(world.foe_goal.y > 0.0);
        assert_eq!(world.own_goal.y, -world.foe_goal.y);
    }

    #[test]
    fn test_boost_clamped() {
        let me = AgentState::new(Vec3::zeros(), 140.0);
        assert_eq!(me.boost, 100.0);
    }

    #[test]
    fn test_boost_clamped_when_deserialized() {
        let low: AgentState =
            serde_json::from_str(r#"{"location": [0.0, 0.0, 17.0], "boost": -50.0}"#).unwrap();
        let high: AgentState =
            serde_json::from_str(r#"{"location": [0.0, 0.0, 17.0], "boost": 250.0}"#).unwrap();
        let missing: AgentState = serde_json::from_str(r#"{"location": [0.0, 0.0, 17.0]}"#).unwrap();
        assert_eq!(low.boost, 0.0);
        assert_eq!(high.boost, 100.0);
        assert_eq!(missing.boost, 0.0);
        assert_eq!(low, AgentState::new(Vec3::new(0.0, 0.0, 17.0), -50.0));
    }

    #[test]
    fn test_standard_pad_counts() {
        let pads = standard_pads();
        assert_eq!(pads.len(), 34);
        assert_eq!(pads.iter().filter(|p| p.is_large()).count(), 6);
        assert!(pads.iter().all(|p| p.active));
    }

    #[test]
    fn test_snapshot_json_defaults() {
        let json = r#"{
            "me": {"location": [0.0, -4000.0, 17.0], "boost": 10.0},
            "ball": {"location": [0.0, 0.0, 93.0]},
            "pads": [{"location": [3072.0, -4096.0, 73.0], "size": "large"}],
            "own_goal": [0.0, -5120.0, 321.3875],
            "foe_goal": [0.0, 5120.0, 321.3875]
        }"#;
        let world: WorldSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(world.team, TeamSide::Blue);
        assert!(world.foes.is_empty());
        assert!(world.pads[0].active);
        assert!(!world.kickoff);
        assert_eq!(world.me.location.y, -4000.0);
    }
}
