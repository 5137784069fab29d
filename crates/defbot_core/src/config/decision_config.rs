//! Decision thresholds for the behavior/resource selectors

use serde::{Deserialize, Serialize};

use crate::engine::field_constants::field;
use crate::error::{BotError, Result};

/// 상대 비교 범위 (classifier가 어떤 상대를 보는지)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpponentScope {
    /// Only the first listed opponent is compared. Fine for 1v1; with more
    /// opponents the rest are ignored.
    #[default]
    FirstListed,
    /// Nearest opponent to the ball (minimum over the whole list).
    Nearest,
}

/// 의사결정 파라미터
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    // === Standard defense ===
    /// 이 값 초과 부스트면 패드를 무시하고 골대로 복귀 (기본: 24.0)
    pub boost_threshold: f32,
    /// 공이 이 거리 이상 골대에 더 가까우면 즉시 복귀 (기본: 200.0)
    pub urgency_margin: f32,

    // === Resource selection ===
    /// 작은 패드가 현재 best를 대체하려면 넘어야 하는 정렬 점수 차이 (기본: 0.2)
    pub alignment_margin: f32,

    // === Clearing ===
    /// 클리어 목표점의 좌우 오프셋 (기본: 4100.0, 사이드 벽)
    pub clear_lateral_offset: f32,

    // === Classifier ===
    pub opponent_scope: OpponentScope,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            boost_threshold: 24.0,
            urgency_margin: 200.0,
            alignment_margin: 0.2,
            clear_lateral_offset: field::CLEAR_WALL_X,
            opponent_scope: OpponentScope::FirstListed,
        }
    }
}

impl DecisionConfig {
    /// Reject values the selectors cannot work with.
    pub fn validate(&self) -> Result<()> {
        check_non_negative("boost_threshold", self.boost_threshold)?;
        check_non_negative("urgency_margin", self.urgency_margin)?;
        check_non_negative("alignment_margin", self.alignment_margin)?;
        check_non_negative("clear_lateral_offset", self.clear_lateral_offset)?;
        // alignment scores live in [-1, 1]; a margin of 2+ locks small pads out entirely
        if self.alignment_margin >= 2.0 {
            return Err(BotError::InvalidConfig {
                field: "alignment_margin",
                value: self.alignment_margin,
                reason: "must be < 2.0",
            });
        }
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(BotError::InvalidConfig { field, value, reason: "must be finite" });
    }
    if value < 0.0 {
        return Err(BotError::InvalidConfig { field, value, reason: "must be >= 0" });
    }
    Ok(())
}
