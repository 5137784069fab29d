//! # Bot Configuration Module
//!
//! 모든 튜닝 상수를 중앙에서 관리하는 설정 시스템.
//!
//! ## 목적
//! - 하드코딩된 임계값 제거 (24 / 200 / 0.2)
//! - 프리셋 지원 (Standard, Aggressive, Conservative)
//! - YAML/JSON 파일에서 로드
//!
//! ## 사용법
//! ```rust
//! use defbot_core::config::DecisionConfig;
//!
//! let config = DecisionConfig::default();
//! let aggressive = DecisionConfig::aggressive();
//! assert!(aggressive.boost_threshold < config.boost_threshold);
//! ```

mod decision_config;

pub use decision_config::{DecisionConfig, OpponentScope};

use std::path::Path;

use crate::error::{BotError, Result};

impl DecisionConfig {
    /// 기본 설정
    pub fn standard() -> Self {
        Self::default()
    }

    /// 공격적 (부스트 적게 모으고, 더 늦게까지 패드 탐색)
    pub fn aggressive() -> Self {
        Self { boost_threshold: 12.0, urgency_margin: 400.0, ..Self::default() }
    }

    /// 보수적 (부스트 많이 확보, 공이 조금만 가까워도 복귀)
    pub fn conservative() -> Self {
        Self {
            boost_threshold: 40.0,
            urgency_margin: 50.0,
            alignment_margin: 0.1,
            ..Self::default()
        }
    }

    /// Look up a preset by name (`standard`, `aggressive`, `conservative`).
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "standard" | "default" => Some(Self::standard()),
            "aggressive" => Some(Self::aggressive()),
            "conservative" => Some(Self::conservative()),
            _ => None,
        }
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from a `.yaml`/`.yml`/`.json` file. Missing fields fall back to defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let cfg = match ext.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&text)?,
            "json" => Self::from_json_str(&text)?,
            _ => return Err(BotError::UnsupportedFormat { path: path.display().to_string() }),
        };
        tracing::debug!(path = %path.display(), ?cfg, "loaded decision config");
        Ok(cfg)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let cfg = DecisionConfig::default();
        assert!((cfg.boost_threshold - 24.0).abs() < f32::EPSILON);
        assert!((cfg.urgency_margin - 200.0).abs() < f32::EPSILON);
        assert!((cfg.alignment_margin - 0.2).abs() < f32::EPSILON);
        assert_eq!(cfg.opponent_scope, OpponentScope::FirstListed);
        assert_eq!(cfg.clear_lateral_offset, crate::engine::field_constants::field::CLEAR_WALL_X);
        assert_eq!(cfg.clear_lateral_offset, 4100.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        for name in ["standard", "aggressive", "conservative"] {
            let cfg = DecisionConfig::preset(name).unwrap();
            assert!(cfg.validate().is_ok(), "{name} should validate");
        }
        assert!(DecisionConfig::preset("reckless").is_none());
    }

    #[test]
    fn test_conservative_returns_home_sooner() {
        let standard = DecisionConfig::standard();
        let conservative = DecisionConfig::conservative();
        assert!(conservative.urgency_margin < standard.urgency_margin);
        assert!(conservative.boost_threshold > standard.boost_threshold);
    }

    #[test]
    fn test_yaml_partial_uses_defaults() {
        let cfg = DecisionConfig::from_yaml_str("boost_threshold: 50.0\nopponent_scope: nearest\n")
            .unwrap();
        assert!((cfg.boost_threshold - 50.0).abs() < f32::EPSILON);
        assert_eq!(cfg.opponent_scope, OpponentScope::Nearest);
        assert!((cfg.urgency_margin - 200.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_negative_margin_rejected() {
        let err = DecisionConfig::from_json_str(r#"{"alignment_margin": -0.5}"#).unwrap_err();
        assert!(matches!(err, BotError::InvalidConfig { field: "alignment_margin", .. }));
    }

    #[test]
    fn test_huge_alignment_margin_rejected() {
        let cfg = DecisionConfig { alignment_margin: 2.5, ..DecisionConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_nan_rejected() {
        let cfg = DecisionConfig { urgency_margin: f32::NAN, ..DecisionConfig::default() };
        assert!(matches!(
            cfg.validate(),
            Err(BotError::InvalidConfig { field: "urgency_margin", reason: "must be finite", .. })
        ));
    }

    #[test]
    fn test_yaml_round_trip() {
        let cfg = DecisionConfig::aggressive();
        let yaml = cfg.to_yaml_string().unwrap();
        let parsed = DecisionConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn test_from_path_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("bot.yaml");
        let mut f = std::fs::File::create(&yaml_path).unwrap();
        writeln!(f, "urgency_margin: 75.0").unwrap();
        let cfg = DecisionConfig::from_path(&yaml_path).unwrap();
        assert!((cfg.urgency_margin - 75.0).abs() < f32::EPSILON);

        let toml_path = dir.path().join("bot.toml");
        std::fs::write(&toml_path, "urgency_margin = 75.0").unwrap();
        assert!(matches!(
            DecisionConfig::from_path(&toml_path),
            Err(BotError::UnsupportedFormat { .. })
        ));
    }
}
