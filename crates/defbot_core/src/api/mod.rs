//! JSON scenario API
//!
//! Runs the decision engine against a fixed snapshot and the scripted
//! collaborator, for harnesses that speak JSON (CLI, tooling, replays).

use serde::{Deserialize, Serialize};

use crate::config::DecisionConfig;
use crate::engine::{
    DecisionEngine, ScriptedServices, ServiceCall, ServiceScript, TickReport, WorldSnapshot,
};
use crate::error::{BotError, Result};
use crate::SCHEMA_VERSION;

/// Upper bound on ticks per scenario: one five-minute match at 120 Hz.
pub const MAX_SCENARIO_TICKS: u32 = 120 * 60 * 5;

fn default_ticks() -> u32 {
    1
}

/// Scenario input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRequest {
    pub schema_version: u8,
    pub world: WorldSnapshot,
    /// Scripted collaborator behavior (feasible intercepts, routine length)
    #[serde(default)]
    pub services: ServiceScript,
    /// Ticks to run against the (static) snapshot
    #[serde(default = "default_ticks")]
    pub ticks: u32,
    #[serde(default)]
    pub config: Option<DecisionConfig>,
}

/// Scenario output
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResponse {
    pub schema_version: u8,
    pub reports: Vec<TickReport>,
    pub calls: Vec<ServiceCall>,
    pub final_queue_depth: usize,
}

/// Run `request`. `config_override` wins over the request's own config.
pub fn run_scenario(
    request: &ScenarioRequest,
    config_override: Option<DecisionConfig>,
) -> Result<ScenarioResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(BotError::SchemaMismatch {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    if request.ticks > MAX_SCENARIO_TICKS {
        return Err(BotError::TickLimit { requested: request.ticks, max: MAX_SCENARIO_TICKS });
    }

    let config = config_override.or_else(|| request.config.clone()).unwrap_or_default();
    config.validate()?;

    let mut engine = DecisionEngine::new(config);
    let mut services = ScriptedServices::new(request.services.clone());
    let mut world = request.world.clone();
    let start_tick = world.tick;

    let reports = (0..request.ticks as u64)
        .map(|i| {
            world.tick = start_tick + i;
            engine.tick(&world, &mut services)
        })
        .collect();

    Ok(ScenarioResponse {
        schema_version: SCHEMA_VERSION,
        reports,
        calls: services.take_calls(),
        final_queue_depth: engine.queue().len(),
    })
}

pub fn evaluate_scenario_json(request_json: &str) -> Result<String> {
    let request: ScenarioRequest = serde_json::from_str(request_json)?;
    let response = run_scenario(&request, None)?;
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(ticks: u32, intercepts: serde_json::Value) -> serde_json::Value {
        json!({
            "schema_version": 1,
            "ticks": ticks,
            "services": {"intercepts": intercepts, "routine_ticks": 2},
            "world": {
                "team": "blue",
                "me": {"location": [0.0, -3000.0, 17.0], "boost": 50.0},
                "ball": {"location": [0.0, 1000.0, 93.0]},
                "foes": [{"location": [0.0, 1500.0, 17.0]}],
                "own_goal": [0.0, -5120.0, 321.3875],
                "foe_goal": [0.0, 5120.0, 321.3875]
            }
        })
    }

    #[test]
    fn test_clear_scenario_json() {
        let out = evaluate_scenario_json(&request(1, json!({"clear": 1})).to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["reports"][0]["behavior"], "clear_attempt");
        assert_eq!(parsed["reports"][0]["pushed"]["kind"], "clear");
    }

    #[test]
    fn test_shot_fallback_and_defer() {
        let req: ScenarioRequest = serde_json::from_value(request(3, json!({}))).unwrap();
        let resp = run_scenario(&req, None).unwrap();
        assert_eq!(resp.reports.len(), 3);
        assert_eq!(resp.reports[0].behavior, Some(crate::engine::Behavior::ShotAttempt));
        // routine lasts 2 ticks: decided on tick 0, deferred on tick 1, decides again on tick 2
        assert!(resp.reports[1].deferred);
        assert!(!resp.reports[2].deferred);
        assert_eq!(resp.reports[2].tick, 2);
    }

    #[test]
    fn test_schema_mismatch() {
        let mut req = request(1, json!({}));
        req["schema_version"] = json!(9);
        let err = evaluate_scenario_json(&req.to_string()).unwrap_err();
        assert!(matches!(err, BotError::SchemaMismatch { found: 9, expected: 1 }));
    }

    #[test]
    fn test_tick_count_capped() {
        let mut req: ScenarioRequest = serde_json::from_value(request(1, json!({}))).unwrap();
        req.ticks = u32::MAX;
        let err = run_scenario(&req, None).unwrap_err();
        assert!(matches!(err, BotError::TickLimit { requested: u32::MAX, max: MAX_SCENARIO_TICKS }));

        req.ticks = MAX_SCENARIO_TICKS;
        let resp = run_scenario(&req, None).unwrap();
        assert_eq!(resp.reports.len(), MAX_SCENARIO_TICKS as usize);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut req = request(1, json!({}));
        req["config"] = json!({"boost_threshold": -3.0});
        let err = evaluate_scenario_json(&req.to_string()).unwrap_err();
        assert!(matches!(err, BotError::InvalidConfig { field: "boost_threshold", .. }));
    }

    #[test]
    fn test_override_config_wins() {
        let mut raw = request(1, json!({}));
        // request carries a bad config, but the override replaces it before validation
        raw["config"] = json!({"boost_threshold": -3.0});
        let req: ScenarioRequest = serde_json::from_value(raw).unwrap();
        assert!(run_scenario(&req, None).is_err());
        let resp = run_scenario(&req, Some(DecisionConfig::conservative())).unwrap();
        assert_eq!(resp.reports.len(), 1);
    }
}
