//! defbot CLI helpers
//!
//! 시나리오/설정 파일 로딩과 사람이 읽는 출력 포맷.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use defbot_core::engine::StepOutcome;
use defbot_core::{DecisionConfig, ScenarioRequest, ScenarioResponse, TickReport};

pub const PRESETS: [&str; 3] = ["standard", "aggressive", "conservative"];

/// Load a scenario JSON file. `ticks` overrides the file's tick count.
pub fn load_scenario(path: &Path, ticks: Option<u32>) -> Result<ScenarioRequest> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario {}", path.display()))?;
    let mut request: ScenarioRequest = serde_json::from_str(&text)
        .with_context(|| format!("invalid scenario JSON in {}", path.display()))?;
    if let Some(ticks) = ticks {
        request.ticks = ticks;
    }
    Ok(request)
}

pub fn load_config(path: Option<&Path>) -> Result<Option<DecisionConfig>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let config = DecisionConfig::from_path(path)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    Ok(Some(config))
}

pub fn preset_yaml(name: &str) -> Result<String> {
    let config = DecisionConfig::preset(name)
        .ok_or_else(|| anyhow!("unknown preset '{}' (expected one of {:?})", name, PRESETS))?;
    Ok(config.to_yaml_string()?)
}

fn step_label(step: &StepOutcome) -> String {
    match step {
        StepOutcome::Idle => "idle".to_string(),
        StepOutcome::Running(kind) => format!("running {}", kind.as_str()),
        StepOutcome::Completed(kind) => format!("completed {}", kind.as_str()),
    }
}

fn report_line(report: &TickReport) -> String {
    if report.deferred {
        return format!(
            "tick {:>5}  deferred          {:<20} depth={}",
            report.tick,
            step_label(&report.step),
            report.queue_depth
        );
    }

    let behavior = report.behavior.map(|b| b.as_str()).unwrap_or("-");
    let pushed = report.pushed.as_ref().map(|k| k.as_str()).unwrap_or("-");
    let home = if report.returned_home { " +home" } else { "" };
    format!(
        "tick {:>5}  {:<17} push={:<9} {:<20} depth={}{}",
        report.tick,
        behavior,
        pushed,
        step_label(&report.step),
        report.queue_depth,
        home
    )
}

/// Human-readable table of a scenario run.
pub fn render_summary(response: &ScenarioResponse) -> String {
    let mut out = String::new();
    for report in &response.reports {
        let _ = writeln!(out, "{}", report_line(report));
    }
    let decided = response.reports.iter().filter(|r| !r.deferred).count();
    let _ = writeln!(
        out,
        "\n{} ticks, {} decisions, {} service calls, final queue depth {} (engine {})",
        response.reports.len(),
        decided,
        response.calls.len(),
        response.final_queue_depth,
        defbot_core::VERSION
    );
    out
}
