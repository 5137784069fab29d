//! Deterministic scripted collaborator
//!
//! Stand-in for the live movement/shot services: records every call and
//! answers intercept queries from a fixed script. Used by tests, the JSON
//! scenario API and the CLI harness.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::action_queue::{Action, ActionKind, Routine};
use super::geometry::Vec3;
use super::services::{BotServices, InterceptOptions, NamedTargets, CLEAR_TARGET};
use super::world::{ResourcePad, WorldSnapshot};

/// Default lifetime of a scripted routine in ticks.
pub const DEFAULT_ROUTINE_TICKS: u32 = 30;

/// Routine that completes after a fixed number of steps.
#[derive(Debug, Clone)]
pub struct ScriptedRoutine {
    label: &'static str,
    remaining: u32,
}

impl ScriptedRoutine {
    pub fn new(label: &'static str, ticks: u32) -> Self {
        Self { label, remaining: ticks }
    }

}

impl Routine for ScriptedRoutine {
    fn step(&mut self, world: &WorldSnapshot) {
        self.remaining = self.remaining.saturating_sub(1);
        tracing::trace!(
            routine = self.label,
            tick = world.tick,
            remaining = self.remaining,
            "scripted step"
        );
    }

    fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}

/// 협력자 호출 기록
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum ServiceCall {
    ReturnHome { tick: u64, target: Vec3 },
    PathToPad { pad: Vec3, after: Vec3 },
    FindIntercepts { targets: Vec<String> },
    AttemptShot { target: Vec3 },
}

/// Script for `ScriptedServices`, deserializable from scenario files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceScript {
    /// Number of feasible intercepts to report per target name
    pub intercepts: BTreeMap<String, usize>,
    /// Lifetime of every routine handed out
    pub routine_ticks: u32,
}

impl Default for ServiceScript {
    fn default() -> Self {
        Self { intercepts: BTreeMap::new(), routine_ticks: DEFAULT_ROUTINE_TICKS }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedServices {
    script: ServiceScript,
    calls: Vec<ServiceCall>,
}

impl ScriptedServices {
    pub fn new(script: ServiceScript) -> Self {
        Self { script, calls: Vec::new() }
    }

    /// Report `count` feasible intercepts for `name`.
    pub fn with_intercepts(mut self, name: &str, count: usize) -> Self {
        self.script.intercepts.insert(name.to_string(), count);
        self
    }

    pub fn with_routine_ticks(mut self, ticks: u32) -> Self {
        self.script.routine_ticks = ticks;
        self
    }

    pub fn calls(&self) -> &[ServiceCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<ServiceCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn return_home_count(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, ServiceCall::ReturnHome { .. })).count()
    }

    fn routine(&self, label: &'static str) -> Box<dyn Routine> {
        Box::new(ScriptedRoutine::new(label, self.script.routine_ticks))
    }
}

impl BotServices for ScriptedServices {
    fn return_home(&mut self, world: &WorldSnapshot, target: Vec3) {
        self.calls.push(ServiceCall::ReturnHome { tick: world.tick, target });
    }

    fn path_to_pad(&mut self, pad: &ResourcePad, after: Vec3) -> Action {
        self.calls.push(ServiceCall::PathToPad { pad: pad.location, after });
        Action::new(
            ActionKind::GoToPad { pad: pad.location, size: pad.size, after },
            self.routine("go_to_pad"),
        )
    }

    fn find_intercepts(
        &mut self,
        _world: &WorldSnapshot,
        targets: &NamedTargets,
    ) -> InterceptOptions {
        self.calls.push(ServiceCall::FindIntercepts { targets: targets.keys().cloned().collect() });

        targets
            .iter()
            .map(|(name, &(left, right))| {
                let count = self.script.intercepts.get(name).copied().unwrap_or(0);
                let kind = if name == CLEAR_TARGET {
                    ActionKind::Clear { left, right }
                } else {
                    ActionKind::Intercept { target: name.clone(), left, right }
                };
                let actions = (0..count)
                    .map(|_| Action::new(kind.clone(), self.routine("intercept")))
                    .collect();
                (name.clone(), actions)
            })
            .collect()
    }

    fn attempt_shot(&mut self, target: Vec3) -> Action {
        self.calls.push(ServiceCall::AttemptShot { target });
        Action::new(ActionKind::Shot { target }, self.routine("short_shot"))
    }
}
