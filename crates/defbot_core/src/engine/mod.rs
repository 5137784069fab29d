//! Decision engine
//!
//! Module map:
//! - `world` / `geometry` / `field_constants`: the read-only snapshot and math
//! - `tactical`: classifier (who is closer to what)
//! - `resource_selector`: boost pad scoring
//! - `behavior`: priority table + standard defense
//! - `action_queue`: LIFO stack of multi-tick actions
//! - `decision_engine`: per-tick entry point tying it together
//! - `services` / `scripted`: collaborator trait and its deterministic fake

pub mod action_queue;
pub mod behavior;
pub mod decision_engine;
pub mod field_constants;
pub mod geometry;
pub mod resource_selector;
pub mod scripted;
pub mod services;
pub mod tactical;
pub mod world;

pub use action_queue::{Action, ActionKind, ActionQueue, Routine, StepOutcome};
pub use behavior::{clear_targets, Behavior, BehaviorSelector, Decision};
pub use decision_engine::{DecisionEngine, TickReport};
pub use geometry::{vec3, Vec3};
pub use resource_selector::{pad_alignment, select_best_pad};
pub use scripted::{ScriptedRoutine, ScriptedServices, ServiceCall, ServiceScript};
pub use services::{BotServices, InterceptOptions, NamedTargets, TargetPair, CLEAR_TARGET};
pub use tactical::{classify, classify_with_scope, TacticalFacts};
pub use world::{
    standard_pads, AgentState, BallState, OpponentState, PadSize, ResourcePad, TeamSide,
    WorldSnapshot,
};
