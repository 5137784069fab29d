//! # defbot_core - Defensive 1v1 Bot Decision Engine
//!
//! Per-tick decision core for a single car-soccer bot: looks at a world
//! snapshot and picks one behavior (return to goal, collect boost, clear the
//! ball, or shoot), queuing the matching action.
//!
//! ## Features
//! - Pure tactical classifier and pad scoring
//! - Priority table evaluated only when the action stack is empty
//! - Collaborators (steering, pathing, shot search) injected via a trait
//! - Deterministic scripted collaborator and JSON scenario API

pub mod api;
pub mod config;
pub mod engine;
pub mod error;

// Re-export main API functions
pub use api::{
    evaluate_scenario_json, run_scenario, ScenarioRequest, ScenarioResponse, MAX_SCENARIO_TICKS,
};
pub use config::{DecisionConfig, OpponentScope};
pub use engine::{
    Action, ActionKind, ActionQueue, Behavior, BehaviorSelector, BotServices, DecisionEngine,
    ResourcePad, Routine, TacticalFacts, TickReport, WorldSnapshot,
};
pub use error::{BotError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
