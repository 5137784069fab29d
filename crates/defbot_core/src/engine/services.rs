//! Collaborator interface
//!
//! Movement control, pad pathing and shot generation live outside the decision
//! core. The engine only sees them through this trait so tests and harnesses
//! can plug in deterministic fakes.
//!
//! Every call returns synchronously within the current tick.

use std::collections::BTreeMap;

use super::action_queue::Action;
use super::geometry::Vec3;
use super::world::{ResourcePad, WorldSnapshot};

/// Name of the side-wall clearing target handed to `find_intercepts`.
pub const CLEAR_TARGET: &str = "clear";

/// Two points bounding a target (left/right post, or left/right wall point).
pub type TargetPair = (Vec3, Vec3);

/// Named targets for intercept search. Ordered so lookups are deterministic.
pub type NamedTargets = BTreeMap<String, TargetPair>;

/// Feasible intercepts per target name, best first.
pub type InterceptOptions = BTreeMap<String, Vec<Action>>;

pub trait BotServices {
    /// Issue one tick of steering/throttle toward `target`.
    fn return_home(&mut self, world: &WorldSnapshot, target: Vec3);

    /// Action that drives over `pad` and then heads toward `after`.
    fn path_to_pad(&mut self, pad: &ResourcePad, after: Vec3) -> Action;

    /// Feasible intercept trajectories per named target, ordered best first.
    /// Targets with nothing feasible may be missing or map to an empty list.
    fn find_intercepts(&mut self, world: &WorldSnapshot, targets: &NamedTargets)
        -> InterceptOptions;

    /// Direct shot attempt at `target`.
    fn attempt_shot(&mut self, target: Vec3) -> Action;
}

/// Take the best option for `name`, if any.
pub fn take_best(options: &mut InterceptOptions, name: &str) -> Option<Action> {
    let list = options.get_mut(name)?;
    if list.is_empty() {
        None
    } else {
        Some(list.remove(0))
    }
}
