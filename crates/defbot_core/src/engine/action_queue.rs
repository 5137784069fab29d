//! ActionQueue System
//!
//! 틱 기반 LIFO 액션 스택.
//! 패드 수집 → 골대 복귀, 클리어, 슛 같은 여러 틱짜리 행동을 관리합니다.
//!
//! ## 핵심 개념
//! - **Routine**: 협력자(collaborator)가 만든 실제 실행 로직 (step / is_complete)
//! - **Action**: Routine + 태그(ActionKind). 무엇을 하는 중인지 명시적으로 표현
//! - **ActionQueue**: 에이전트가 소유하는 LIFO 스택
//!
//! ## Flow
//! ```text
//! push → top.step() every tick → top.is_complete() → pop → next one resumes
//! ```
//!
//! Pushing onto a non-empty stack interrupts whatever is beneath until the new
//! action completes and is popped. That is the only cancellation mechanism.

use std::fmt;

use serde::Serialize;

use super::geometry::Vec3;
use super::world::{PadSize, WorldSnapshot};

// ============================================================================
// Routine
// ============================================================================

/// Multi-tick unit of work supplied by a collaborator (pathing, shot generation).
///
/// `step` is called once per tick while the routine sits on top of the stack;
/// once `is_complete` reports true it is popped and never stepped again.
pub trait Routine: fmt::Debug + Send {
    fn step(&mut self, world: &WorldSnapshot);

    fn is_complete(&self) -> bool;
}

// ============================================================================
// ActionKind
// ============================================================================

/// 액션 종류 태그
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionKind {
    /// Drive over a pad, then continue toward `after`
    GoToPad { pad: Vec3, size: PadSize, after: Vec3 },
    /// Intercept trajectory that sends the ball toward one of the side walls
    Clear { left: Vec3, right: Vec3 },
    /// Direct shot attempt at `target`
    Shot { target: Vec3 },
    /// Intercept toward any other named target pair
    Intercept { target: String, left: Vec3, right: Vec3 },
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::GoToPad { .. } => "go_to_pad",
            ActionKind::Clear { .. } => "clear",
            ActionKind::Shot { .. } => "shot",
            ActionKind::Intercept { .. } => "intercept",
        }
    }
}

// ============================================================================
// Action
// ============================================================================

/// A queued behavior: what it is (`kind`) plus how it runs (`routine`).
pub struct Action {
    kind: ActionKind,
    routine: Box<dyn Routine>,
    ticks_run: u32,
}

impl Action {
    pub fn new(kind: ActionKind, routine: Box<dyn Routine>) -> Self {
        Self { kind, routine, ticks_run: 0 }
    }

    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// Ticks this action has been stepped so far.
    pub fn ticks_run(&self) -> u32 {
        self.ticks_run
    }

    pub fn step(&mut self, world: &WorldSnapshot) {
        self.routine.step(world);
        self.ticks_run = self.ticks_run.saturating_add(1);
    }

    pub fn is_complete(&self) -> bool {
        self.routine.is_complete()
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("kind", &self.kind)
            .field("ticks_run", &self.ticks_run)
            .field("routine", &self.routine)
            .finish()
    }
}

// ============================================================================
// ActionQueue
// ============================================================================

/// 이번 틱 실행 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "action", rename_all = "snake_case")]
pub enum StepOutcome {
    /// Stack was empty; nothing ran
    Idle,
    /// Top action ran and is still in progress
    Running(ActionKind),
    /// Top action ran, reported completion and was popped
    Completed(ActionKind),
}

/// LIFO stack owned by one agent. Only the top action executes per tick.
#[derive(Debug, Default)]
pub struct ActionQueue {
    stack: Vec<Action>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Push on top; interrupts the current top until this one completes.
    pub fn push(&mut self, action: Action) {
        tracing::trace!(kind = action.kind.as_str(), depth = self.stack.len() + 1, "action pushed");
        self.stack.push(action);
    }

    pub fn top(&self) -> Option<&Action> {
        self.stack.last()
    }

    /// Kinds from bottom to top.
    pub fn kinds(&self) -> impl Iterator<Item = &ActionKind> {
        self.stack.iter().map(Action::kind)
    }

    /// Step the top action once; pop it if it reports completion.
    pub fn step_top(&mut self, world: &WorldSnapshot) -> StepOutcome {
        let Some(top) = self.stack.last_mut() else {
            return StepOutcome::Idle;
        };

        top.step(world);
        let kind = top.kind.clone();
        if top.is_complete() {
            let finished = self.stack.pop();
            tracing::trace!(
                kind = kind.as_str(),
                ticks = finished.map(|a| a.ticks_run).unwrap_or_default(),
                remaining = self.stack.len(),
                "action completed"
            );
            StepOutcome::Completed(kind)
        } else {
            StepOutcome::Running(kind)
        }
    }

    /// Drop every queued action (e.g. on a goal reset).
    pub fn clear(&mut self) {
        self.stack.clear();
    }
}
