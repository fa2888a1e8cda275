//! Expansion engine, condition evaluation, and state access.
//!
//! This module provides the fixed-point expansion engine, the condition
//! evaluator and operand resolver behind it, the read-only state
//! provider interface, and the static lint pass.

mod error;
mod evaluate;
mod expand;
mod lint;
mod operand;
mod state;

pub use error::{ExpandError, NameKind, compute_suggestions};
pub use evaluate::{evaluate, evaluate_condition};
pub use expand::{DEFAULT_MAX_PASSES, Engine};
pub use lint::{LintKind, LintWarning, lint};
pub use operand::resolve_operand;
pub use state::{ActorAttributes, MemoryState, ScopeKey, ScopeNaming, StateProvider};
