//! Switchable conditional text for game dialogue.
//!
//! This crate rewrites narrative strings containing inline conditional
//! directives (`\ON[21]{evening}{day}`) into display-ready text by
//! resolving each directive against host-supplied game state, then
//! applying grammar normalization (number words, ordinals, case folds,
//! a/an selection). Directives nest; expansion runs to a fixed point,
//! resolving innermost occurrences first.
//!
//! The engine reads state exclusively through the [`StateProvider`]
//! trait and never mutates it. Hosts embed the engine by implementing
//! that trait; [`MemoryState`] is a ready-made snapshot implementation
//! for tests and tooling.
//!
//! # Example
//!
//! ```
//! use switchtext::{Engine, MemoryState};
//!
//! let state = MemoryState {
//!     switches: [(21, true)].into_iter().collect(),
//!     variables: [(143, 7)].into_iter().collect(),
//!     ..MemoryState::default()
//! };
//! let engine = Engine::new();
//!
//! let out = engine
//!     .expand(r"Good \ON[21]{evening}{day}. \OV[v143<=10]{Watch out for wolves.}", &state)
//!     .unwrap();
//! assert_eq!(out, "Good evening. Watch out for wolves.");
//! ```

pub mod engine;
pub mod grammar;
pub mod parser;

pub use engine::{
    ActorAttributes, DEFAULT_MAX_PASSES, Engine, ExpandError, LintKind, LintWarning,
    MemoryState, NameKind, ScopeKey, ScopeNaming, StateProvider, compute_suggestions,
    evaluate, evaluate_condition, lint, resolve_operand,
};
pub use parser::{
    ActorAttribute, ActorScope, Comparison, Condition, ConditionError, Directive, Opcode,
    Operand, ScopePart, SelfRef, SelfSlot, SlotKind,
};
