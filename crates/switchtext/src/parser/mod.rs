//! Directive and condition parsing.
//!
//! This module provides the directive scanner used by the expansion
//! engine and the per-opcode condition grammars. The AST is public so
//! external tooling can inspect scanned directives.

pub mod ast;
mod condition;
mod directive;
mod error;

pub use ast::*;
pub use directive::{MARKER, Piece, scan};
pub use error::ConditionError;
