//! Output helpers for CLI commands.

mod diagnostic;

pub use diagnostic::LintDiagnostic;
