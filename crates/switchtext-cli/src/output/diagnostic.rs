//! Miette diagnostic wrapper for lint warnings.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use switchtext::LintWarning;
use thiserror::Error;

/// A miette-compatible diagnostic for a lint warning.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(switchtext::lint))]
pub struct LintDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,
}

impl LintDiagnostic {
    /// Create a diagnostic from a lint warning with source context.
    pub fn from_warning(path: &Path, content: &str, warning: &LintWarning) -> Self {
        // Clamp to content length to avoid miette panic on out-of-bounds
        let start = warning.span.start.min(content.len());
        let len = warning.span.len().min(content.len() - start).max(1);

        LintDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (start, len).into(),
            message: warning.to_string(),
        }
    }
}
