//! Integration tests for the static lint pass.

use switchtext::{Engine, LintKind, lint};

fn lint_default(text: &str) -> Vec<switchtext::LintWarning> {
    lint(text, '\\')
}

#[test]
fn test_clean_text_has_no_warnings() {
    let clean = [
        "No directives at all.",
        r"Good \ON[21]{evening}{day}.",
        r"\OV[v22!=v23]{different}",
        r"\ON[1]{\ON[2]{X}{Y}}{Z}",
        r"\C[2]host code \BO literal \BC",
        r"\\ON[1]{escaped, not a directive}",
    ];
    for text in clean {
        assert_eq!(lint_default(text), vec![], "expected no warnings for {text:?}");
    }
}

#[test]
fn test_malformed_condition_span_points_at_condition() {
    let text = r"Hello \ON[wat]{x}";
    let warnings = lint_default(text);
    assert_eq!(warnings.len(), 1);
    let warning = &warnings[0];
    assert!(matches!(
        warning.kind,
        LintKind::MalformedCondition { .. }
    ));
    assert_eq!(&text[warning.span.clone()], "wat");
}

#[test]
fn test_missing_condition_clause() {
    let warnings = lint_default(r"\ON {x}");
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0].kind, LintKind::MissingCondition { .. }));
}

#[test]
fn test_unterminated_condition() {
    let warnings = lint_default(r"\ON[21{x}");
    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        warnings[0].kind,
        LintKind::UnterminatedCondition { .. }
    ));
}

#[test]
fn test_missing_branch() {
    let warnings = lint_default(r"say \ON[21] nothing");
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0].kind, LintKind::MissingBranch { .. }));
}

#[test]
fn test_unterminated_branch() {
    let warnings = lint_default(r"\ON[21]{never closed");
    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        warnings[0].kind,
        LintKind::UnterminatedBranch { .. }
    ));
}

#[test]
fn test_empty_condition_is_reported() {
    // The runtime scanner passes this through as literal text; the lint
    // flags it because the player would see raw directive syntax.
    let warnings = lint_default(r"\ON[]{x}");
    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        warnings[0].kind,
        LintKind::MalformedCondition { .. }
    ));
}

#[test]
fn test_nested_directives_lint_independently() {
    let warnings = lint_default(r"\ON[1]{\OV[junk]{x}}{y}");
    assert_eq!(warnings.len(), 1);
    match &warnings[0].kind {
        LintKind::MalformedCondition { condition, .. } => assert_eq!(condition, "junk"),
        other => panic!("expected MalformedCondition, got {other:?}"),
    }
}

#[test]
fn test_host_codes_are_not_reported() {
    assert_eq!(lint_default(r"\C[2]\N[1]\G"), vec![]);
}

#[test]
fn test_engine_lint_uses_configured_marker() {
    let engine = Engine::builder().marker('#').build();
    let warnings = engine.lint("#ON[bad-id]{x}");
    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        warnings[0].kind,
        LintKind::MalformedCondition { .. }
    ));
}
