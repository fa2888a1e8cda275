//! Integration tests for condition parsing and evaluation.

use switchtext::{
    ActorAttributes, Comparison, Condition, ExpandError, MemoryState, Opcode, evaluate,
    evaluate_condition,
};

fn empty() -> MemoryState {
    MemoryState::default()
}

// =============================================================================
// Switch tests (ON / OFF)
// =============================================================================

#[test]
fn test_game_switch_by_id() {
    let state = MemoryState {
        switches: [(21, true)].into_iter().collect(),
        ..empty()
    };
    assert!(evaluate_condition("ON", "21", &state).unwrap());
    assert!(!evaluate_condition("OFF", "21", &state).unwrap());
    assert!(!evaluate_condition("ON", "22", &state).unwrap());
}

#[test]
fn test_switch_prefix_is_optional() {
    let state = MemoryState {
        switches: [(5, true)].into_iter().collect(),
        ..empty()
    };
    assert!(evaluate_condition("ON", "s5", &state).unwrap());
    assert!(evaluate_condition("ON", "ss5", &state).unwrap());
    assert!(evaluate_condition("on", "S5", &state).unwrap());
}

#[test]
fn test_self_switch_letter() {
    let state = MemoryState {
        self_flags: [("3:7:A".to_string(), true)].into_iter().collect(),
        container: 3,
        context: Some(7),
        ..empty()
    };
    assert!(evaluate_condition("ON", "A", &state).unwrap());
    assert!(evaluate_condition("ON", "a", &state).unwrap());
    assert!(!evaluate_condition("ON", "B", &state).unwrap());
    assert!(evaluate_condition("OFF", "B", &state).unwrap());
}

#[test]
fn test_self_switch_without_running_context_reads_off() {
    let state = MemoryState {
        self_flags: [("3:7:A".to_string(), true)].into_iter().collect(),
        container: 3,
        context: None,
        ..empty()
    };
    assert!(!evaluate_condition("ON", "A", &state).unwrap());
}

// =============================================================================
// Cross-context references
// =============================================================================

#[test]
fn test_numeric_qualified_reference() {
    let state = MemoryState {
        self_flags: [("12:34:A".to_string(), true)].into_iter().collect(),
        container: 3,
        context: Some(7),
        cross_context: true,
        ..empty()
    };
    assert!(evaluate_condition("ON", "12:34:A", &state).unwrap());
    assert!(!evaluate_condition("ON", "12:35:A", &state).unwrap());
}

#[test]
fn test_named_qualified_reference() {
    let state = MemoryState {
        self_flags: [("12:34:B".to_string(), true)].into_iter().collect(),
        container_names: [("Castle".to_string(), 12)].into_iter().collect(),
        context_names: [("Gate".to_string(), 34)].into_iter().collect(),
        cross_context: true,
        ..empty()
    };
    assert!(evaluate_condition("ON", "Castle:Gate:B", &state).unwrap());
}

#[test]
fn test_context_only_reference_uses_current_container() {
    let state = MemoryState {
        self_flags: [("3:34:A".to_string(), true)].into_iter().collect(),
        container: 3,
        context: Some(7),
        context_names: [("Gate".to_string(), 34)].into_iter().collect(),
        cross_context: true,
        ..empty()
    };
    assert!(evaluate_condition("ON", "Gate:A", &state).unwrap());
    assert!(evaluate_condition("ON", "34:A", &state).unwrap());
}

#[test]
fn test_cross_context_requires_capability() {
    let state = MemoryState {
        self_flags: [("12:34:A".to_string(), true)].into_iter().collect(),
        cross_context: false,
        ..empty()
    };
    let err = evaluate_condition("ON", "12:34:A", &state).unwrap_err();
    assert!(matches!(
        err,
        ExpandError::UnsupportedCrossContextAccess { .. }
    ));
}

#[test]
fn test_unresolved_name_is_surfaced() {
    let state = MemoryState {
        cross_context: true,
        ..empty()
    };
    let err = evaluate_condition("ON", "Nowhere:Gate:A", &state).unwrap_err();
    match err {
        ExpandError::UnresolvedNamedReference { name, .. } => assert_eq!(name, "Nowhere"),
        other => panic!("expected UnresolvedNamedReference, got {other:?}"),
    }
}

// =============================================================================
// Variable comparisons (OV)
// =============================================================================

#[test]
fn test_comparison_operators() {
    let state = MemoryState {
        variables: [(1, 5)].into_iter().collect(),
        ..empty()
    };
    // Variable 1 holds 5; bare right sides are constants.
    let cases = [
        ("1 == 5", true),
        ("1 = 5", true),
        ("1 === 5", true),
        ("1 != 4", true),
        ("1 <> 5", false),
        ("1 > 4", true),
        ("1 >= 5", true),
        ("1 < 5", false),
        ("1 <= 5", true),
    ];
    for (condition, expected) in cases {
        assert_eq!(
            evaluate_condition("OV", condition, &state).unwrap(),
            expected,
            "condition {condition:?}"
        );
    }
}

#[test]
fn test_variable_to_variable_comparison() {
    let state = MemoryState {
        variables: [(22, 5), (23, 9)].into_iter().collect(),
        ..empty()
    };
    assert!(evaluate_condition("OV", "v22 < v23", &state).unwrap());
    assert!(evaluate_condition("OV", "v22!=v23", &state).unwrap());
}

#[test]
fn test_bare_left_against_variable_right_is_constant() {
    let state = MemoryState {
        variables: [(3, 4)].into_iter().collect(),
        ..empty()
    };
    // Right side is a reference, so the bare 5 is a plain constant.
    assert!(evaluate_condition("OV", "5 > v3", &state).unwrap());
    assert!(!evaluate_condition("OV", "3 > v3", &state).unwrap());
}

#[test]
fn test_negative_constant_on_right() {
    let state = MemoryState {
        variables: [(9, -2)].into_iter().collect(),
        ..empty()
    };
    assert!(evaluate_condition("OV", "9 <= -1", &state).unwrap());
    assert!(evaluate_condition("OV", "v9 == -2", &state).unwrap());
}

#[test]
fn test_self_variable_operand() {
    let state = MemoryState {
        self_variables: [("3:7:12".to_string(), 40)].into_iter().collect(),
        container: 3,
        context: Some(7),
        ..empty()
    };
    assert!(evaluate_condition("OV", "s12 >= 40", &state).unwrap());
}

#[test]
fn test_qualified_self_variable_operand() {
    let state = MemoryState {
        self_variables: [("12:34:2".to_string(), 6)].into_iter().collect(),
        cross_context: true,
        ..empty()
    };
    assert!(evaluate_condition("OV", "12:34:2 == 6", &state).unwrap());
}

// =============================================================================
// Party size (OPS / OPC)
// =============================================================================

fn party_of(n: usize) -> Vec<ActorAttributes> {
    (0..n)
        .map(|i| ActorAttributes {
            actor_id: i as i64 + 1,
            ..ActorAttributes::default()
        })
        .collect()
}

#[test]
fn test_party_size_defaults_to_equality() {
    let state = MemoryState {
        party: party_of(3),
        ..empty()
    };
    assert!(evaluate_condition("OPS", "3", &state).unwrap());
    assert!(!evaluate_condition("OPS", "4", &state).unwrap());
}

#[test]
fn test_party_size_with_operator_and_label() {
    let state = MemoryState {
        party: party_of(3),
        ..empty()
    };
    assert!(evaluate_condition("OPS", ">= 2", &state).unwrap());
    assert!(evaluate_condition("OPS", "size >= 2", &state).unwrap());
    assert!(evaluate_condition("OPS", "size 3", &state).unwrap());
    assert!(!evaluate_condition("OPS", "< 3", &state).unwrap());
}

#[test]
fn test_core_party_size() {
    let state = MemoryState {
        party: party_of(6),
        ..empty()
    };
    // Core party defaults to the first four members.
    assert!(evaluate_condition("OPC", "4", &state).unwrap());
    assert!(evaluate_condition("OPS", "6", &state).unwrap());

    let state = MemoryState {
        party: party_of(6),
        core_party_size: Some(2),
        ..empty()
    };
    assert!(evaluate_condition("OPC", "2", &state).unwrap());
}

// =============================================================================
// Actor attribute tests (OPL / OPM)
// =============================================================================

fn adventuring_party() -> MemoryState {
    MemoryState {
        party: vec![
            ActorAttributes {
                actor_id: 1,
                class_id: 2,
                active_state_ids: vec![4],
            },
            ActorAttributes {
                actor_id: 7,
                class_id: 3,
                active_state_ids: vec![10, 12],
            },
        ],
        ..empty()
    }
}

#[test]
fn test_leader_attribute_tests() {
    let state = adventuring_party();
    assert!(evaluate_condition("OPL", "actor = 1", &state).unwrap());
    assert!(!evaluate_condition("OPL", "actor = 7", &state).unwrap());
    assert!(evaluate_condition("OPL", "class = 2", &state).unwrap());
    assert!(evaluate_condition("OPL", "state = 4", &state).unwrap());
    assert!(!evaluate_condition("OPL", "state = 12", &state).unwrap());
}

#[test]
fn test_attribute_names_prefix_match() {
    let state = adventuring_party();
    assert!(evaluate_condition("OPL", "a = 1", &state).unwrap());
    assert!(evaluate_condition("OPL", "act = 1", &state).unwrap());
    assert!(evaluate_condition("OPL", "ACTOR = 1", &state).unwrap());
    assert!(evaluate_condition("OPL", "c = 2", &state).unwrap());
    assert!(evaluate_condition("OPL", "s = 4", &state).unwrap());
}

#[test]
fn test_any_member_is_existential() {
    let state = adventuring_party();
    assert!(evaluate_condition("OPM", "actor = 7", &state).unwrap());
    assert!(evaluate_condition("OPM", "class >= 3", &state).unwrap());
    // Any member, any of their states.
    assert!(evaluate_condition("OPM", "state = 12", &state).unwrap());
    assert!(!evaluate_condition("OPM", "state = 99", &state).unwrap());
}

#[test]
fn test_empty_party_tests_false() {
    assert!(!evaluate_condition("OPL", "actor = 1", &empty()).unwrap());
    assert!(!evaluate_condition("OPM", "actor >= 1", &empty()).unwrap());
}

// =============================================================================
// Errors and direct parsing
// =============================================================================

#[test]
fn test_unknown_opcode_with_suggestions() {
    let err = evaluate_condition("OP", "3", &empty()).unwrap_err();
    match err {
        ExpandError::UnknownOpcode { code, suggestions } => {
            assert_eq!(code, "OP");
            assert!(suggestions.contains(&"OPS".to_string()));
        }
        other => panic!("expected UnknownOpcode, got {other:?}"),
    }
}

#[test]
fn test_malformed_conditions() {
    for (code, condition) in [
        ("ON", "E"),
        ("ON", "1 2"),
        ("OV", "1 >"),
        ("OV", "one > two"),
        ("OPS", "big"),
        ("OPL", "level > 3"),
        ("OPL", "actor 4"),
    ] {
        let err = evaluate_condition(code, condition, &empty()).unwrap_err();
        assert!(
            matches!(err, ExpandError::MalformedCondition { .. }),
            "{code}[{condition}] should be malformed, got {err:?}"
        );
    }
}

#[test]
fn test_condition_parse_produces_expected_ast() {
    let parsed = Condition::parse(Opcode::VarCompare, "v2 > 1").unwrap();
    match parsed {
        Condition::VarCompare { op, .. } => assert_eq!(op, Comparison::Gt),
        other => panic!("expected VarCompare, got {other:?}"),
    }

    let parsed = Condition::parse(Opcode::PartySize, "3").unwrap();
    let state = MemoryState {
        party: party_of(3),
        ..empty()
    };
    assert!(evaluate(&parsed, &state).unwrap());
}
