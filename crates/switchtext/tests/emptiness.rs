//! Integration tests for the emptiness oracle used by choice lists.

use switchtext::{Engine, MemoryState};

fn state_with_switch(id: u32, value: bool) -> MemoryState {
    MemoryState {
        switches: [(id, value)].into_iter().collect(),
        ..MemoryState::default()
    }
}

#[test]
fn test_whitespace_only_branches_are_empty_either_way() {
    let engine = Engine::new();
    let text = r"\ON[1]{  }{   }";
    assert!(engine
        .is_empty_after_expansion(text, &state_with_switch(1, true))
        .unwrap());
    assert!(engine
        .is_empty_after_expansion(text, &state_with_switch(1, false))
        .unwrap());
}

#[test]
fn test_choice_empty_only_in_one_state() {
    let engine = Engine::new();
    let text = r"\ON[1]{Ask about the wolves}";
    assert!(!engine
        .is_empty_after_expansion(text, &state_with_switch(1, true))
        .unwrap());
    assert!(engine
        .is_empty_after_expansion(text, &state_with_switch(1, false))
        .unwrap());
}

#[test]
fn test_plain_text_is_not_empty() {
    let engine = Engine::new();
    let state = MemoryState::default();
    assert!(!engine.is_empty_after_expansion("Leave.", &state).unwrap());
    assert!(engine.is_empty_after_expansion("   ", &state).unwrap());
    assert!(engine.is_empty_after_expansion("", &state).unwrap());
}

#[test]
fn test_host_codes_count_as_content() {
    let engine = Engine::new();
    let state = MemoryState::default();
    assert!(!engine.is_empty_after_expansion(r"\C[2]", &state).unwrap());
}

#[test]
fn test_nested_empty_branches() {
    let engine = Engine::new();
    let text = r"\ON[1]{\ON[2]{ }{ }}{ }";
    assert!(engine
        .is_empty_after_expansion(text, &state_with_switch(1, true))
        .unwrap());
}
