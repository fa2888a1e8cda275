//! Condition evaluation.

use crate::parser::{ActorAttribute, ActorScope, Comparison, Condition, Opcode};

use super::error::ExpandError;
use super::operand::resolve_operand;
use super::state::{ActorAttributes, StateProvider};

/// Evaluate a parsed condition against host state.
pub fn evaluate(condition: &Condition, state: &dyn StateProvider) -> Result<bool, ExpandError> {
    match condition {
        Condition::SwitchTest { operand, negate } => {
            let on = resolve_operand(operand, state)? != 0;
            Ok(on != *negate)
        }
        Condition::VarCompare { left, op, right } => Ok(op.test(
            resolve_operand(left, state)?,
            resolve_operand(right, state)?,
        )),
        Condition::PartySizeCompare { core, op, size } => {
            let count = if *core {
                state.core_party_size()
            } else {
                state.party_size()
            };
            Ok(op.test(count as i64, *size))
        }
        Condition::ActorTest {
            scope,
            attribute,
            op,
            value,
        } => {
            let members: Vec<ActorAttributes> = match scope {
                ActorScope::Leader => state.party_leader().into_iter().collect(),
                ActorScope::AnyMember => state.party_members(),
            };
            Ok(members
                .iter()
                .any(|actor| attribute_matches(actor, *attribute, *op, *value)))
        }
    }
}

/// Parse and evaluate a condition given a textual opcode.
///
/// This is the evaluator as a standalone capability, for hosts that
/// gate things other than message text on the same condition syntax.
pub fn evaluate_condition(
    code: &str,
    condition: &str,
    state: &dyn StateProvider,
) -> Result<bool, ExpandError> {
    let opcode = Opcode::from_code(code).ok_or_else(|| ExpandError::unknown_opcode(code))?;
    let parsed =
        Condition::parse(opcode, condition).map_err(|e| ExpandError::MalformedCondition {
            opcode,
            condition: condition.to_string(),
            message: e.message,
        })?;
    evaluate(&parsed, state)
}

fn attribute_matches(
    actor: &ActorAttributes,
    attribute: ActorAttribute,
    op: Comparison,
    value: i64,
) -> bool {
    match attribute {
        ActorAttribute::ActorId => op.test(actor.actor_id, value),
        ActorAttribute::ClassId => op.test(actor.class_id, value),
        // Existential over active states; with AnyMember scope this is
        // a double existential (any member, any of their states).
        ActorAttribute::StateId => actor
            .active_state_ids
            .iter()
            .any(|state_id| op.test(*state_id, value)),
    }
}
