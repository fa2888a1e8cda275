//! Operand resolution against the state provider.

use crate::parser::{Operand, ScopePart, SelfRef, SelfSlot, SlotKind};

use super::error::{ExpandError, NameKind};
use super::state::{ScopeKey, ScopeNaming, StateProvider};

/// Resolve an operand to an integer; booleans resolve to 0/1.
pub fn resolve_operand(operand: &Operand, state: &dyn StateProvider) -> Result<i64, ExpandError> {
    match operand {
        Operand::Constant(value) => Ok(*value),
        Operand::Switch(id) => Ok(i64::from(state.switch(*id))),
        Operand::Variable(id) => Ok(state.variable(*id)),
        Operand::SelfRef(reference) => resolve_self_ref(reference, state),
    }
}

fn resolve_self_ref(
    reference: &SelfRef,
    state: &dyn StateProvider,
) -> Result<i64, ExpandError> {
    // A reference with no locatable scope (no running context) reads as
    // off/zero rather than failing, matching hosts where messages can
    // play outside any event context.
    let Some(scope) = locate_scope(reference, state)? else {
        return Ok(0);
    };
    Ok(match (reference.kind, reference.slot) {
        (SlotKind::Switch, slot) => i64::from(state.self_flag(scope, slot)),
        (SlotKind::Variable, SelfSlot::Number(id)) => state.self_variable(scope, id),
        // The condition grammars never produce a lettered variable slot.
        (SlotKind::Variable, SelfSlot::Letter(_)) => 0,
    })
}

/// Determine the container/context pair a self reference targets.
///
/// Any explicit part requires the host's cross-context capability;
/// named parts additionally require the capability to map them.
fn locate_scope(
    reference: &SelfRef,
    state: &dyn StateProvider,
) -> Result<Option<ScopeKey>, ExpandError> {
    if reference.container.is_none() && reference.context.is_none() {
        return Ok(state.current_context().map(|context| ScopeKey {
            container: state.current_container(),
            context,
        }));
    }

    let naming = state
        .naming()
        .ok_or_else(|| ExpandError::UnsupportedCrossContextAccess {
            reference: reference.to_string(),
        })?;

    let container = match &reference.container {
        None => state.current_container(),
        Some(part) => resolve_part(part, NameKind::Container, reference, |name| {
            naming.container_by_name(name)
        })?,
    };
    let context = match &reference.context {
        None => match state.current_context() {
            Some(context) => context,
            None => return Ok(None),
        },
        Some(part) => resolve_part(part, NameKind::Context, reference, |name| {
            naming.context_by_name(container, name)
        })?,
    };
    Ok(Some(ScopeKey { container, context }))
}

fn resolve_part(
    part: &ScopePart,
    kind: NameKind,
    reference: &SelfRef,
    lookup: impl Fn(&str) -> Option<u32>,
) -> Result<u32, ExpandError> {
    match part {
        ScopePart::Id(id) => Ok(*id),
        ScopePart::Named(name) => {
            lookup(name).ok_or_else(|| ExpandError::UnresolvedNamedReference {
                kind,
                name: name.clone(),
                reference: reference.to_string(),
            })
        }
    }
}
