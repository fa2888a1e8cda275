//! Condition grammars, one per opcode.
//!
//! Each grammar must consume its condition text completely; anything
//! left over is a mismatch. Letters are matched case-insensitively,
//! host-defined scope names are preserved as written.

use winnow::ascii::{Caseless, dec_int, dec_uint};
use winnow::combinator::{alt, opt, preceded, separated};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use super::ast::{
    ActorAttribute, ActorScope, Comparison, Condition, Opcode, Operand, ScopePart, SelfRef,
    SelfSlot, SlotKind,
};
use super::error::ConditionError;

impl Condition {
    /// Parse condition text against the grammar for `opcode`.
    pub fn parse(opcode: Opcode, text: &str) -> Result<Condition, ConditionError> {
        let trimmed = text.trim();
        match opcode {
            Opcode::On => switch_test(trimmed, false),
            Opcode::Off => switch_test(trimmed, true),
            Opcode::VarCompare => var_compare(trimmed),
            Opcode::PartySize => party_size(trimmed, false),
            Opcode::CorePartySize => party_size(trimmed, true),
            Opcode::Leader => actor_test(trimmed, ActorScope::Leader),
            Opcode::AnyMember => actor_test(trimmed, ActorScope::AnyMember),
        }
    }
}

/// Run a parser over the full condition text.
fn run<'a, O, P>(parser: P, input: &'a str, expected: &str) -> Result<O, ConditionError>
where
    P: Parser<&'a str, O, ErrMode<ContextError>>,
{
    let mut parser = parser;
    parser
        .parse(input)
        .map_err(|_| ConditionError::new(format!("expected {expected}")))
}

// =============================================================================
// ON / OFF
// =============================================================================

fn switch_test(text: &str, negate: bool) -> Result<Condition, ConditionError> {
    let operand = run(
        switch_operand,
        text,
        "a switch id, a self switch letter A-D, or a container:context:slot reference",
    )?;
    Ok(Condition::SwitchTest { operand, negate })
}

fn switch_operand(input: &mut &str) -> ModalResult<Operand> {
    alt((
        |i: &mut &str| qualified_ref(i, SlotKind::Switch),
        plain_switch,
    ))
    .parse_next(input)
}

/// A plain switch operand with an optional `s`/`ss` prefix: a numeric
/// game-wide switch id, or a letter naming a self switch of the current
/// container/context pair.
fn plain_switch(input: &mut &str) -> ModalResult<Operand> {
    let _ = opt(alt((Caseless("ss"), Caseless("s")))).parse_next(input)?;
    alt((
        slot_letter.map(|letter| {
            Operand::SelfRef(SelfRef {
                kind: SlotKind::Switch,
                slot: SelfSlot::Letter(letter),
                container: None,
                context: None,
            })
        }),
        dec_uint.map(Operand::Switch),
    ))
    .parse_next(input)
}

fn slot_letter(input: &mut &str) -> ModalResult<char> {
    one_of(('a'..='d', 'A'..='D'))
        .map(|c: char| c.to_ascii_uppercase())
        .parse_next(input)
}

// =============================================================================
// OV
// =============================================================================

/// An OV operand before disambiguation: either an explicit reference or
/// a bare integer whose meaning depends on the other side.
enum RawOperand {
    Fixed(Operand),
    Bare(i64),
}

fn var_compare(text: &str) -> Result<Condition, ConditionError> {
    let (left, op, right) = run(
        ov_condition,
        text,
        "'<operand> <op> <operand>' with v-prefixed variables, \
         s-prefixed self variables, or integers",
    )?;

    // An unprefixed right side is a constant; an unprefixed left side
    // is a variable id, unless the right side is itself a reference, in
    // which case the bare left side is a constant.
    let right_is_ref = matches!(right, RawOperand::Fixed(_));
    let right = match right {
        RawOperand::Fixed(operand) => operand,
        RawOperand::Bare(n) => Operand::Constant(n),
    };
    let left = match left {
        RawOperand::Fixed(operand) => operand,
        RawOperand::Bare(n) if right_is_ref => Operand::Constant(n),
        RawOperand::Bare(n) => Operand::Variable(n as u32),
    };
    Ok(Condition::VarCompare { left, op, right })
}

fn ov_condition(input: &mut &str) -> ModalResult<(RawOperand, Comparison, RawOperand)> {
    let _ = ws(input)?;
    let left = ov_left(input)?;
    let _ = ws(input)?;
    let op = comparison(input)?;
    let _ = ws(input)?;
    let right = ov_right(input)?;
    let _ = ws(input)?;
    Ok((left, op, right))
}

/// Left operand: a reference or an unsigned bare integer.
fn ov_left(input: &mut &str) -> ModalResult<RawOperand> {
    alt((ov_ref, dec_uint.map(|n: u32| RawOperand::Bare(i64::from(n))))).parse_next(input)
}

/// Right operand: a reference or a bare integer, possibly negative.
fn ov_right(input: &mut &str) -> ModalResult<RawOperand> {
    alt((ov_ref, dec_int.map(RawOperand::Bare))).parse_next(input)
}

fn ov_ref(input: &mut &str) -> ModalResult<RawOperand> {
    alt((
        (|i: &mut &str| qualified_ref(i, SlotKind::Variable)).map(RawOperand::Fixed),
        preceded(Caseless("v"), dec_uint)
            .map(|id: u32| RawOperand::Fixed(Operand::Variable(id))),
        preceded(Caseless("s"), dec_uint).map(|id: u32| {
            RawOperand::Fixed(Operand::SelfRef(SelfRef {
                kind: SlotKind::Variable,
                slot: SelfSlot::Number(id),
                container: None,
                context: None,
            }))
        }),
    ))
    .parse_next(input)
}

// =============================================================================
// OPS / OPC
// =============================================================================

fn party_size(text: &str, core: bool) -> Result<Condition, ConditionError> {
    let (op, size) = run(party_condition, text, "'[label] [op] <n>'")?;
    Ok(Condition::PartySizeCompare {
        core,
        op: op.unwrap_or(Comparison::Eq),
        size,
    })
}

fn party_condition(input: &mut &str) -> ModalResult<(Option<Comparison>, i64)> {
    let _ = ws(input)?;
    let _ = opt((take_while(1.., |c: char| c.is_ascii_alphabetic()), ws)).parse_next(input)?;
    let op = opt((comparison, ws)).parse_next(input)?;
    let size: i64 = dec_int.parse_next(input)?;
    let _ = ws(input)?;
    Ok((op.map(|(op, ())| op), size))
}

// =============================================================================
// OPL / OPM
// =============================================================================

fn actor_test(text: &str, scope: ActorScope) -> Result<Condition, ConditionError> {
    let (word, op, value) = run(actor_condition, text, "'<actor|class|state> <op> <n>'")?;
    let attribute = attribute_for(&word).ok_or_else(|| {
        ConditionError::new(format!(
            "unknown attribute '{word}', expected a prefix of actor, class, or state"
        ))
    })?;
    Ok(Condition::ActorTest {
        scope,
        attribute,
        op,
        value,
    })
}

fn actor_condition(input: &mut &str) -> ModalResult<(String, Comparison, i64)> {
    let _ = ws(input)?;
    let word = take_while(1.., |c: char| c.is_ascii_alphabetic()).parse_next(input)?;
    let _ = ws(input)?;
    let op = comparison(input)?;
    let _ = ws(input)?;
    let value: i64 = dec_int.parse_next(input)?;
    let _ = ws(input)?;
    Ok((word.to_string(), op, value))
}

/// Case-insensitive prefix match against the attribute names, so `a`,
/// `act` and `actor` all name the actor id.
fn attribute_for(word: &str) -> Option<ActorAttribute> {
    let lower = word.to_ascii_lowercase();
    [
        ("actor", ActorAttribute::ActorId),
        ("class", ActorAttribute::ClassId),
        ("state", ActorAttribute::StateId),
    ]
    .into_iter()
    .find_map(|(name, attribute)| name.starts_with(&lower).then_some(attribute))
}

// =============================================================================
// Shared pieces
// =============================================================================

/// Parse `container:context:slot` or `context:slot`. Scope parts may be
/// numeric ids or host-defined names; the slot must fit the slot kind.
fn qualified_ref(input: &mut &str, kind: SlotKind) -> ModalResult<Operand> {
    let parts: Vec<&str> = separated(2..=3, segment, ':').parse_next(input)?;
    let (scope_parts, slot_text) = parts.split_at(parts.len() - 1);
    let Some(slot) = slot_for(slot_text[0], kind) else {
        return Err(ErrMode::Backtrack(ContextError::new()));
    };

    let mut scopes = scope_parts.iter().map(|part| scope_part(part));
    let (container, context) = match scope_parts.len() {
        1 => (None, scopes.next()),
        _ => (scopes.next(), scopes.next()),
    };
    Ok(Operand::SelfRef(SelfRef {
        kind,
        slot,
        container,
        context,
    }))
}

fn segment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}

fn slot_for(text: &str, kind: SlotKind) -> Option<SelfSlot> {
    if let Ok(n) = text.parse::<u32>() {
        return Some(SelfSlot::Number(n));
    }
    match kind {
        SlotKind::Switch => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if ('A'..='D').contains(&c.to_ascii_uppercase()) => {
                    Some(SelfSlot::Letter(c.to_ascii_uppercase()))
                }
                _ => None,
            }
        }
        SlotKind::Variable => None,
    }
}

fn scope_part(text: &str) -> ScopePart {
    text.parse::<u32>()
        .map_or_else(|_| ScopePart::Named(text.to_string()), ScopePart::Id)
}

fn comparison(input: &mut &str) -> ModalResult<Comparison> {
    alt((
        "===".value(Comparison::Eq),
        "==".value(Comparison::Eq),
        "<>".value(Comparison::Ne),
        "!=".value(Comparison::Ne),
        ">=".value(Comparison::Ge),
        "<=".value(Comparison::Le),
        "=".value(Comparison::Eq),
        ">".value(Comparison::Gt),
        "<".value(Comparison::Lt),
    ))
    .parse_next(input)
}

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}
