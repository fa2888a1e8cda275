//! Public AST types for switchable directives and their conditions.
//!
//! These types are public to enable external tooling (linters, host
//! integrations, etc.).

use std::fmt;

/// The closed set of conditional directive opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `ON` — true when the referenced switch is on.
    On,
    /// `OFF` — true when the referenced switch is off.
    Off,
    /// `OV` — integer comparison between two operands.
    VarCompare,
    /// `OPS` — party-size comparison.
    PartySize,
    /// `OPC` — core-party-size comparison.
    CorePartySize,
    /// `OPL` — party-leader attribute test.
    Leader,
    /// `OPM` — any-party-member attribute test.
    AnyMember,
}

impl Opcode {
    /// Every opcode, in scanning order.
    pub const ALL: [Opcode; 7] = [
        Opcode::On,
        Opcode::Off,
        Opcode::VarCompare,
        Opcode::PartySize,
        Opcode::CorePartySize,
        Opcode::Leader,
        Opcode::AnyMember,
    ];

    /// The text code that introduces this opcode in message text.
    pub fn code(self) -> &'static str {
        match self {
            Opcode::On => "ON",
            Opcode::Off => "OFF",
            Opcode::VarCompare => "OV",
            Opcode::PartySize => "OPS",
            Opcode::CorePartySize => "OPC",
            Opcode::Leader => "OPL",
            Opcode::AnyMember => "OPM",
        }
    }

    /// Parse a text code (case-insensitive) into an opcode.
    ///
    /// Returns `None` for codes outside the fixed set; callers surface
    /// that as an unknown-opcode error.
    pub fn from_code(code: &str) -> Option<Opcode> {
        Opcode::ALL
            .into_iter()
            .find(|op| op.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One parsed directive occurrence.
///
/// Directives are transient: constructed by the scanner, consumed by the
/// expansion pass that evaluates them, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub opcode: Opcode,
    /// Raw condition text between the brackets, unparsed.
    pub condition: String,
    /// Text substituted when the condition holds.
    pub if_text: String,
    /// Text substituted otherwise; absent means empty.
    pub else_text: Option<String>,
}

/// A resolvable operand inside a condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A literal integer.
    Constant(i64),
    /// A game-wide switch id, resolved to 0/1.
    Switch(u32),
    /// A game-wide variable id.
    Variable(u32),
    /// A slot in a (possibly remote) container/context pair.
    SelfRef(SelfRef),
}

/// Which kind of slot a self reference targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Switch,
    Variable,
}

/// A reference to a self-scoped slot, optionally qualified with an
/// explicit container and context. Omitted parts fall back to the
/// currently active pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfRef {
    pub kind: SlotKind,
    pub slot: SelfSlot,
    pub container: Option<ScopePart>,
    pub context: Option<ScopePart>,
}

impl fmt::Display for SelfRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.container, &self.context) {
            (Some(container), Some(context)) => {
                write!(f, "{container}:{context}:{}", self.slot)
            }
            (None, Some(context)) => write!(f, "{context}:{}", self.slot),
            _ => match self.kind {
                SlotKind::Switch => write!(f, "{}", self.slot),
                SlotKind::Variable => write!(f, "s{}", self.slot),
            },
        }
    }
}

/// A self-scoped slot id: a letter (`A`–`D`) or a numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfSlot {
    Letter(char),
    Number(u32),
}

impl fmt::Display for SelfSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelfSlot::Letter(c) => write!(f, "{c}"),
            SelfSlot::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One part of a qualified scope: a numeric id or a host-defined name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopePart {
    Id(u32),
    Named(String),
}

impl fmt::Display for ScopePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopePart::Id(id) => write!(f, "{id}"),
            ScopePart::Named(name) => f.write_str(name),
        }
    }
}

/// A comparison operator over two resolved integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl Comparison {
    /// Apply the comparison to two resolved values.
    pub fn test(self, left: i64, right: i64) -> bool {
        match self {
            Comparison::Eq => left == right,
            Comparison::Ne => left != right,
            Comparison::Gt => left > right,
            Comparison::Ge => left >= right,
            Comparison::Lt => left < right,
            Comparison::Le => left <= right,
        }
    }

    /// Canonical symbol, used in error messages.
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Eq => "==",
            Comparison::Ne => "!=",
            Comparison::Gt => ">",
            Comparison::Ge => ">=",
            Comparison::Lt => "<",
            Comparison::Le => "<=",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A fully parsed condition, ready for evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Switch test; `negate` is set for `OFF` directives.
    SwitchTest { operand: Operand, negate: bool },
    /// Integer comparison between two operands.
    VarCompare {
        left: Operand,
        op: Comparison,
        right: Operand,
    },
    /// Party-size comparison; `core` restricts to the core party.
    PartySizeCompare {
        core: bool,
        op: Comparison,
        size: i64,
    },
    /// Actor attribute test over the leader or any member.
    ActorTest {
        scope: ActorScope,
        attribute: ActorAttribute,
        op: Comparison,
        value: i64,
    },
}

/// Which actors an attribute test ranges over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorScope {
    Leader,
    AnyMember,
}

/// The attribute an actor test reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorAttribute {
    ActorId,
    ClassId,
    /// Existential over the actor's active state ids.
    StateId,
}
