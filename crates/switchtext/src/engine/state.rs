//! Read-only game-state collaborator interface.
//!
//! The engine never mutates state; every read goes through
//! [`StateProvider`]. Hosts embed the engine by implementing this trait
//! over their own store. [`MemoryState`] is a serde-backed in-memory
//! implementation used by tests and the CLI.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::parser::SelfSlot;

/// The container/context pair a self-scoped slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScopeKey {
    pub container: u32,
    pub context: u32,
}

/// Attributes the evaluator reads off one party member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorAttributes {
    pub actor_id: i64,
    pub class_id: i64,
    #[serde(default)]
    pub active_state_ids: Vec<i64>,
}

/// Optional cross-context capability.
///
/// Implementing this trait (and returning it from
/// [`StateProvider::naming`]) declares that the host supports addressing
/// slots in containers and contexts other than the current pair. Hosts
/// without name registries may return `None` from both methods; numeric
/// qualified references still work.
pub trait ScopeNaming {
    /// Map a container name to its id.
    fn container_by_name(&self, name: &str) -> Option<u32>;
    /// Map a context name to its id within a container.
    fn context_by_name(&self, container: u32, name: &str) -> Option<u32>;
}

/// Synchronous, read-only view of host game state.
///
/// All reads are point-in-time; the engine makes no transactional
/// guarantee across the multiple reads performed for one expansion.
pub trait StateProvider {
    /// Value of a game-wide switch. Unknown ids read as off.
    fn switch(&self, id: u32) -> bool;
    /// Value of a game-wide variable. Unknown ids read as zero.
    fn variable(&self, id: u32) -> i64;
    /// Value of a self-scoped flag slot.
    fn self_flag(&self, scope: ScopeKey, slot: SelfSlot) -> bool;
    /// Value of a self-scoped variable slot.
    fn self_variable(&self, scope: ScopeKey, id: u32) -> i64;
    /// Current party size.
    fn party_size(&self) -> usize;
    /// Size of the core party subset.
    fn core_party_size(&self) -> usize;
    /// The party leader, if the party is non-empty.
    fn party_leader(&self) -> Option<ActorAttributes>;
    /// Every current party member, leader first.
    fn party_members(&self) -> Vec<ActorAttributes>;
    /// Id of the currently active container.
    fn current_container(&self) -> u32;
    /// Id of the currently running context, if any.
    fn current_context(&self) -> Option<u32>;
    /// Cross-context capability; absent by default.
    fn naming(&self) -> Option<&dyn ScopeNaming> {
        None
    }
}

/// In-memory state snapshot, deserializable from JSON.
///
/// Self-scoped slots are keyed `"container:context:slot"`, for example
/// `"12:34:A"` or `"12:34:7"`. The core party defaults to the first
/// four members when no explicit size is given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryState {
    pub switches: HashMap<u32, bool>,
    pub variables: HashMap<u32, i64>,
    pub self_flags: HashMap<String, bool>,
    pub self_variables: HashMap<String, i64>,
    pub party: Vec<ActorAttributes>,
    pub core_party_size: Option<usize>,
    pub container: u32,
    pub context: Option<u32>,
    pub container_names: HashMap<String, u32>,
    pub context_names: HashMap<String, u32>,
    /// Whether this snapshot advertises the cross-context capability.
    pub cross_context: bool,
}

impl MemoryState {
    fn self_key(scope: ScopeKey, slot: impl std::fmt::Display) -> String {
        format!("{}:{}:{slot}", scope.container, scope.context)
    }
}

impl StateProvider for MemoryState {
    fn switch(&self, id: u32) -> bool {
        self.switches.get(&id).copied().unwrap_or(false)
    }

    fn variable(&self, id: u32) -> i64 {
        self.variables.get(&id).copied().unwrap_or(0)
    }

    fn self_flag(&self, scope: ScopeKey, slot: SelfSlot) -> bool {
        self.self_flags
            .get(&Self::self_key(scope, slot))
            .copied()
            .unwrap_or(false)
    }

    fn self_variable(&self, scope: ScopeKey, id: u32) -> i64 {
        self.self_variables
            .get(&Self::self_key(scope, id))
            .copied()
            .unwrap_or(0)
    }

    fn party_size(&self) -> usize {
        self.party.len()
    }

    fn core_party_size(&self) -> usize {
        self.core_party_size.unwrap_or_else(|| self.party.len().min(4))
    }

    fn party_leader(&self) -> Option<ActorAttributes> {
        self.party.first().cloned()
    }

    fn party_members(&self) -> Vec<ActorAttributes> {
        self.party.clone()
    }

    fn current_container(&self) -> u32 {
        self.container
    }

    fn current_context(&self) -> Option<u32> {
        self.context
    }

    fn naming(&self) -> Option<&dyn ScopeNaming> {
        if self.cross_context { Some(self) } else { None }
    }
}

impl ScopeNaming for MemoryState {
    fn container_by_name(&self, name: &str) -> Option<u32> {
        self.container_names.get(name).copied()
    }

    fn context_by_name(&self, _container: u32, name: &str) -> Option<u32> {
        self.context_names.get(name).copied()
    }
}
