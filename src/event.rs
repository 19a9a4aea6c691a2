use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::properties::{BlockId, GroupId};

/// Events emitted by the engine for the host to act on.
///
/// The engine never opens editors or injects markup itself; it describes what
/// happened (or what it wants the host to do) over a plain channel and the host
/// applies the effect on whatever surface it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// Request to open the given block for direct editing.
    EditRequested(BlockId),
    /// A header strip was mounted (or re-mounted) for a group.
    HeaderMounted(GroupId),
    /// An orphaned group's registry entry was evicted and its panes restored.
    GroupEvicted(GroupId),
}

impl Display for EngineEvent {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            EngineEvent::EditRequested(_) => write!(f, "EditRequested"),
            EngineEvent::HeaderMounted(_) => write!(f, "HeaderMounted"),
            EngineEvent::GroupEvicted(_) => write!(f, "GroupEvicted"),
        }
    }
}
