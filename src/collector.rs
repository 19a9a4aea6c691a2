//! Orphan collection: evicting registry entries whose header is gone.
//!
//! Runs on every global change notification as a full-registry sweep;
//! correctness over efficiency, since the registry is bounded by the number of
//! tab groups visible across the session.

use std::sync::mpsc::Sender;

use crate::{
    error::TabstripError, event::EngineEvent, registry::TabRegistry, tree::BlockTree,
};

/// Evict every registry entry whose header strip no longer exists in the
/// tree, restoring all deeper-level panes under the former owner to a visible
/// state so content is not silently lost once the tab UI disappears.
pub(crate) fn sweep(
    tree: &mut BlockTree,
    registry: &TabRegistry,
    events: &Sender<EngineEvent>,
) -> Result<(), TabstripError> {
    for (group, _) in registry.entries() {
        if tree.strip(&group).is_some() {
            continue;
        }
        registry.evict(&group);
        tracing::debug!("evicting orphaned tab group {group}");

        if let Some(owner) = group.owner() {
            if let Some(level) = tree.node(owner).map(|node| node.level) {
                for pane in tree.panes_under(owner, level) {
                    tree.set_visible(pane, true);
                }
            }
        }
        events.send(EngineEvent::GroupEvicted(group))?;
    }
    Ok(())
}
