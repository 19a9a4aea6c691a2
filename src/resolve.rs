//! Reference resolution: mapping a rendering location to its canonical owner.
//!
//! A reference block mirrors another block's content at a different tree
//! location. Tab state must not be duplicated across copies, so everything
//! downstream (group ids, the registry, reconciliation) keys off the canonical
//! owner resolved here. Resolution is a pure lookup; the reference relation is
//! weak and non-owning.

use crate::{
    properties::{BlockId, BlockKind, SlotId},
    tree::BlockTree,
};

/// Result of resolving a rendering location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotAnchor {
    /// True when the location sits inside a reference wrapper.
    pub reference: bool,
    /// The canonical owner block; for references this is the original block,
    /// never the reference's own id.
    pub owner: BlockId,
}

/// Resolve the canonical owner for a rendering slot.
///
/// `None` means no tab group can be anchored here (unbound slot, missing
/// block, or a reference wrapper without a back-reference) and the caller
/// skips the render.
pub fn resolve_slot(tree: &BlockTree, slot: &SlotId) -> Option<SlotAnchor> {
    let seat = tree.slot_block(slot)?;
    resolve_owner(tree, seat)
}

/// Walk up from `block` to the nearest enclosing reference wrapper; if one
/// exists, the owner is its explicit back-reference. Without a wrapper the
/// nearest structural block, `block` itself, is the owner.
pub fn resolve_owner(tree: &BlockTree, block: BlockId) -> Option<SlotAnchor> {
    for id in std::iter::once(block).chain(tree.ancestors(block)) {
        match tree.node(id)?.kind {
            BlockKind::Reference(Some(target)) => {
                return Some(SlotAnchor {
                    reference: true,
                    owner: target,
                });
            }
            BlockKind::Reference(None) => {
                // No back-reference annotation yet; nothing to anchor state to.
                tracing::debug!("reference wrapper {id} carries no back-reference");
                return None;
            }
            BlockKind::Primary => {}
        }
    }
    tree.node(block).map(|node| SlotAnchor {
        reference: false,
        owner: node.id,
    })
}
