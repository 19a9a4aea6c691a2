//! Block tree accessor and host-side mutation surface.
//!
//! [`BlockTree`] models the host document the engine operates over: block
//! states keyed by [`BlockId`], the structural parent/child relation as a
//! directed graph whose edge weights are sibling sort keys, slot bindings
//! (where macros render), and the mounted [`TabStrip`] overlays keyed by
//! container id.
//!
//! The engine side of this API is deliberately narrow. Reads go through the
//! query methods ([`BlockTree::node`], [`BlockTree::children`],
//! [`BlockTree::panes_under`], ...) and the only writes the engine performs are
//! [`BlockTree::set_visible`] and strip attribute toggles through
//! [`BlockTree::strip_mut`]. Structural mutation ([`BlockTree::insert`],
//! [`BlockTree::remove`], slot binding, strip mounting) belongs to the host and
//! to test fixtures; the engine never creates or deletes blocks.

use std::collections::BTreeMap;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::{
    error::TabstripError,
    properties::{BlockId, BlockNode, GroupId, SlotId, TabStrip},
};

#[derive(Debug, Clone, Default)]
pub struct BlockTree {
    states: BTreeMap<BlockId, BlockNode>,
    relations: StableDiGraph<BlockId, u16>,
    indices: BTreeMap<BlockId, NodeIndex>,
    slots: BTreeMap<SlotId, BlockId>,
    strips: BTreeMap<GroupId, TabStrip>,
}

impl BlockTree {
    // ------------------------------------------------------------------
    // Queries (engine-facing, read only)
    // ------------------------------------------------------------------

    pub fn node(&self, id: BlockId) -> Option<&BlockNode> {
        self.states.get(&id)
    }

    pub fn contains(&self, id: BlockId) -> bool {
        self.states.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn parent(&self, id: BlockId) -> Option<BlockId> {
        let idx = self.indices.get(&id)?;
        self.relations
            .neighbors_directed(*idx, Direction::Incoming)
            .next()
            .map(|parent_idx| self.relations[parent_idx])
    }

    /// Walk from `id`'s parent up to the root.
    pub fn ancestors(&self, id: BlockId) -> impl Iterator<Item = BlockId> + '_ {
        std::iter::successors(self.parent(id), move |current| self.parent(*current))
    }

    /// True when `id` is `root` or lies in `root`'s subtree.
    pub fn is_within(&self, id: BlockId, root: BlockId) -> bool {
        id == root || self.ancestors(id).any(|ancestor| ancestor == root)
    }

    /// Direct children in tree order (sibling sort-key order).
    pub fn children(&self, id: BlockId) -> Vec<BlockId> {
        let Some(idx) = self.indices.get(&id) else {
            return Vec::new();
        };
        let mut edges: Vec<(u16, BlockId)> = self
            .relations
            .edges_directed(*idx, Direction::Outgoing)
            .map(|edge| (*edge.weight(), self.relations[edge.target()]))
            .collect();
        edges.sort_by_key(|(order, _)| *order);
        edges.into_iter().map(|(_, child)| child).collect()
    }

    /// Content panes of a group: every descendant of `owner` whose nesting
    /// depth is one level deeper than `level`, in tree order.
    pub fn panes_under(&self, owner: BlockId, level: u32) -> Vec<BlockId> {
        let mut panes = Vec::new();
        self.collect_panes(owner, level + 1, &mut panes);
        panes
    }

    fn collect_panes(&self, id: BlockId, pane_level: u32, out: &mut Vec<BlockId>) {
        for child in self.children(id) {
            if let Some(node) = self.node(child) {
                if node.level == pane_level {
                    out.push(child);
                }
            }
            self.collect_panes(child, pane_level, out);
        }
    }

    /// Nearest measured content width, checking `id` itself and then its
    /// ancestors.
    pub fn content_width_near(&self, id: BlockId) -> Option<f32> {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .find_map(|current| self.node(current)?.content_width)
    }

    pub fn slot_block(&self, slot: &SlotId) -> Option<BlockId> {
        self.slots.get(slot).copied()
    }

    pub fn strip(&self, container: &GroupId) -> Option<&TabStrip> {
        self.strips.get(container)
    }

    pub fn strips(&self) -> impl Iterator<Item = &TabStrip> {
        self.strips.values()
    }

    // ------------------------------------------------------------------
    // Narrow mutation (the only writes the engine performs)
    // ------------------------------------------------------------------

    /// Toggle a block's visibility. Idempotent; `None` when the block is gone.
    pub fn set_visible(&mut self, id: BlockId, visible: bool) -> Option<()> {
        self.states.get_mut(&id).map(|node| {
            node.visible = visible;
        })
    }

    pub fn strip_mut(&mut self, container: &GroupId) -> Option<&mut TabStrip> {
        self.strips.get_mut(container)
    }

    // ------------------------------------------------------------------
    // Host-side structural mutation (hosts and test fixtures only)
    // ------------------------------------------------------------------

    /// Insert a block under `parent` (or as a root), appended after existing
    /// siblings.
    pub fn insert(
        &mut self,
        parent: Option<BlockId>,
        node: BlockNode,
    ) -> Result<BlockId, TabstripError> {
        let id = node.id;
        let idx = self.relations.add_node(id);
        if let Some(parent) = parent {
            let Some(parent_idx) = self.indices.get(&parent).copied() else {
                self.relations.remove_node(idx);
                return Err(TabstripError::NotFound(format!(
                    "parent block {parent} is not in the tree"
                )));
            };
            let order = self
                .relations
                .edges_directed(parent_idx, Direction::Outgoing)
                .count() as u16;
            self.relations.add_edge(parent_idx, idx, order);
        }
        self.indices.insert(id, idx);
        self.states.insert(id, node);
        Ok(id)
    }

    /// Remove a block and its whole subtree, along with any slot bindings and
    /// mounted strips hosted inside the removed region. Returns the removed
    /// block ids.
    pub fn remove(&mut self, id: BlockId) -> Vec<BlockId> {
        let mut removed = Vec::new();
        self.collect_subtree(id, &mut removed);
        for block in &removed {
            if let Some(idx) = self.indices.remove(block) {
                self.relations.remove_node(idx);
            }
            self.states.remove(block);
        }
        self.slots.retain(|_, block| !removed.contains(block));
        self.strips
            .retain(|_, strip| !removed.contains(&strip.host_block));
        removed
    }

    fn collect_subtree(&self, id: BlockId, out: &mut Vec<BlockId>) {
        if !self.contains(id) {
            return;
        }
        out.push(id);
        for child in self.children(id) {
            self.collect_subtree(child, out);
        }
    }

    /// Record a fresh layout measurement for a block's content area.
    pub fn set_content_width(&mut self, id: BlockId, width: Option<f32>) -> Option<()> {
        self.states.get_mut(&id).map(|node| {
            node.content_width = width;
        })
    }

    /// Bind a render slot to the block it renders inside.
    pub fn bind_slot(&mut self, slot: SlotId, block: BlockId) {
        self.slots.insert(slot, block);
    }

    /// Mount a header strip, replacing any previous strip with the same
    /// container id (keyed header injection is idempotent per container).
    pub fn mount_strip(&mut self, strip: TabStrip) {
        self.strips.insert(strip.container.clone(), strip);
    }

    pub fn unmount_strip(&mut self, container: &GroupId) -> Option<TabStrip> {
        self.strips.remove(container)
    }
}
