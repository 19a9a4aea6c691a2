//! Shared fixtures for integration tests

use std::sync::mpsc::{channel, Receiver};

use tabstrip_core::{
    config::TabsConfig,
    engine::TabsEngine,
    event::EngineEvent,
    properties::{BlockId, BlockNode, GroupId, SlotId},
    tree::BlockTree,
};

pub struct Host {
    pub tree: BlockTree,
    pub engine: TabsEngine,
    pub events: Receiver<EngineEvent>,
    pub page: BlockId,
}

impl Host {
    /// An empty page and an engine wired to an event channel.
    pub fn new() -> Self {
        let mut tree = BlockTree::default();
        let page = tree.insert(None, BlockNode::new(0, "page")).unwrap();
        let (tx, events) = channel();
        let engine = TabsEngine::new(TabsConfig::default(), tx);
        Host {
            tree,
            engine,
            events,
            page,
        }
    }

    /// Add an owner block with `panes` content panes one level deeper, bind a
    /// slot to it, and deliver the render event for `raw_args`.
    pub fn render_group(&mut self, slot: &str, raw_args: &str, panes: usize) -> (BlockId, GroupId) {
        let owner = self
            .tree
            .insert(Some(self.page), BlockNode::new(1, "tabs owner"))
            .unwrap();
        for i in 0..panes {
            self.tree
                .insert(Some(owner), BlockNode::new(2, format!("pane {i}")))
                .unwrap();
        }
        let slot = SlotId::from(slot);
        self.tree.bind_slot(slot.clone(), owner);
        self.engine
            .on_render_slot(&mut self.tree, &slot, raw_args)
            .unwrap();
        (owner, GroupId::from_owner(owner))
    }

    pub fn pane_visibility(&self, owner: BlockId) -> Vec<bool> {
        self.tree
            .panes_under(owner, 1)
            .into_iter()
            .map(|pane| self.tree.node(pane).unwrap().visible)
            .collect()
    }
}
