//! Shared test utilities for engine testing

use std::sync::mpsc::{channel, Receiver};

use crate::{
    config::TabsConfig,
    engine::TabsEngine,
    event::EngineEvent,
    properties::{BlockId, BlockNode, GroupId, SlotId},
    tree::BlockTree,
};

/// Initialize logging for tests
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// A mounted tab group over a freshly built tree, ready for reconciliation.
pub struct Fixture {
    pub tree: BlockTree,
    pub engine: TabsEngine,
    pub events: Receiver<EngineEvent>,
    pub owner: BlockId,
    pub group: GroupId,
}

/// Build a page with one owner block rendering the tabs macro and `panes`
/// content panes one level deeper, then deliver the render event.
pub fn mount_tabs(titles: &[&str], panes: usize) -> Fixture {
    init_logging();

    let mut tree = BlockTree::default();
    let page = tree.insert(None, BlockNode::new(0, "page")).unwrap();
    let owner = tree
        .insert(Some(page), BlockNode::new(1, "tabs owner"))
        .unwrap();
    for i in 0..panes {
        tree.insert(Some(owner), BlockNode::new(2, format!("pane {i}")))
            .unwrap();
    }

    let slot = SlotId::from("slot-1");
    tree.bind_slot(slot.clone(), owner);

    let (tx, events) = channel();
    let mut engine = TabsEngine::new(TabsConfig::default(), tx);
    let raw = format!("tabs, {}", titles.join("|"));
    engine.on_render_slot(&mut tree, &slot, &raw).unwrap();

    Fixture {
        tree,
        engine,
        events,
        owner,
        group: GroupId::from_owner(owner),
    }
}

/// Visibility of the owner's panes in tree order.
pub fn pane_visibility(tree: &BlockTree, owner: BlockId, level: u32) -> Vec<bool> {
    tree.panes_under(owner, level)
        .into_iter()
        .map(|pane| tree.node(pane).unwrap().visible)
        .collect()
}

/// Active flags of the mounted strip's tabs in order.
pub fn tab_activity(tree: &BlockTree, group: &GroupId) -> Vec<bool> {
    tree.strip(group)
        .unwrap()
        .tabs
        .iter()
        .map(|tab| tab.active)
        .collect()
}
