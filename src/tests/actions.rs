//! Tests for user gesture handling

use std::collections::BTreeMap;
use std::sync::mpsc::channel;

use test_log::test;

use super::helpers::{init_logging, mount_tabs, pane_visibility, tab_activity};
use crate::{
    actions::{Action, ACTION_ARROW_SCROLL, ACTION_EDIT_BLOCK, ACTION_SELECT_TAB},
    config::TabsConfig,
    engine::TabsEngine,
    event::EngineEvent,
    properties::{BlockId, BlockKind, BlockNode, GroupId, ScrollDirection, SlotId},
    tree::BlockTree,
};

fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_action_parsing() {
    init_logging();
    let owner = BlockId::new();
    let group = GroupId::from_owner(owner);

    let action = Action::from_params(
        ACTION_SELECT_TAB,
        &params(&[("group", group.as_str()), ("index", "1"), ("level", "1")]),
    );
    assert_eq!(
        action,
        Some(Action::SelectTab {
            group: group.clone(),
            index: 1,
            level: 1
        })
    );

    let action = Action::from_params(
        ACTION_ARROW_SCROLL,
        &params(&[("group", group.as_str()), ("direction", "right")]),
    );
    assert_eq!(
        action,
        Some(Action::ArrowScroll {
            group: group.clone(),
            direction: ScrollDirection::Right
        })
    );

    let action = Action::from_params(ACTION_EDIT_BLOCK, &params(&[("target", group.as_str())]));
    assert_eq!(
        action,
        Some(Action::EditBlock {
            target: group.as_str().to_string()
        })
    );

    // Unknown names and missing parameters are ignored, not errors.
    assert_eq!(Action::from_params("rename-tab", &params(&[])), None);
    assert_eq!(
        Action::from_params(ACTION_SELECT_TAB, &params(&[("index", "1")])),
        None
    );
    assert_eq!(
        Action::from_params(
            ACTION_SELECT_TAB,
            &params(&[("group", "g"), ("index", "one"), ("level", "1")])
        ),
        None
    );
}

#[test]
fn test_select_tab_toggles_panes_and_registry() {
    let mut fixture = mount_tabs(&["A", "B", "C"], 3);

    fixture
        .engine
        .on_action(
            &mut fixture.tree,
            ACTION_SELECT_TAB,
            &params(&[
                ("group", fixture.group.as_str()),
                ("index", "1"),
                ("level", "1"),
            ]),
        )
        .unwrap();

    assert_eq!(
        pane_visibility(&fixture.tree, fixture.owner, 1),
        vec![false, true, false]
    );
    assert_eq!(
        tab_activity(&fixture.tree, &fixture.group),
        vec![false, true, false]
    );
    assert_eq!(fixture.engine.registry().get(&fixture.group), 1);
}

#[test]
fn test_select_tab_out_of_range_hides_mapped_panes() {
    let mut fixture = mount_tabs(&["A", "B", "C"], 3);

    fixture
        .engine
        .on_action(
            &mut fixture.tree,
            ACTION_SELECT_TAB,
            &params(&[
                ("group", fixture.group.as_str()),
                ("index", "9"),
                ("level", "1"),
            ]),
        )
        .unwrap();

    assert_eq!(
        pane_visibility(&fixture.tree, fixture.owner, 1),
        vec![false; 3]
    );
    // Registry untouched: the write-back only happens for a visited tab.
    assert!(!fixture.engine.registry().contains(&fixture.group));
}

#[test]
fn test_select_tab_on_reference_copy_updates_original_owner() {
    init_logging();
    let mut tree = BlockTree::default();
    let page = tree.insert(None, BlockNode::new(0, "page")).unwrap();
    let original = tree
        .insert(Some(page), BlockNode::new(1, "original"))
        .unwrap();
    for i in 0..2 {
        tree.insert(Some(original), BlockNode::new(2, format!("pane {i}")))
            .unwrap();
    }
    // The macro renders on a mirror of the original, elsewhere in the page.
    let mirror = tree
        .insert(
            Some(page),
            BlockNode::new(1, "mirror").with_kind(BlockKind::Reference(Some(original))),
        )
        .unwrap();
    let slot = SlotId::from("s");
    tree.bind_slot(slot.clone(), mirror);

    let (tx, _rx) = channel();
    let mut engine = TabsEngine::new(TabsConfig::default(), tx);
    engine.on_render_slot(&mut tree, &slot, "tabs, A|B").unwrap();

    // The group is keyed by the original owner, never the mirror.
    let group = GroupId::from_owner(original);
    assert!(tree.strip(&group).is_some());

    engine
        .on_action(
            &mut tree,
            ACTION_SELECT_TAB,
            &params(&[("group", group.as_str()), ("index", "1"), ("level", "1")]),
        )
        .unwrap();

    assert_eq!(pane_visibility(&tree, original, 1), vec![false, true]);
    assert_eq!(engine.registry().get(&group), 1);
}

#[test]
fn test_select_tab_missing_strip_is_ignored() {
    let mut fixture = mount_tabs(&["A", "B"], 2);
    fixture.tree.unmount_strip(&fixture.group);

    fixture
        .engine
        .on_action(
            &mut fixture.tree,
            ACTION_SELECT_TAB,
            &params(&[
                ("group", fixture.group.as_str()),
                ("index", "1"),
                ("level", "1"),
            ]),
        )
        .unwrap();

    assert_eq!(
        pane_visibility(&fixture.tree, fixture.owner, 1),
        vec![true, true]
    );
}

#[test]
fn test_arrow_scroll_steps_and_clamps() {
    let mut fixture = mount_tabs(&["Wide title A", "Wide title B", "Wide title C"], 3);
    // Tight strip so real overflow exists: 3 * 224 = 672 of tabs.
    fixture.tree.strip_mut(&fixture.group).unwrap().max_width = 300.0;
    let max_scroll = 672.0 - 300.0;

    let scroll = |f: &super::helpers::Fixture| f.tree.strip(&f.group).unwrap().scroll_x;
    assert_eq!(scroll(&fixture), 0.0);

    // Left from the origin clamps at 0.
    fixture
        .engine
        .on_action(
            &mut fixture.tree,
            ACTION_ARROW_SCROLL,
            &params(&[("group", fixture.group.as_str()), ("direction", "left")]),
        )
        .unwrap();
    assert_eq!(scroll(&fixture), 0.0);

    // Each right click advances one fixed step.
    for _ in 0..2 {
        fixture
            .engine
            .on_action(
                &mut fixture.tree,
                ACTION_ARROW_SCROLL,
                &params(&[("group", fixture.group.as_str()), ("direction", "right")]),
            )
            .unwrap();
    }
    assert_eq!(scroll(&fixture), 360.0);

    // And the far end clamps at the measurable overflow.
    fixture
        .engine
        .on_action(
            &mut fixture.tree,
            ACTION_ARROW_SCROLL,
            &params(&[("group", fixture.group.as_str()), ("direction", "right")]),
        )
        .unwrap();
    assert_eq!(scroll(&fixture), max_scroll);

    // Scrolling never touches the registry.
    assert!(!fixture.engine.registry().contains(&fixture.group));
}

#[test]
fn test_edit_block_emits_edit_request() {
    let mut fixture = mount_tabs(&["A"], 1);

    // Container-id target.
    fixture
        .engine
        .on_action(
            &mut fixture.tree,
            ACTION_EDIT_BLOCK,
            &params(&[("target", fixture.group.as_str())]),
        )
        .unwrap();
    // Bare block-id target.
    let owner_str = fixture.owner.to_string();
    fixture
        .engine
        .on_action(
            &mut fixture.tree,
            ACTION_EDIT_BLOCK,
            &params(&[("target", owner_str.as_str())]),
        )
        .unwrap();
    // Unparseable target is dropped silently.
    fixture
        .engine
        .on_action(
            &mut fixture.tree,
            ACTION_EDIT_BLOCK,
            &params(&[("target", "not-a-block")]),
        )
        .unwrap();

    let requested: Vec<EngineEvent> = fixture
        .events
        .try_iter()
        .filter(|event| matches!(event, EngineEvent::EditRequested(_)))
        .collect();
    assert_eq!(
        requested,
        vec![
            EngineEvent::EditRequested(fixture.owner),
            EngineEvent::EditRequested(fixture.owner),
        ]
    );
}
