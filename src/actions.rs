//! User gesture handling: tab selection, arrow scrolling, edit pass-through.
//!
//! Gestures arrive from the host as a named action plus a small set of
//! string-valued parameters. Selection performs its own lightweight
//! reconciliation rather than waiting for the observer, because the click
//! itself does not otherwise mutate the tree.

use std::collections::BTreeMap;
use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

use crate::{
    error::TabstripError,
    event::EngineEvent,
    properties::{GroupId, ScrollDirection},
    registry::TabRegistry,
    resolve::resolve_owner,
    tree::BlockTree,
};

pub const ACTION_SELECT_TAB: &str = "select-tab";
pub const ACTION_ARROW_SCROLL: &str = "arrow-scroll";
pub const ACTION_EDIT_BLOCK: &str = "edit-block";

/// A parsed user gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    SelectTab {
        group: GroupId,
        index: usize,
        level: u32,
    },
    ArrowScroll {
        group: GroupId,
        direction: ScrollDirection,
    },
    EditBlock {
        /// Container id (`block-tabs-...`) or a bare block id.
        target: String,
    },
}

impl Action {
    /// Parse a named action and its parameters. `None` for unknown names or
    /// missing/malformed parameters; gestures are best effort and never error.
    pub fn from_params(name: &str, params: &BTreeMap<String, String>) -> Option<Action> {
        match name {
            ACTION_SELECT_TAB => Some(Action::SelectTab {
                group: GroupId::from(params.get("group")?.as_str()),
                index: params.get("index")?.parse().ok()?,
                level: params.get("level")?.parse().ok()?,
            }),
            ACTION_ARROW_SCROLL => Some(Action::ArrowScroll {
                group: GroupId::from(params.get("group")?.as_str()),
                direction: params.get("direction")?.parse().ok()?,
            }),
            ACTION_EDIT_BLOCK => params
                .get("target")
                .cloned()
                .map(|target| Action::EditBlock { target }),
            _ => None,
        }
    }
}

/// Select a tab: re-resolve reference ownership (the click may land on a
/// reference copy rendered elsewhere), then directly toggle pane visibility
/// and tab highlighting and update the registry. `None` aborts silently,
/// including the unresolvable-reference case.
pub(crate) fn select_tab(
    tree: &mut BlockTree,
    registry: &TabRegistry,
    group: &GroupId,
    index: usize,
    level: u32,
) -> Option<()> {
    let host_block = tree.strip(group)?.host_block;
    let anchor = resolve_owner(tree, host_block)?;
    let group = GroupId::from_owner(anchor.owner);
    if !tree.contains(anchor.owner) {
        return None;
    }

    let panes = tree.panes_under(anchor.owner, level);
    let tab_count = {
        let strip = tree.strip_mut(&group)?;
        for (i, tab) in strip.tabs.iter_mut().enumerate() {
            tab.active = i == index;
            if i == index {
                registry.set(&group, index);
            }
        }
        strip.tabs.len()
    };

    for (i, pane) in panes.into_iter().enumerate() {
        // Only panes with a corresponding tab are toggled here; anything
        // beyond the tab count is left to the reconciler's fallback policy.
        if i < tab_count {
            tree.set_visible(pane, i == index)?;
        }
    }
    Some(())
}

/// Translate an arrow click into a fixed offset of the tab strip, clamped to
/// the measurable overflow range. No registry mutation.
pub(crate) fn arrow_scroll(
    tree: &mut BlockTree,
    group: &GroupId,
    direction: ScrollDirection,
    step: f32,
) -> Option<()> {
    let strip = tree.strip_mut(group)?;
    let max_scroll = (strip.tabs_width() - strip.max_width).max(0.0);
    let delta = match direction {
        ScrollDirection::Left => -step,
        ScrollDirection::Right => step,
    };
    strip.scroll_x = (strip.scroll_x + delta).clamp(0.0, max_scroll);
    Some(())
}

/// Ask the host to open a block for editing. The target may be a header
/// container id or a bare block id; unparseable targets are ignored.
pub(crate) fn edit_block(events: &Sender<EngineEvent>, target: &str) -> Result<(), TabstripError> {
    let owner = GroupId::from(target)
        .owner()
        .or_else(|| target.parse().ok());
    let Some(owner) = owner else {
        tracing::debug!("ignoring edit request with unparseable target {target:?}");
        return Ok(());
    };
    events.send(EngineEvent::EditRequested(owner))?;
    Ok(())
}
