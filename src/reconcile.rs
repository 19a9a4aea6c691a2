//! The reconciler: one convergence pass per trigger.
//!
//! Given a group whose header strip is already mounted, a pass recomputes
//! overflow-arrow visibility, content-pane visibility, and active-tab
//! highlighting from currently measured state. Nothing is cached across
//! passes; running a pass twice with no intervening tree change produces the
//! same visible state as running it once.
//!
//! A pass aborts silently when any required element is missing. No retry is
//! scheduled; the next externally-triggered mutation re-invokes it.

use serde::{Deserialize, Serialize};

use crate::{
    config::TabsConfig,
    properties::{BlockId, GroupId},
    registry::TabRegistry,
    tree::BlockTree,
};

/// Descriptor for one rendered tab strip, captured at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabGroup {
    pub id: GroupId,
    /// Canonical owner block whose deeper-level descendants are the panes.
    pub owner: BlockId,
    /// Block the header physically renders inside; equals `owner` except for
    /// reference copies.
    pub host_block: BlockId,
    /// Nesting depth recorded at the render site.
    pub level: u32,
    /// Reference groups observe the whole document, not one subtree.
    pub reference: bool,
}

/// Run one reconciliation pass for `group`. Returns `None` when a required
/// element is missing, leaving whatever was already applied in place; every
/// step toggles independent attributes, so an aborted pass never leaves an
/// invalid intermediate state.
pub(crate) fn run_pass(
    tree: &mut BlockTree,
    group: &TabGroup,
    registry: &TabRegistry,
    config: &TabsConfig,
) -> Option<()> {
    let (tab_count, tabs_width) = {
        let strip = tree.strip(&group.id)?;
        (strip.tabs.len(), strip.tabs_width())
    };

    // Available width comes from the nearest content-width ancestor of the
    // render site, minus the margin reserved for the navigation arrows.
    let content_width = tree
        .content_width_near(group.host_block)
        .unwrap_or(config.content_width);
    let max_width = content_width - config.arrow_reserve;

    let panes = tree.panes_under(group.owner, group.level);
    let active = registry.get(&group.id);

    {
        let strip = tree.strip_mut(&group.id)?;
        strip.max_width = max_width;
        strip.arrows_visible = tabs_width > max_width;
        for (i, tab) in strip.tabs.iter_mut().enumerate() {
            tab.active = i == active;
            if i == active {
                // Keeps the registry authoritative even when the active tab
                // was set by external means (a just-recreated group defaults
                // to 0 here, for example).
                registry.set(&group.id, i);
            }
        }
    }

    if panes.len() > tab_count {
        // More panes than tabs is not a clean tab layout; show everything
        // rather than guess a mapping.
        tracing::debug!(
            "group {} has {} panes for {} tabs, showing all panes",
            group.id,
            panes.len(),
            tab_count
        );
        for pane in panes {
            tree.set_visible(pane, true)?;
        }
    } else {
        for (i, pane) in panes.into_iter().enumerate() {
            tree.set_visible(pane, i == active)?;
        }
    }
    Some(())
}
