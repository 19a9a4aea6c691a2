//! # TabsEngine - Host Callback Dispatch
//!
//! [`TabsEngine`] is the service object constructed once at start-up and
//! handed every host callback: render-slot events, tree-mutation
//! notifications, global change notifications, and user input. It owns the
//! registry, the config, the render surface, the observation list, and the
//! outbound event channel.
//!
//! ## Observation lifecycle
//!
//! Each render event arms exactly one observation for its group, scoped to the
//! render-site block's subtree (the whole document for reference copies). When
//! the host dispatches a mutation notification that falls inside an armed
//! observation's scope, the engine detaches the observation first and then
//! runs one reconciliation pass. Detaching before the pass means the pass's
//! own attribute toggles can never re-trigger it, so self-triggering cannot
//! recurse; the next render event re-arms an identically-scoped observation
//! from scratch.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::mpsc::channel;
//! use tabstrip_core::{
//!     config::TabsConfig,
//!     engine::{MutationScope, TabsEngine},
//!     event::EngineEvent,
//!     properties::SlotId,
//!     tree::BlockTree,
//! };
//!
//! # fn main() -> Result<(), tabstrip_core::TabstripError> {
//! let (tx, rx) = channel();
//! let mut engine = TabsEngine::new(TabsConfig::default(), tx);
//! let mut tree = BlockTree::default();
//!
//! // Host dispatches callbacks one at a time; they never interleave.
//! let slot = SlotId::from("slot-0");
//! engine.on_render_slot(&mut tree, &slot, "tabs, Setup | Usage")?;
//! engine.on_tree_mutation(&mut tree, &MutationScope::Document);
//! engine.on_global_change(&mut tree)?;
//!
//! // Engine output arrives on the channel for the host to apply.
//! for event in rx.try_iter() {
//!     match event {
//!         EngineEvent::EditRequested(block) => println!("open editor on {block}"),
//!         other => println!("{other}"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::sync::mpsc::Sender;

use crate::{
    actions::{self, Action},
    collector,
    config::TabsConfig,
    error::TabstripError,
    event::EngineEvent,
    properties::{BlockId, GroupId, SlotId},
    reconcile::{run_pass, TabGroup},
    registry::TabRegistry,
    render::{parse_tab_titles, HeaderRequest, RenderSurface, StripSurface},
    resolve::resolve_slot,
    tree::BlockTree,
};

/// Scope of a tree-mutation notification, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationScope {
    /// A change anywhere in the document.
    Document,
    /// A change within the subtree rooted at this block.
    Subtree(BlockId),
}

/// The tab-state synchronization engine. See the module docs for the callback
/// contract.
pub struct TabsEngine {
    config: TabsConfig,
    registry: TabRegistry,
    surface: Box<dyn RenderSurface>,
    observations: Vec<TabGroup>,
    events: Sender<EngineEvent>,
}

impl TabsEngine {
    pub fn new(config: TabsConfig, events: Sender<EngineEvent>) -> Self {
        TabsEngine {
            config,
            registry: TabRegistry::default(),
            surface: Box::new(StripSurface::new()),
            observations: Vec::new(),
            events,
        }
    }

    /// Replace the built-in strip surface, e.g. with one backed by real
    /// layout measurement.
    pub fn with_surface(mut self, surface: Box<dyn RenderSurface>) -> Self {
        self.surface = surface;
        self
    }

    pub fn config(&self) -> &TabsConfig {
        &self.config
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    /// Currently armed observations, in registration order.
    pub fn observations(&self) -> &[TabGroup] {
        &self.observations
    }

    /// Render trigger: a macro rendered into `slot` with the raw argument
    /// string. Only the configured macro identifier is handled; malformed
    /// input and unresolvable anchors skip the render silently, since this is
    /// a best-effort UI affordance.
    pub fn on_render_slot(
        &mut self,
        tree: &mut BlockTree,
        slot: &SlotId,
        raw_args: &str,
    ) -> Result<(), TabstripError> {
        let Some((macro_name, _)) = raw_args.split_once(',') else {
            // Fewer than the minimum macro arguments.
            return Ok(());
        };
        if macro_name.trim() != self.config.macro_name {
            return Ok(());
        }
        let titles = parse_tab_titles(raw_args);
        if titles.is_empty() {
            tracing::debug!("skipping render for {slot}: no usable tab titles");
            return Ok(());
        }
        let Some(anchor) = resolve_slot(tree, slot) else {
            tracing::debug!("skipping render for {slot}: no anchor block");
            return Ok(());
        };
        let Some(host_block) = tree.slot_block(slot) else {
            return Ok(());
        };
        let Some(level) = tree.node(host_block).map(|node| node.level) else {
            return Ok(());
        };

        let container = GroupId::from_owner(anchor.owner);
        let request = HeaderRequest {
            container: container.clone(),
            slot: slot.clone(),
            owner: anchor.owner,
            host_block,
            level,
            titles,
        };
        self.surface.mount_header(tree, &request)?;
        self.events
            .send(EngineEvent::HeaderMounted(container.clone()))?;

        // One registration per render, consumed by the next mutation batch.
        // Re-rendering replaces any stale registration for the same group.
        self.observations.retain(|group| group.id != container);
        self.observations.push(TabGroup {
            id: container,
            owner: anchor.owner,
            host_block,
            level,
            reference: anchor.reference,
        });
        Ok(())
    }

    /// Tree mutation feed: run one reconciliation pass for every armed
    /// observation whose scope covers the mutation, detaching each before its
    /// pass so the pass's own writes cannot re-trigger it.
    pub fn on_tree_mutation(&mut self, tree: &mut BlockTree, scope: &MutationScope) {
        let mut fired = Vec::new();
        self.observations.retain(|group| {
            let hit = match scope {
                MutationScope::Document => true,
                MutationScope::Subtree(root) => {
                    group.reference || tree.is_within(*root, group.host_block)
                }
            };
            if hit {
                fired.push(group.clone());
            }
            !hit
        });
        for group in fired {
            if run_pass(tree, &group, &self.registry, &self.config).is_none() {
                tracing::debug!("reconciliation pass aborted for {}", group.id);
            }
        }
    }

    /// Global change feed: sweep the registry for orphaned groups.
    pub fn on_global_change(&mut self, tree: &mut BlockTree) -> Result<(), TabstripError> {
        collector::sweep(tree, &self.registry, &self.events)
    }

    /// User input events: a named action with string-valued parameters.
    /// Unknown or malformed gestures are ignored.
    pub fn on_action(
        &mut self,
        tree: &mut BlockTree,
        name: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<(), TabstripError> {
        let Some(action) = Action::from_params(name, params) else {
            tracing::debug!("ignoring unknown or malformed action {name:?}");
            return Ok(());
        };
        self.dispatch(tree, action)
    }

    /// Apply an already-parsed action.
    pub fn dispatch(&mut self, tree: &mut BlockTree, action: Action) -> Result<(), TabstripError> {
        match action {
            Action::SelectTab {
                group,
                index,
                level,
            } => {
                if actions::select_tab(tree, &self.registry, &group, index, level).is_none() {
                    tracing::debug!("tab selection ignored for {group}");
                }
                Ok(())
            }
            Action::ArrowScroll { group, direction } => {
                if actions::arrow_scroll(tree, &group, direction, self.config.scroll_step).is_none()
                {
                    tracing::debug!("arrow scroll ignored for {group}");
                }
                Ok(())
            }
            Action::EditBlock { target } => actions::edit_block(&self.events, &target),
        }
    }
}
