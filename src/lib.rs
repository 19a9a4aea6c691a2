//! # tabstrip-core
//!
//! A tab-view synchronization engine for outline documents.
//!
//! tabstrip-core renders a tabbed-view affordance over a host document's outline
//! blocks and keeps the visible tab converged against state that can change out
//! from under it: the user editing the outline, blocks being duplicated as
//! references, blocks being deleted. The host owns the block tree; this engine
//! only reads it through narrow queries and mutates it through idempotent
//! attribute toggles (pane visibility, tab highlighting, arrow visibility).
//!
//! ## Architecture
//!
//! The engine is organized around a small set of components:
//!
//! - **[`tree::BlockTree`]**: read-only queries over the externally-owned block
//!   tree, plus the narrow mutation surface the engine is allowed to touch
//! - **[`resolve`]**: resolves a rendering slot to its canonical owner block,
//!   following reference (mirror) wrappers back to the original
//! - **[`registry::TabRegistry`]**: the one piece of shared mutable state, a
//!   process-wide mapping from group id to active tab index
//! - **[`reconcile`]**: one convergence pass per tree-mutation trigger, scoped
//!   to a group's subtree and detached after each dispatch
//! - **[`actions`]**: user gestures (tab selection, arrow scrolling, edit
//!   requests) that update the registry or pass through to the host
//! - **Orphan collection**: a full-registry sweep on every global change
//!   notification, evicting groups whose header is gone and restoring their
//!   hidden panes
//!
//! All work happens inside host-dispatched callbacks on [`engine::TabsEngine`];
//! callbacks never interleave, so no locking is required beyond the registry's
//! own interior mutability.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::mpsc::channel;
//! use tabstrip_core::{
//!     config::TabsConfig,
//!     engine::{MutationScope, TabsEngine},
//!     properties::{BlockNode, SlotId},
//!     tree::BlockTree,
//! };
//!
//! # fn main() -> Result<(), tabstrip_core::TabstripError> {
//! // The host document: an owner block with two content panes one level deeper.
//! let mut tree = BlockTree::default();
//! let page = tree.insert(None, BlockNode::new(0, "page"))?;
//! let owner = tree.insert(Some(page), BlockNode::new(1, "{{renderer tabs,One|Two}}"))?;
//! tree.insert(Some(owner), BlockNode::new(2, "first pane"))?;
//! tree.insert(Some(owner), BlockNode::new(2, "second pane"))?;
//!
//! // The render slot the host hands us when the macro is rendered.
//! let slot = SlotId::from("slot-0");
//! tree.bind_slot(slot.clone(), owner);
//!
//! let (tx, _rx) = channel();
//! let mut engine = TabsEngine::new(TabsConfig::default(), tx);
//!
//! // A render event mounts the header and arms a scoped observation; the next
//! // mutation notification runs one reconciliation pass and detaches it.
//! engine.on_render_slot(&mut tree, &slot, "tabs, One | Two")?;
//! engine.on_tree_mutation(&mut tree, &MutationScope::Subtree(owner));
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Guide
//!
//! Start with [`engine::TabsEngine`] for the host-facing callbacks, then
//! [`tree::BlockTree`] for the document model. See [`properties`] for the core
//! value types and [`event::EngineEvent`] for what the engine emits back to the
//! host.

pub mod actions;
mod collector;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod properties;
pub mod reconcile;
pub mod registry;
pub mod render;
pub mod resolve;
#[cfg(test)]
mod tests;
pub mod tree;

pub use error::*;
