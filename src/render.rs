//! Render-surface seam: macro argument parsing and header mounting.
//!
//! Template markup and CSS belong to the host; this module covers the narrow
//! interface to them. [`parse_tab_titles`] turns the raw macro string into the
//! ordered title sequence, and [`RenderSurface`] is where a header injection
//! request leaves the engine. [`StripSurface`] is the built-in surface that
//! mounts a [`TabStrip`] overlay directly into the tree, measuring tab widths
//! with a pluggable measurer (hosts with real layout substitute their own).

use crate::{
    error::TabstripError,
    properties::{BlockId, GroupId, SlotId, TabEl, TabStrip, DEFAULT_STRIP_WIDTH},
    tree::BlockTree,
};

/// Parse tab titles out of a raw macro string: everything after the first
/// comma, pipe-separated, trimmed, empty entries dropped. Order defines tab
/// index.
///
/// ```rust
/// use tabstrip_core::render::parse_tab_titles;
///
/// assert_eq!(parse_tab_titles("tabs,  A |B|  |C"), vec!["A", "B", "C"]);
/// assert_eq!(parse_tab_titles("tabs"), Vec::<String>::new());
/// ```
pub fn parse_tab_titles(raw: &str) -> Vec<String> {
    let Some((_, titles)) = raw.split_once(',') else {
        return Vec::new();
    };
    titles
        .split('|')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_string)
        .collect()
}

/// A header injection request, keyed by a deterministic container id so that
/// re-rendering the same group replaces its strip in place.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderRequest {
    pub container: GroupId,
    pub slot: SlotId,
    /// Canonical owner (already resolved through any reference wrapper).
    pub owner: BlockId,
    /// Block the slot renders inside.
    pub host_block: BlockId,
    /// Nesting depth measured at the render site.
    pub level: u32,
    pub titles: Vec<String>,
}

/// Where header injection requests leave the engine.
pub trait RenderSurface: Send + Sync {
    fn mount_header(
        &self,
        tree: &mut BlockTree,
        request: &HeaderRequest,
    ) -> Result<(), TabstripError>;
}

/// Built-in surface mounting strips straight into the tree.
pub struct StripSurface {
    measure: Box<dyn Fn(&str) -> f32 + Send + Sync>,
}

impl StripSurface {
    pub fn new() -> Self {
        // Stand-in for real text layout: padding plus a fixed advance per
        // character, good enough for overflow decisions in headless hosts.
        StripSurface {
            measure: Box::new(|title| 16.0 * title.chars().count() as f32 + 32.0),
        }
    }

    pub fn with_measure(measure: Box<dyn Fn(&str) -> f32 + Send + Sync>) -> Self {
        StripSurface { measure }
    }
}

impl Default for StripSurface {
    fn default() -> Self {
        StripSurface::new()
    }
}

impl std::fmt::Debug for StripSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("StripSurface").finish_non_exhaustive()
    }
}

impl RenderSurface for StripSurface {
    fn mount_header(
        &self,
        tree: &mut BlockTree,
        request: &HeaderRequest,
    ) -> Result<(), TabstripError> {
        let tabs = request
            .titles
            .iter()
            .map(|title| TabEl::new(title.clone(), (self.measure)(title)))
            .collect();
        tree.mount_strip(TabStrip {
            container: request.container.clone(),
            owner: request.owner,
            host_block: request.host_block,
            level: request.level,
            // Arrows stay hidden and the width stays at its default until the
            // first reconciliation measures real layout.
            max_width: DEFAULT_STRIP_WIDTH,
            scroll_x: 0.0,
            arrows_visible: false,
            tabs,
        });
        Ok(())
    }
}
