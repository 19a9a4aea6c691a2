//! Core value types: block and group identifiers, block state, and the mounted
//! tab-strip overlay.
//!
//! A [`BlockId`] names one outline block for the lifetime of that block. A
//! [`GroupId`] is derived deterministically from the owning block's identifier
//! (`"block-tabs-" + owner`), so a re-rendered header lands on the same group
//! and the same registry entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TabstripError;

/// Prefix for deterministic header container ids.
pub const GROUP_PREFIX: &str = "block-tabs-";

/// Strip width used at mount time, before the first reconciliation measures
/// the real content width.
pub const DEFAULT_STRIP_WIDTH: f32 = 800.0;

/// Stable identifier of one outline block, assigned by the host.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new() -> Self {
        BlockId(Uuid::new_v4())
    }

    /// Use a [`BlockId::nil`] when a placeholder id is needed and no block
    /// context exists.
    pub fn nil() -> Self {
        BlockId(Uuid::nil())
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BlockId {
    type Err = TabstripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BlockId(Uuid::parse_str(s)?))
    }
}

/// Identifier of one rendered tab strip, stable for the lifetime of its owner
/// block.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupId(String);

impl GroupId {
    pub fn from_owner(owner: BlockId) -> Self {
        GroupId(format!("{GROUP_PREFIX}{owner}"))
    }

    /// The owning block id encoded in this group id, if it parses.
    pub fn owner(&self) -> Option<BlockId> {
        self.0.strip_prefix(GROUP_PREFIX)?.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GroupId {
    fn from(s: &str) -> Self {
        GroupId(s.to_string())
    }
}

impl From<String> for GroupId {
    fn from(s: String) -> Self {
        GroupId(s)
    }
}

/// Opaque host handle into the tree where a macro renders.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotId(String);

impl SlotId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SlotId {
    fn from(s: &str) -> Self {
        SlotId(s.to_string())
    }
}

impl From<String> for SlotId {
    fn from(s: String) -> Self {
        SlotId(s)
    }
}

/// Whether a block is a primary node or a reference (a mirror of another
/// block's content rendered at a different tree location).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BlockKind {
    #[default]
    Primary,
    /// The back-reference to the original block. The host may render a
    /// reference wrapper before annotating it, in which case the target is
    /// absent and resolution fails.
    Reference(Option<BlockId>),
}

/// One outline block as seen by the engine. The host owns creation and
/// deletion; the engine only ever toggles `visible`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockNode {
    pub id: BlockId,
    /// Nesting depth at render time. Content panes of a tab group live one
    /// level deeper than their owner.
    pub level: u32,
    pub text: String,
    pub kind: BlockKind,
    pub visible: bool,
    /// Measured width of the block's content area, when the host has laid it
    /// out.
    pub content_width: Option<f32>,
}

impl BlockNode {
    pub fn new(level: u32, text: impl Into<String>) -> Self {
        BlockNode {
            id: BlockId::new(),
            level,
            text: text.into(),
            kind: BlockKind::Primary,
            visible: true,
            content_width: None,
        }
    }

    pub fn with_kind(mut self, kind: BlockKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_content_width(mut self, width: f32) -> Self {
        self.content_width = Some(width);
        self
    }
}

/// One tab element inside a mounted strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabEl {
    pub title: String,
    /// Natural width as measured by the render surface.
    pub width: f32,
    pub active: bool,
}

impl TabEl {
    pub fn new(title: impl Into<String>, width: f32) -> Self {
        TabEl {
            title: title.into(),
            width,
            active: false,
        }
    }
}

/// The mounted header overlay for one tab group.
///
/// `owner` is always the canonical block (never a reference's own id), while
/// `host_block` is the block the header physically renders inside, which
/// differs from the owner when the strip renders on a reference copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabStrip {
    pub container: GroupId,
    pub owner: BlockId,
    pub host_block: BlockId,
    /// Nesting depth recorded at the render site.
    pub level: u32,
    pub max_width: f32,
    pub scroll_x: f32,
    pub arrows_visible: bool,
    /// Tab order defines tab index; index position is the sole correlation key
    /// between a tab and its content pane.
    pub tabs: Vec<TabEl>,
}

impl TabStrip {
    /// Sum of the natural widths of all tab elements.
    pub fn tabs_width(&self) -> f32 {
        self.tabs.iter().map(|tab| tab.width).sum()
    }
}

/// Direction flag carried by a scroll-arrow click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Left,
    Right,
}

impl FromStr for ScrollDirection {
    type Err = TabstripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(ScrollDirection::Left),
            "right" => Ok(ScrollDirection::Right),
            other => Err(TabstripError::Action(format!(
                "unknown scroll direction '{other}'"
            ))),
        }
    }
}

impl fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScrollDirection::Left => write!(f, "left"),
            ScrollDirection::Right => write!(f, "right"),
        }
    }
}
