//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands (filled polygon sets and text runs)
//! - provide deterministic ordering (z-index + insertion order)

mod cmd;
mod key;
mod list;

pub use cmd::{DrawCmd, FillCmd, TextAnchor, TextCmd};
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
