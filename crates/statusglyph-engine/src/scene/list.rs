use crate::paint::Color;
use crate::path::Shape;

use super::{DrawCmd, FillCmd, SortKey, TextAnchor, TextCmd, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for one glyph frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem { key: SortKey::new(z, order), cmd });
        self.sorted_dirty = true;
    }

    /// Records a filled polygon set. Empty shapes are dropped.
    pub fn push_fill(&mut self, z: ZIndex, shape: Shape, color: Color) {
        if shape.is_empty() {
            return;
        }
        self.push(z, DrawCmd::Fill(FillCmd { shape, color }));
    }

    /// Records a centered text run.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        size: f32,
        color: Color,
        anchor: TextAnchor,
    ) {
        self.push(z, DrawCmd::Text(TextCmd { text: text.into(), size, color, anchor }));
    }

    /// Iterates items in paint order (back-to-front).
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}
