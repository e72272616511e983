use core::cmp::Ordering;

/// Z-ordering key for draw items. Higher values appear on top.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Frame / background silhouette.
    pub const BACKGROUND: ZIndex = ZIndex(0);
    /// Charge-level fill.
    pub const FILL: ZIndex = ZIndex(1);
    /// Bolt, percentage and warning overlays.
    pub const OVERLAY: ZIndex = ZIndex(2);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

/// Stable sort key for draw items.
///
/// Ordering rules:
/// 1) `z`: ascending (back-to-front)
/// 2) `order`: ascending (insertion order for equal z)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.z.cmp(&other.z).then(self.order.cmp(&other.order))
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
