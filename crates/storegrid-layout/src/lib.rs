#![forbid(unsafe_code)]

//! Ad-interleaved product grid layout.
//!
//! Listing pages (category, collection, search) render their products through
//! [`GridLayout`], which merges up to two promotional tiles into the product
//! sequence at viewport-dependent positions:
//!
//! - [`GridLayout`] - the layout engine, configured per render pass
//! - [`LayoutSlot`] - one renderable grid cell, product or ad
//! - [`AdPositions`] - the hand-tuned insertion constants
//! - [`pager`] - page-window math for the paginated listings the grid consumes
//!
//! The engine is pure and total: it never fails, never reorders products, and
//! grids with fewer than six items are passed through untouched.
//!
//! # Example
//!
//! ```rust
//! use storegrid_layout::{AdKind, GridLayout, LayoutSlot};
//!
//! let items: Vec<u32> = (1..=12).collect();
//! let slots = GridLayout::new().wide(true).compute(items);
//!
//! assert_eq!(slots.len(), 14); // 12 products + 2 ads
//! assert_eq!(slots[3], LayoutSlot::Ad(AdKind::First));
//! assert_eq!(slots[8], LayoutSlot::Ad(AdKind::Second));
//! ```

pub mod pager;

pub use pager::PageWindow;
pub use storegrid_core::viewport::{ColumnBreakpoints, Columns};

/// Which of the two promotional tiles a slot carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdKind {
    /// The early tile, placed so it opens the second row.
    First,
    /// The mid-to-late tile.
    Second,
}

impl AdKind {
    /// Short label for display and logging.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AdKind::First => "ad1",
            AdKind::Second => "ad2",
        }
    }
}

impl std::fmt::Display for AdKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One renderable cell of the product grid.
///
/// `Ad` slots render as wide multi-column promotional tiles, `Product` slots
/// as standard product tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutSlot<T> {
    /// A standard product tile.
    Product(T),
    /// A promotional tile.
    Ad(AdKind),
}

impl<T> LayoutSlot<T> {
    /// Whether this slot is a promotional tile.
    #[must_use]
    pub const fn is_ad(&self) -> bool {
        matches!(self, LayoutSlot::Ad(_))
    }

    /// Whether this slot is a product tile.
    #[must_use]
    pub const fn is_product(&self) -> bool {
        matches!(self, LayoutSlot::Product(_))
    }

    /// The product carried by this slot, if any.
    #[must_use]
    pub const fn product(&self) -> Option<&T> {
        match self {
            LayoutSlot::Product(item) => Some(item),
            LayoutSlot::Ad(_) => None,
        }
    }

    /// Consume the slot, returning the product if it carried one.
    #[must_use]
    pub fn into_product(self) -> Option<T> {
        match self {
            LayoutSlot::Product(item) => Some(item),
            LayoutSlot::Ad(_) => None,
        }
    }
}

/// Iterate the products of a slot sequence, ads skipped, order preserved.
pub fn products<T>(slots: &[LayoutSlot<T>]) -> impl Iterator<Item = &T> {
    slots.iter().filter_map(LayoutSlot::product)
}

/// Insertion constants for the two promotional tiles.
///
/// The indices are hand-tuned UX values, not derived: the first tile lands at
/// output position 3 on wide (3+ column) grids and 2 on narrow ones so it
/// always opens the second row; the second tile lands at 8 / 5 on long lists
/// and near the end of short ones. Treat them as configuration to carry, not
/// numbers to recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdPositions {
    /// First-ad output index on wide grids.
    pub first_wide: usize,
    /// First-ad output index on narrow grids.
    pub first_narrow: usize,
    /// Second-ad output index on wide grids, long lists only.
    pub second_wide: usize,
    /// Second-ad output index on narrow grids, long lists only.
    pub second_narrow: usize,
    /// Minimum item count before any ad is shown.
    pub min_items: usize,
    /// Item counts above this use the fixed second-ad index; at or below it
    /// the second ad falls near the end of the list instead.
    pub long_list: usize,
}

impl AdPositions {
    /// Production constants: first at 3/2, second at 8/5, ads from 6 items,
    /// fixed second index above 10 items.
    pub const DEFAULT: Self = Self {
        first_wide: 3,
        first_narrow: 2,
        second_wide: 8,
        second_narrow: 5,
        min_items: 6,
        long_list: 10,
    };

    /// Create positions with explicit indices.
    ///
    /// Each second index is sanitized to land strictly after its first index.
    /// Thresholds keep their [`DEFAULT`](Self::DEFAULT) values.
    #[must_use]
    pub const fn new(
        first_wide: usize,
        first_narrow: usize,
        second_wide: usize,
        second_narrow: usize,
    ) -> Self {
        let second_wide = if second_wide <= first_wide {
            first_wide + 1
        } else {
            second_wide
        };
        let second_narrow = if second_narrow <= first_narrow {
            first_narrow + 1
        } else {
            second_narrow
        };
        Self {
            first_wide,
            first_narrow,
            second_wide,
            second_narrow,
            min_items: Self::DEFAULT.min_items,
            long_list: Self::DEFAULT.long_list,
        }
    }

    /// First-ad output index for the given viewport regime.
    #[inline]
    #[must_use]
    pub const fn first_index(&self, wide: bool) -> usize {
        if wide { self.first_wide } else { self.first_narrow }
    }

    /// Second-ad output index for the given regime and item count.
    ///
    /// Long lists use the fixed index; shorter lists place the ad at
    /// `max(len - 1, first + 1)` so it falls near the end without colliding
    /// with or preceding the first ad.
    #[inline]
    #[must_use]
    pub const fn second_index(&self, wide: bool, len: usize) -> usize {
        if len > self.long_list {
            if wide { self.second_wide } else { self.second_narrow }
        } else {
            let near_end = len.saturating_sub(1);
            let floor = self.first_index(wide) + 1;
            if near_end > floor { near_end } else { floor }
        }
    }
}

impl Default for AdPositions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The ad-interleaved grid layout engine.
///
/// Configured fresh on every render pass (the computation is cheap and has
/// no state worth caching across passes) and consumed via
/// [`compute`](Self::compute).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    positions: AdPositions,
    wide: bool,
}

impl GridLayout {
    /// Create a layout for a narrow (1-2 column) grid with default positions.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: AdPositions::DEFAULT,
            wide: false,
        }
    }

    /// Set whether the grid is wide (3+ columns).
    #[must_use]
    pub const fn wide(mut self, wide: bool) -> Self {
        self.wide = wide;
        self
    }

    /// Set the ad insertion positions.
    #[must_use]
    pub const fn positions(mut self, positions: AdPositions) -> Self {
        self.positions = positions;
        self
    }

    /// Create a layout for an explicit column tier.
    #[must_use]
    pub const fn for_columns(columns: Columns) -> Self {
        Self::new().wide(columns.is_wide())
    }

    /// Create a layout for a raw viewport width, classified with the default
    /// [`ColumnBreakpoints`].
    #[must_use]
    pub const fn for_width(width: u16) -> Self {
        Self::for_columns(ColumnBreakpoints::DEFAULT.classify_width(width))
    }

    /// Whether this layout treats the grid as wide.
    #[must_use]
    pub const fn is_wide(&self) -> bool {
        self.wide
    }

    /// Merge promotional tiles into `items`, preserving product order.
    ///
    /// Stripping the `Ad` slots from the output always yields `items`
    /// unchanged. Fewer than [`AdPositions::min_items`] items come back as
    /// plain product slots; otherwise exactly one [`AdKind::First`] and one
    /// [`AdKind::Second`] tile are inserted at the configured indices.
    pub fn compute<T>(&self, items: Vec<T>) -> Vec<LayoutSlot<T>> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "grid_layout",
            items = items.len(),
            wide = self.wide
        )
        .entered();

        let len = items.len();
        if len == 0 {
            return Vec::new();
        }
        if len < self.positions.min_items {
            return items.into_iter().map(LayoutSlot::Product).collect();
        }

        let first_index = self.positions.first_index(self.wide);
        let second_index = self.positions.second_index(self.wide, len);

        let mut slots = Vec::with_capacity(len + 2);
        let mut remaining = items.into_iter();
        let mut next = remaining.next();
        let mut first_placed = false;
        let mut second_placed = false;
        let mut position = 0usize;

        // Single merge walk over output positions. The position counter
        // strictly advances and each ad is emitted at most once, so the walk
        // ends after at most len + max(first, second) + 2 steps.
        loop {
            if position == first_index && !first_placed {
                slots.push(LayoutSlot::Ad(AdKind::First));
                first_placed = true;
            } else if position == second_index && !second_placed {
                slots.push(LayoutSlot::Ad(AdKind::Second));
                second_placed = true;
                if next.is_none() {
                    break;
                }
            } else if let Some(item) = next.take() {
                slots.push(LayoutSlot::Product(item));
                next = remaining.next();
            }
            position += 1;
            if next.is_none() && first_placed && second_placed {
                break;
            }
        }

        slots
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// Interleave with default positions; shorthand for one-off call sites.
pub fn interleave<T>(items: Vec<T>, wide: bool) -> Vec<LayoutSlot<T>> {
    GridLayout::new().wide(wide).compute(items)
}
