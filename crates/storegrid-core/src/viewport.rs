#![forbid(unsafe_code)]

//! Viewport width to grid column classification.
//!
//! The product grid gains columns as the viewport widens. Layout decisions
//! downstream only care about the column count (and in particular whether the
//! grid is *wide*, meaning 3 or more columns), never about raw pixel widths,
//! so classification happens once at the edge.

/// Grid column tiers, ordered from narrowest to widest.
///
/// | Columns | Default Min Width | Typical Use            |
/// |---------|-------------------|------------------------|
/// | `One`   | < 640 px          | Phones, portrait       |
/// | `Two`   | 640–1007 px       | Phones landscape, tablets |
/// | `Three` | 1008–1279 px      | Laptops                |
/// | `Four`  | 1280+ px          | Desktop and wider      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Columns {
    /// Single-column stacked grid.
    One,
    /// Two-column grid.
    Two,
    /// Three-column grid.
    Three,
    /// Four-column grid.
    Four,
}

impl Columns {
    /// All column tiers in ascending order.
    pub const ALL: [Columns; 4] = [Columns::One, Columns::Two, Columns::Three, Columns::Four];

    /// Number of columns in this tier.
    #[must_use]
    pub const fn count(self) -> u16 {
        match self {
            Columns::One => 1,
            Columns::Two => 2,
            Columns::Three => 3,
            Columns::Four => 4,
        }
    }

    /// Whether this tier is a wide grid (3 or more columns).
    ///
    /// Wide grids place promotional tiles at different indices than narrow
    /// ones so the tile always starts a fresh row.
    #[must_use]
    pub const fn is_wide(self) -> bool {
        matches!(self, Columns::Three | Columns::Four)
    }

    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Columns::One => "1col",
            Columns::Two => "2col",
            Columns::Three => "3col",
            Columns::Four => "4col",
        }
    }
}

impl std::fmt::Display for Columns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Width thresholds for column classification.
///
/// Each field is the minimum viewport width (in pixels) at which the grid
/// gains that column. `One` implicitly starts at width 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnBreakpoints {
    /// Minimum width for a two-column grid.
    pub two: u16,
    /// Minimum width for a three-column grid.
    pub three: u16,
    /// Minimum width for a four-column grid.
    pub four: u16,
}

impl ColumnBreakpoints {
    /// Default thresholds: 640 / 1008 / 1280 px.
    pub const DEFAULT: Self = Self {
        two: 640,
        three: 1008,
        four: 1280,
    };

    /// Create breakpoints with explicit thresholds.
    ///
    /// Values are sanitized to be monotonically non-decreasing.
    #[must_use]
    pub const fn new(two: u16, three: u16, four: u16) -> Self {
        let three = if three < two { two } else { three };
        let four = if four < three { three } else { four };
        Self { two, three, four }
    }

    /// Classify a viewport width into a column tier.
    #[inline]
    #[must_use]
    pub const fn classify_width(self, width: u16) -> Columns {
        if width >= self.four {
            Columns::Four
        } else if width >= self.three {
            Columns::Three
        } else if width >= self.two {
            Columns::Two
        } else {
            Columns::One
        }
    }

    /// Whether a viewport width yields a wide (3+ column) grid.
    #[inline]
    #[must_use]
    pub const fn is_wide(self, width: u16) -> bool {
        self.classify_width(width).is_wide()
    }

    /// Get the minimum width threshold for a given column tier.
    #[must_use]
    pub const fn threshold(self, columns: Columns) -> u16 {
        match columns {
            Columns::One => 0,
            Columns::Two => self.two,
            Columns::Three => self.three,
            Columns::Four => self.four,
        }
    }
}

impl Default for ColumnBreakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}
