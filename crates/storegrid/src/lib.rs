#![forbid(unsafe_code)]

//! Storegrid public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a lightweight
//! prelude for day-to-day usage.
//!
//! # Example
//!
//! ```rust
//! use storegrid::prelude::*;
//!
//! let layout = GridLayout::for_width(1280);
//! let slots = layout.compute((1..=12).collect::<Vec<u32>>());
//! assert_eq!(slots.iter().filter(|s| s.is_ad()).count(), 2);
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use storegrid_core::poll::PollTimer;
pub use storegrid_core::returns::{ReturnStatus, ReturnTransitionError, StepState, TimelineStep};
pub use storegrid_core::source::{CachedSource, Freshness, ItemSource, LoadError, SourceError};
pub use storegrid_core::viewport::{ColumnBreakpoints, Columns};

// --- Layout re-exports -----------------------------------------------------

pub use storegrid_layout::pager::PageWindow;
pub use storegrid_layout::{AdKind, AdPositions, GridLayout, LayoutSlot, interleave, products};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for storegrid consumers.
#[derive(Debug)]
pub enum Error {
    /// An item source failed to load.
    Source(SourceError),
    /// A return request was moved along an illegal edge.
    ReturnTransition(ReturnTransitionError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(err) => write!(f, "{err}"),
            Self::ReturnTransition(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(err) => Some(err),
            Self::ReturnTransition(err) => Some(err),
        }
    }
}

impl From<SourceError> for Error {
    fn from(err: SourceError) -> Self {
        Self::Source(err)
    }
}

impl From<ReturnTransitionError> for Error {
    fn from(err: ReturnTransitionError) -> Self {
        Self::ReturnTransition(err)
    }
}

/// Convenience prelude for listing-page code.
pub mod prelude {
    pub use crate::{
        AdKind, AdPositions, CachedSource, ColumnBreakpoints, Columns, Error, Freshness,
        GridLayout, ItemSource, LayoutSlot, PageWindow, PollTimer, ReturnStatus, StepState,
        TimelineStep, interleave, products,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_wires_layout_and_pagination_together() {
        // A category page: 50 products, 24 per page, desktop viewport.
        let catalog: Vec<u32> = (0..50).collect();
        let window = PageWindow::new(catalog.len(), 24);
        let (start, end) = window.slice_bounds(3);
        let page_items = catalog[start..end].to_vec();

        let slots = GridLayout::for_width(1440).compute(page_items);
        // Last page has 2 items: too small for ads.
        assert_eq!(slots.len(), 2);
        assert!(slots.iter().all(LayoutSlot::is_product));

        let (start, end) = window.slice_bounds(1);
        let slots = GridLayout::for_width(1440).compute(catalog[start..end].to_vec());
        assert_eq!(slots.len(), 26);
    }

    #[test]
    fn errors_convert_into_top_level_error() {
        let transition_err = ReturnStatus::Completed
            .apply(ReturnStatus::Pending)
            .unwrap_err();
        let err: Error = transition_err.into();
        assert!(matches!(err, Error::ReturnTransition(_)));
        assert!(std::error::Error::source(&err).is_some());

        let mut source: CachedSource<u32, _> = CachedSource::new(|| Err("offline".into()));
        let err: Error = source.load().unwrap_err().into();
        assert_eq!(err.to_string(), "item source load failed: offline");
    }
}
