#![forbid(unsafe_code)]

//! Foundational types for the storegrid storefront grid system.
//!
//! This crate provides the render-agnostic building blocks consumed by
//! `storegrid-layout`:
//!
//! - [`viewport`] - viewport width to grid column classification
//! - [`source`] - injected item-source abstraction with a freshness contract
//! - [`poll`] - repeating poll timer with explicit start/stop lifecycle
//! - [`returns`] - return-request status transitions and display timeline
//!
//! Nothing here performs I/O or touches a clock; sources are driven by the
//! caller's loader and timers by explicit [`PollTimer::tick`] calls.

pub mod poll;
pub mod returns;
pub mod source;
pub mod viewport;

pub use poll::PollTimer;
pub use returns::{ReturnStatus, ReturnTransitionError, StepState, TimelineStep};
pub use source::{CachedSource, Freshness, ItemSource, LoadError, SourceError};
pub use viewport::{ColumnBreakpoints, Columns};
