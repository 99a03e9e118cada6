#![forbid(unsafe_code)]

//! Return-request status transitions and display timeline.
//!
//! A return request moves through a fixed status sequence:
//! `Pending -> Approved -> Processing -> Completed`, or is rejected straight
//! from `Pending`. [`ReturnStatus::apply`] enforces the graph and
//! [`ReturnStatus::timeline`] projects the current status onto the step
//! track shown to the customer.
//!
//! # Example
//!
//! ```rust
//! use storegrid_core::returns::{ReturnStatus, StepState};
//!
//! let status = ReturnStatus::Pending.apply(ReturnStatus::Approved).unwrap();
//! let steps = status.timeline();
//! assert_eq!(steps.len(), 4);
//! assert_eq!(steps[0].state, StepState::Done);
//! assert_eq!(steps[1].state, StepState::Current);
//! assert_eq!(steps[2].state, StepState::Upcoming);
//! ```

use std::fmt;

/// Status of a return request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnStatus {
    /// Submitted, awaiting review.
    Pending,
    /// Accepted for return.
    Approved,
    /// Item received, refund in progress.
    Processing,
    /// Refund issued.
    Completed,
    /// Declined at review.
    Rejected,
}

impl ReturnStatus {
    /// The happy-path status track, in order.
    pub const TRACK: [ReturnStatus; 4] = [
        ReturnStatus::Pending,
        ReturnStatus::Approved,
        ReturnStatus::Processing,
        ReturnStatus::Completed,
    ];

    /// Customer-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ReturnStatus::Pending => "Pending",
            ReturnStatus::Approved => "Approved",
            ReturnStatus::Processing => "Processing",
            ReturnStatus::Completed => "Completed",
            ReturnStatus::Rejected => "Rejected",
        }
    }

    /// Whether no further transition is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, ReturnStatus::Completed | ReturnStatus::Rejected)
    }

    /// Whether a transition from `self` to `next` is allowed.
    #[must_use]
    pub const fn can_transition_to(self, next: ReturnStatus) -> bool {
        matches!(
            (self, next),
            (ReturnStatus::Pending, ReturnStatus::Approved)
                | (ReturnStatus::Pending, ReturnStatus::Rejected)
                | (ReturnStatus::Approved, ReturnStatus::Processing)
                | (ReturnStatus::Processing, ReturnStatus::Completed)
        )
    }

    /// Apply a transition, returning the new status.
    pub fn apply(self, next: ReturnStatus) -> Result<ReturnStatus, ReturnTransitionError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(ReturnTransitionError::Invalid { from: self, to: next })
        }
    }

    /// Position on the happy-path track, if the status is on it.
    const fn track_index(self) -> Option<usize> {
        match self {
            ReturnStatus::Pending => Some(0),
            ReturnStatus::Approved => Some(1),
            ReturnStatus::Processing => Some(2),
            ReturnStatus::Completed => Some(3),
            ReturnStatus::Rejected => None,
        }
    }

    /// Project this status onto the display timeline.
    ///
    /// Happy-path statuses yield the full four-step track with earlier steps
    /// marked [`StepState::Done`], the current step [`StepState::Current`],
    /// and later steps [`StepState::Upcoming`]. A rejected request yields the
    /// two-step `Pending -> Rejected` track.
    #[must_use]
    pub fn timeline(self) -> Vec<TimelineStep> {
        match self.track_index() {
            Some(current) => Self::TRACK
                .iter()
                .enumerate()
                .map(|(idx, &status)| TimelineStep {
                    status,
                    state: if idx < current {
                        StepState::Done
                    } else if idx == current {
                        StepState::Current
                    } else {
                        StepState::Upcoming
                    },
                })
                .collect(),
            None => vec![
                TimelineStep {
                    status: ReturnStatus::Pending,
                    state: StepState::Done,
                },
                TimelineStep {
                    status: ReturnStatus::Rejected,
                    state: StepState::Current,
                },
            ],
        }
    }
}

impl fmt::Display for ReturnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display state of one timeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    /// Step already passed.
    Done,
    /// Step the request is currently in.
    Current,
    /// Step not yet reached.
    Upcoming,
}

/// One renderable step of the return timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineStep {
    /// Status this step represents.
    pub status: ReturnStatus,
    /// Display state relative to the request's current status.
    pub state: StepState,
}

/// Error for a disallowed status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnTransitionError {
    /// The transition is not an edge of the status graph.
    Invalid {
        /// Status the request is in.
        from: ReturnStatus,
        /// Status that was requested.
        to: ReturnStatus,
    },
}

impl fmt::Display for ReturnTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { from, to } => {
                write!(f, "return request cannot move from {from} to {to}")
            }
        }
    }
}

impl std::error::Error for ReturnTransitionError {}
