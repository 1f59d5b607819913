//! Snapshot-driven visual feedback state machine
//!
//! Translates score/countdown snapshots into timed animation states for the
//! readout. This module must stay pure and deterministic:
//! - Host-supplied time only, no wall clock
//! - Explicit cancellable timers, no implicit bindings
//! - Stable event order
//! - No rendering or platform dependencies

pub mod controller;
pub mod snapshot;
pub mod state;

pub use controller::{FeedbackController, FeedbackEvent};
pub use snapshot::ScoreTimerSnapshot;
pub use state::{FeedbackState, Plan, UrgencyChange, plan};
