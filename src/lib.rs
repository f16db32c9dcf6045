//! Roster partition management for institutional programs.
//!
//! Maintains a fixed student population partitioned into named teams,
//! with two mutually-compatible ways of changing the partition:
//! randomized bulk regeneration and manual single-student reassignment
//! via a two-phase direct-manipulation command. Both preserve the
//! partition invariants (one team per student, members drawn from the
//! population).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Student`, `Roster`, `Team`,
//!   `Partition`, `Course`, `Assignment`, `AgendaEvent`
//! - **`manager`**: `RosterManager`, the partition state machine
//! - **`validation`**: Partition integrity checks (duplicate membership,
//!   unknown student references)
//! - **`catalog`**, **`gradebook`**, **`agenda`**: flat-list
//!   collaborators (course catalog, score table, weekly event view)
//!
//! # Architecture
//!
//! This crate is the domain layer of a dashboard suite. A presentation
//! layer forwards user gestures (size input, drag start, drop,
//! remove click) as calls into `RosterManager` and re-renders from the
//! returned state; rendering, routing, and persistence live entirely
//! outside this crate.

pub mod agenda;
pub mod catalog;
pub mod error;
pub mod gradebook;
pub mod manager;
pub mod models;
pub mod validation;

pub use error::{GradebookError, RosterError};
pub use manager::RosterManager;
