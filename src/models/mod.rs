//! Roster domain models.
//!
//! Provides the core data types for the program-management suite:
//! the fixed student population, team partitions, and the flat-list
//! records used by the catalog, gradebook, and agenda collaborators.
//!
//! # Invariants
//!
//! The partition types themselves are plain data; the membership
//! invariants (at most one team per student, members drawn from the
//! roster) are maintained by [`RosterManager`](crate::manager::RosterManager)
//! and checkable via [`validation`](crate::validation).

mod assignment;
mod course;
mod event;
mod partition;
mod student;
mod team;

pub use assignment::Assignment;
pub use course::Course;
pub use event::{AgendaEvent, EventKind};
pub use partition::Partition;
pub use student::{Roster, Student};
pub use team::Team;
