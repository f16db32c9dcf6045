//! Operation error types.
//!
//! All errors are local validation failures — this crate has no I/O,
//! so there is no unrecoverable category. Every failing operation
//! leaves its state unchanged.

use thiserror::Error;

/// Errors from roster partition operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    /// Two students in a roster share an id.
    #[error("Duplicate student id: {0}")]
    DuplicateStudentId(String),

    /// Regenerate called with a team size below 1.
    #[error("Team size must be at least 1 (got {0})")]
    InvalidTeamSize(usize),

    /// A move referenced a student id absent from the population.
    #[error("Unknown student: {0}")]
    UnknownStudent(String),

    /// A seed partition failed integrity validation.
    #[error("Invalid seed partition: {0}")]
    InvalidSeedPartition(String),
}

/// Errors from gradebook score updates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradebookError {
    /// Score recorded against an assignment not in the gradebook.
    #[error("Unknown assignment: {0}")]
    UnknownAssignment(String),

    /// Score outside the 0..=max_points range for its assignment.
    #[error("Score {score} out of range for assignment '{assignment_id}' (max {max_points})")]
    ScoreOutOfRange {
        /// Target assignment.
        assignment_id: String,
        /// Rejected score.
        score: f64,
        /// Maximum allowed by the assignment.
        max_points: f64,
    },
}
