//! Partition integrity validation.
//!
//! Checks a partition against its roster. Detects:
//! - Duplicate membership (a student in two teams, or twice in one team)
//! - Unknown student references (member ids absent from the roster)
//!
//! The [`RosterManager`](crate::manager::RosterManager) operations
//! maintain these invariants by construction; this module exists to
//! vet seed partitions and to let embedders audit state they built
//! themselves.

use std::collections::HashSet;

use crate::models::{Partition, Roster};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A student id appears in more than one member slot.
    DuplicateMembership,
    /// A member id does not exist in the roster.
    UnknownStudentReference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a partition against its roster.
///
/// Checks:
/// 1. Each student id appears in at most one member slot across the
///    whole partition (covers both cross-team and within-team duplicates)
/// 2. Every member id exists in the roster
///
/// Unassigned students and empty teams are legal and produce no errors.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_partition(roster: &Roster, partition: &Partition) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for team in partition.teams() {
        for member in &team.members {
            if !seen.insert(member.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateMembership,
                    format!(
                        "Student '{}' appears more than once (last in team '{}')",
                        member, team.id
                    ),
                ));
            }
            if !roster.contains(member) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownStudentReference,
                    format!("Team '{}' references unknown student '{}'", team.id, member),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
