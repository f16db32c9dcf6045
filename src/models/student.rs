//! Student and roster models.
//!
//! A roster is the fixed population of students under management.
//! It is constructed once per session and never mutated afterwards;
//! team assignment lives in [`Partition`](super::Partition), not here.

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// A student in the program.
///
/// Immutable once created. Identity is the `id` field; `name` is a
/// display label with no uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
}

impl Student {
    /// Creates a new student.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The fixed student population.
///
/// Read-only after construction. Iteration order is the order the
/// students were supplied in, which doubles as the default display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Creates a roster from a list of students.
    ///
    /// Rejects duplicate student ids.
    pub fn new(students: Vec<Student>) -> Result<Self, RosterError> {
        for (i, s) in students.iter().enumerate() {
            if students[..i].iter().any(|other| other.id == s.id) {
                return Err(RosterError::DuplicateStudentId(s.id.clone()));
            }
        }
        Ok(Self { students })
    }

    /// Whether a student with the given id exists.
    pub fn contains(&self, student_id: &str) -> bool {
        self.students.iter().any(|s| s.id == student_id)
    }

    /// Finds a student by id.
    pub fn student(&self, student_id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == student_id)
    }

    /// All students, in roster order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// All student ids, in roster order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.students.iter().map(|s| s.id.as_str())
    }

    /// Number of students.
    #[inline]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the roster is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
