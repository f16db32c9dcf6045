//! Team model.
//!
//! A team is a named group of student ids. The member list is an ordered
//! sequence because insertion order is display order, but membership is
//! logically a set — a student id may appear at most once per team, and
//! at most once across the whole [`Partition`](super::Partition).

use serde::{Deserialize, Serialize};

/// A named team within a partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier within its partition.
    pub id: String,
    /// Display label. No uniqueness constraint.
    pub name: String,
    /// Member student ids, in insertion order.
    pub members: Vec<String>,
}

impl Team {
    /// Creates an empty team whose name defaults to the id literal.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            members: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the member list.
    pub fn with_members(mut self, members: Vec<String>) -> Self {
        self.members = members;
        self
    }

    /// Whether the team contains a student.
    pub fn contains(&self, student_id: &str) -> bool {
        self.members.iter().any(|m| m == student_id)
    }

    /// Removes a student from the member list if present.
    ///
    /// Returns `true` if a removal occurred.
    pub fn remove_member(&mut self, student_id: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m != student_id);
        self.members.len() < before
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the team has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
