//! Partition model.
//!
//! A partition maps team ids to teams. It is stored as an ordered
//! sequence with unique ids rather than a hash map so that team display
//! order is stable (creation order), with linear id lookup on the side —
//! partitions are small, so the lookup cost is irrelevant.
//!
//! The partition itself enforces only id uniqueness among teams. The
//! membership invariants (one team per student, members drawn from the
//! roster) are maintained by the operations in
//! [`manager`](crate::manager) and checkable via
//! [`validation`](crate::validation).

use serde::{Deserialize, Serialize};

use super::Team;

/// The current assignment of students to teams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    teams: Vec<Team>,
}

impl Partition {
    /// Creates an empty partition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a team by id.
    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    /// Finds a team by id, mutably.
    pub fn team_mut(&mut self, team_id: &str) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == team_id)
    }

    /// Inserts a team, replacing any existing team with the same id.
    ///
    /// A replaced team keeps its position; a new team goes to the end.
    pub fn insert_team(&mut self, team: Team) -> Option<Team> {
        match self.teams.iter_mut().find(|t| t.id == team.id) {
            Some(slot) => Some(std::mem::replace(slot, team)),
            None => {
                self.teams.push(team);
                None
            }
        }
    }

    /// Removes a team by id, returning it if it existed.
    pub fn remove_team(&mut self, team_id: &str) -> Option<Team> {
        let idx = self.teams.iter().position(|t| t.id == team_id)?;
        Some(self.teams.remove(idx))
    }

    /// The team currently containing a student, if any.
    pub fn team_of(&self, student_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.contains(student_id))
    }

    /// Whether any team contains the student.
    pub fn contains_student(&self, student_id: &str) -> bool {
        self.team_of(student_id).is_some()
    }

    /// All teams, in creation order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Mutable iteration over all teams.
    pub(crate) fn teams_mut(&mut self) -> impl Iterator<Item = &mut Team> {
        self.teams.iter_mut()
    }

    /// Total number of memberships across all teams.
    pub fn member_count(&self) -> usize {
        self.teams.iter().map(Team::len).sum()
    }

    /// Number of teams.
    #[inline]
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Whether the partition has no teams.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
