//! Gradebook: per-assignment score table.
//!
//! Holds the assignment columns and a score per (student, assignment)
//! cell. A cell with no recorded score is "pending" and counts as zero
//! toward the average — the average is always taken over the total
//! possible points of *all* assignments, matching the dashboard's
//! percentage column.

use std::collections::HashMap;

use crate::error::GradebookError;
use crate::models::Assignment;

/// A score table over a fixed assignment list.
#[derive(Debug, Clone, Default)]
pub struct Gradebook {
    assignments: Vec<Assignment>,
    /// student id → (assignment id → points).
    scores: HashMap<String, HashMap<String, f64>>,
}

impl Gradebook {
    /// Creates a gradebook over the given assignments.
    pub fn new(assignments: Vec<Assignment>) -> Self {
        Self {
            assignments,
            scores: HashMap::new(),
        }
    }

    /// The assignment columns, in display order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Finds an assignment by id.
    pub fn assignment(&self, assignment_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == assignment_id)
    }

    /// Records a score for a student on an assignment.
    ///
    /// Rejects unknown assignment ids and scores outside
    /// `0.0..=max_points`; a rejected update changes nothing.
    pub fn record_score(
        &mut self,
        student_id: &str,
        assignment_id: &str,
        points: f64,
    ) -> Result<(), GradebookError> {
        let Some(assignment) = self.assignment(assignment_id) else {
            return Err(GradebookError::UnknownAssignment(assignment_id.to_string()));
        };
        if !(0.0..=assignment.max_points).contains(&points) {
            return Err(GradebookError::ScoreOutOfRange {
                assignment_id: assignment_id.to_string(),
                score: points,
                max_points: assignment.max_points,
            });
        }

        self.scores
            .entry(student_id.to_string())
            .or_default()
            .insert(assignment_id.to_string(), points);
        Ok(())
    }

    /// Clears a recorded score, returning it if one existed.
    ///
    /// The cell reverts to pending.
    pub fn clear_score(&mut self, student_id: &str, assignment_id: &str) -> Option<f64> {
        self.scores.get_mut(student_id)?.remove(assignment_id)
    }

    /// The recorded score for a cell, if any.
    pub fn score(&self, student_id: &str, assignment_id: &str) -> Option<f64> {
        self.scores.get(student_id)?.get(assignment_id).copied()
    }

    /// Sum of a student's recorded scores.
    pub fn total_points(&self, student_id: &str) -> f64 {
        self.assignments
            .iter()
            .filter_map(|a| self.score(student_id, &a.id))
            .sum()
    }

    /// Sum of max points across all assignments.
    pub fn possible_points(&self) -> f64 {
        self.assignments.iter().map(|a| a.max_points).sum()
    }

    /// A student's average as a percentage of total possible points.
    ///
    /// Pending cells count as zero against the possible total. Returns
    /// `None` when there are no assignments (nothing to average).
    pub fn average_percent(&self, student_id: &str) -> Option<f64> {
        let possible = self.possible_points();
        if possible <= 0.0 {
            return None;
        }
        Some(self.total_points(student_id) / possible * 100.0)
    }
}
