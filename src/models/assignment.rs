//! Assignment model.
//!
//! An assignment is a gradeable unit of coursework. The gradebook keys
//! its score columns by assignment id; `max_points` bounds recorded
//! scores and is the denominator of the average computation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A gradeable assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique assignment identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Maximum achievable points.
    pub max_points: f64,
    /// Due date, if any.
    pub due: Option<NaiveDate>,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(id: impl Into<String>, title: impl Into<String>, max_points: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            max_points,
            due: None,
        }
    }

    /// Sets the due date.
    pub fn with_due(mut self, due: NaiveDate) -> Self {
        self.due = Some(due);
        self
    }
}
