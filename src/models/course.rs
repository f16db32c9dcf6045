//! Course model.
//!
//! Courses are catalog entries: code, title, and descriptive metadata.
//! They do not interact with the team partition — team membership is
//! program-wide, not per-course.

use serde::{Deserialize, Serialize};

/// A course in the program catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Short catalog code (e.g. "ENT101").
    pub code: String,
    /// Full course title.
    pub title: String,
    /// Assigned instructor, if any.
    pub instructor: Option<String>,
    /// Course description for the catalog page.
    pub description: String,
    /// Total contact hours.
    pub hours: Option<u32>,
}

impl Course {
    /// Creates a new course.
    pub fn new(id: impl Into<String>, code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            title: title.into(),
            instructor: None,
            description: String::new(),
            hours: None,
        }
    }

    /// Sets the instructor.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the contact hours.
    pub fn with_hours(mut self, hours: u32) -> Self {
        self.hours = Some(hours);
        self
    }
}
