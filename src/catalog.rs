//! Course catalog.
//!
//! A flat list of courses with read/update-by-id operations. The
//! catalog does not interact with the team partition; it is one of the
//! simple collaborators rendered alongside it.

use crate::models::Course;

/// The program's course catalog.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a course.
    ///
    /// Returns `Err` with the course back if its id is already taken.
    pub fn add_course(&mut self, course: Course) -> Result<(), Course> {
        if self.course(&course.id).is_some() {
            return Err(course);
        }
        self.courses.push(course);
        Ok(())
    }

    /// Finds a course by id.
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// Finds a course by id, mutably.
    pub fn course_mut(&mut self, course_id: &str) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.id == course_id)
    }

    /// Removes a course by id, returning it if it existed.
    pub fn remove_course(&mut self, course_id: &str) -> Option<Course> {
        let idx = self.courses.iter().position(|c| c.id == course_id)?;
        Some(self.courses.remove(idx))
    }

    /// All courses, in insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses.
    #[inline]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
