//! Agenda event model.
//!
//! Events are placed on calendar dates with a start time and a kind
//! that the presentation layer maps to styling. They carry no duration;
//! the original dashboards only display a start time.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Classification of agenda events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// Regular class session.
    Class,
    /// Hands-on workshop session.
    Workshop,
    /// Team or student presentation slot.
    Presentation,
    /// An assignment due deadline.
    AssignmentDue,
    /// Non-teaching task (e.g. grading batch).
    Task,
}

/// An event on the weekly agenda.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaEvent {
    /// Calendar date of the event.
    pub date: NaiveDate,
    /// Start time.
    pub start: NaiveTime,
    /// Display title.
    pub title: String,
    /// Event classification.
    pub kind: EventKind,
}

impl AgendaEvent {
    /// Creates a new agenda event.
    pub fn new(date: NaiveDate, start: NaiveTime, title: impl Into<String>, kind: EventKind) -> Self {
        Self {
            date,
            start,
            title: title.into(),
            kind,
        }
    }
}
