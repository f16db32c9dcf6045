//! Weekly agenda view.
//!
//! Groups agenda events into a Sunday-started week of seven days, the
//! layout both dashboards render. Events may carry any date; only those
//! falling inside the week show up in the per-day queries.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::AgendaEvent;

/// A Sunday-started week of agenda events.
#[derive(Debug, Clone)]
pub struct WeekAgenda {
    start: NaiveDate,
    events: Vec<AgendaEvent>,
}

impl WeekAgenda {
    /// Creates an empty agenda for the week containing `date`.
    ///
    /// The week starts on the Sunday at or before `date`.
    pub fn week_containing(date: NaiveDate) -> Self {
        let back = date.weekday().num_days_from_sunday();
        // Subtraction stays in range for any representable date
        let start = date
            .checked_sub_days(Days::new(u64::from(back)))
            .unwrap_or(date);
        Self {
            start,
            events: Vec::new(),
        }
    }

    /// The week's Sunday.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The seven dates of the week, Sunday through Saturday.
    pub fn days(&self) -> [NaiveDate; 7] {
        std::array::from_fn(|i| {
            self.start
                .checked_add_days(Days::new(i as u64))
                .unwrap_or(self.start)
        })
    }

    /// Whether a date falls inside this week.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let offset = date.signed_duration_since(self.start).num_days();
        (0..7).contains(&offset)
    }

    /// Adds an event.
    pub fn add_event(&mut self, event: AgendaEvent) {
        self.events.push(event);
    }

    /// All events, in insertion order.
    pub fn events(&self) -> &[AgendaEvent] {
        &self.events
    }

    /// Events on a given date, sorted by start time.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&AgendaEvent> {
        let mut day: Vec<&AgendaEvent> = self.events.iter().filter(|e| e.date == date).collect();
        day.sort_by_key(|e| e.start);
        day
    }
}
