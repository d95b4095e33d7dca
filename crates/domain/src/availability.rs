use crate::shared::entity::ID;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Weekly availability flags, Sunday-first, index 0-6 matching
/// `Weekday::num_days_from_sunday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayFlags(pub [bool; 7]);

impl WeekdayFlags {
    pub fn is_set(&self, weekday: Weekday) -> bool {
        self.0[weekday.num_days_from_sunday() as usize]
    }

    pub fn none() -> Self {
        Self([false; 7])
    }

    /// Monday through Friday
    pub fn weekdays() -> Self {
        Self([false, true, true, true, true, true, false])
    }
}

#[derive(Debug, Error)]
pub enum InvalidWindowError {
    #[error("Hour: {0} is not a valid hour of day")]
    InvalidHour(u32),
    #[error("Window start hour: {start_hour} is not before end hour: {end_hour}")]
    EmptyWindow { start_hour: u32, end_hour: u32 },
}

/// Per-project weekly availability: which weekdays are open and which
/// daily hour window `[start_hour, end_hour)` slots may be placed in.
///
/// An immutable value record. Edits from the project picker arrive as a
/// whole replacement row through the availability repo, never as
/// in-place mutation of shared state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub user_id: ID,
    /// External project id of the task source ("service id")
    pub project_id: String,
    /// Display name of the project, used to title the calendar feed
    pub name: String,
    pub start_hour: u32,
    pub end_hour: u32,
    pub days: WeekdayFlags,
}

impl AvailabilityWindow {
    pub fn new(
        user_id: ID,
        project_id: String,
        name: String,
        start_hour: u32,
        end_hour: u32,
        days: WeekdayFlags,
    ) -> Result<Self, InvalidWindowError> {
        if start_hour > 23 {
            return Err(InvalidWindowError::InvalidHour(start_hour));
        }
        if end_hour > 24 {
            return Err(InvalidWindowError::InvalidHour(end_hour));
        }
        if start_hour >= end_hour {
            return Err(InvalidWindowError::EmptyWindow {
                start_hour,
                end_hour,
            });
        }
        Ok(Self {
            user_id,
            project_id,
            name,
            start_hour,
            end_hour,
            days,
        })
    }

    /// Whether an hour-aligned slot starting at `hour` on `weekday` is
    /// inside this window.
    pub fn is_open(&self, weekday: Weekday, hour: u32) -> bool {
        self.days.is_set(weekday) && self.start_hour <= hour && hour < self.end_hour
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn window(start_hour: u32, end_hour: u32, days: WeekdayFlags) -> AvailabilityWindow {
        AvailabilityWindow::new(
            ID::new(),
            "2203306141".into(),
            "Inbox".into(),
            start_hour,
            end_hour,
            days,
        )
        .expect("To create window")
    }

    #[test]
    fn window_is_half_open() {
        let w = window(9, 17, WeekdayFlags::weekdays());
        assert!(!w.is_open(Weekday::Mon, 8));
        assert!(w.is_open(Weekday::Mon, 9));
        assert!(w.is_open(Weekday::Mon, 16));
        assert!(!w.is_open(Weekday::Mon, 17));
    }

    #[test]
    fn closed_weekday_is_never_open() {
        let w = window(9, 17, WeekdayFlags::weekdays());
        for hour in 0..24 {
            assert!(!w.is_open(Weekday::Sun, hour));
            assert!(!w.is_open(Weekday::Sat, hour));
        }
    }

    #[test]
    fn sunday_first_indexing() {
        let mut days = [false; 7];
        days[0] = true;
        let w = window(9, 17, WeekdayFlags(days));
        assert!(w.is_open(Weekday::Sun, 9));
        assert!(!w.is_open(Weekday::Mon, 9));
    }

    #[test]
    fn rejects_inverted_and_out_of_range_hours() {
        assert!(matches!(
            AvailabilityWindow::new(
                ID::new(),
                "1".into(),
                "Inbox".into(),
                17,
                9,
                WeekdayFlags::weekdays()
            ),
            Err(InvalidWindowError::EmptyWindow { .. })
        ));
        assert!(matches!(
            AvailabilityWindow::new(
                ID::new(),
                "1".into(),
                "Inbox".into(),
                9,
                25,
                WeekdayFlags::weekdays()
            ),
            Err(InvalidWindowError::InvalidHour(25))
        ));
    }
}
