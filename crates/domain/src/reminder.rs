use serde::{Deserialize, Serialize};

/// A pending task pulled from the external task source. Rebuilt from
/// scratch on every scheduling run and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Opaque external task id, unique per task
    pub id: String,
    /// Which project (and therefore which `AvailabilityWindow`) governs it
    pub project_id: String,
    /// ISO date string, used only for ordering
    pub due_date: String,
    /// Higher value means more urgent
    pub priority: i64,
    pub content: String,
    pub description: String,
}

/// Total order over pending reminders: ascending due date, ties broken
/// by descending priority. ISO date strings sort chronologically when
/// compared lexicographically. Reminders equal on both keys may end up
/// in any relative order.
pub fn sort_reminders(reminders: &mut Vec<Reminder>) {
    reminders.sort_by(|a, b| {
        a.due_date
            .cmp(&b.due_date)
            .then(b.priority.cmp(&a.priority))
    });
}

#[cfg(test)]
mod test {
    use super::*;

    fn reminder(id: &str, due_date: &str, priority: i64) -> Reminder {
        Reminder {
            id: id.into(),
            project_id: "2203306141".into(),
            due_date: due_date.into(),
            priority,
            content: format!("Task {}", id),
            description: String::new(),
        }
    }

    #[test]
    fn orders_by_due_date_first() {
        let mut reminders = vec![
            reminder("1", "2024-03-02", 4),
            reminder("2", "2024-03-01", 1),
            reminder("3", "2024-02-28", 2),
        ];
        sort_reminders(&mut reminders);
        let ids = reminders.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[test]
    fn breaks_due_date_ties_by_priority_desc() {
        let mut reminders = vec![
            reminder("low", "2024-01-01", 1),
            reminder("high", "2024-01-01", 3),
            reminder("mid", "2024-01-01", 2),
        ];
        sort_reminders(&mut reminders);
        let ids = reminders.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["high", "mid", "low"]);
    }

    #[test]
    fn missing_due_date_sorts_first() {
        // Tasks without a due date carry an empty string
        let mut reminders = vec![reminder("1", "2024-01-01", 4), reminder("2", "", 1)];
        sort_reminders(&mut reminders);
        assert_eq!(reminders[0].id, "2");
    }
}
