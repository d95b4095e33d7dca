use chrono::NaiveDateTime;
use taskcal_domain::ScheduledSlot;

// RFC 5545 3.1: content lines longer than this are folded
const MAX_LINE_OCTETS: usize = 75;

/// Render slots as an iCalendar document with floating local times,
/// one VEVENT per slot. Slot fields pass through unmodified apart from
/// text escaping.
pub fn render_calendar(
    name: &str,
    slots: &[ScheduledSlot],
    generated_at: NaiveDateTime,
) -> String {
    let dtstamp = format!("DTSTAMP:{}Z", format_datetime(generated_at));
    let mut out = String::new();
    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, "VERSION:2.0");
    push_line(&mut out, "PRODID:-//taskcal//EN");
    push_line(&mut out, &format!("X-WR-CALNAME:{}", escape_text(name)));
    for slot in slots {
        push_line(&mut out, "BEGIN:VEVENT");
        push_line(&mut out, &format!("UID:{}@taskcal", slot.reminder_id));
        push_line(&mut out, &dtstamp);
        push_line(&mut out, &format!("DTSTART:{}", format_datetime(slot.start)));
        push_line(&mut out, &format!("DTEND:{}", format_datetime(slot.end)));
        push_line(&mut out, &format!("SUMMARY:{}", escape_text(&slot.name)));
        push_line(
            &mut out,
            &format!("DESCRIPTION:{}", escape_text(&slot.description)),
        );
        push_line(&mut out, "END:VEVENT");
    }
    push_line(&mut out, "END:VCALENDAR");
    out
}

/// Append a content line, folding at 75 octets (RFC 5545 3.1).
/// Continuation lines start with a single space and CRLF ends each
/// physical line.
fn push_line(out: &mut String, line: &str) {
    let mut budget = MAX_LINE_OCTETS;
    for ch in line.chars() {
        let octets = ch.len_utf8();
        if octets > budget {
            out.push_str("\r\n ");
            budget = MAX_LINE_OCTETS - 1;
        }
        out.push(ch);
        budget -= octets;
    }
    out.push_str("\r\n");
}

fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use taskcal_domain::{Reminder, ID};

    fn slot(content: &str, description: &str) -> ScheduledSlot {
        let reminder = Reminder {
            id: "7032".into(),
            project_id: "2203306141".into(),
            due_date: "2024-01-05".into(),
            priority: 2,
            content: content.into(),
            description: description.into(),
        };
        ScheduledSlot::new(
            ID::new(),
            &reminder,
            NaiveDate::from_ymd(2024, 1, 1).and_hms(9, 0, 0),
        )
    }

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd(2024, 1, 1).and_hms(8, 30, 0)
    }

    #[test]
    fn renders_one_event_per_slot() {
        let ics = render_calendar(
            "Work Calendar",
            &[slot("Write report", "quarterly")],
            generated_at(),
        );

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert!(ics.contains("X-WR-CALNAME:Work Calendar\r\n"));
        assert!(ics.contains("DTSTAMP:20240101T083000Z\r\n"));
        assert!(ics.contains("DTSTART:20240101T090000\r\n"));
        assert!(ics.contains("DTEND:20240101T100000\r\n"));
        assert!(ics.contains("SUMMARY:Write report\r\n"));
        assert!(ics.contains("DESCRIPTION:quarterly\r\n"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
    }

    #[test]
    fn escapes_reserved_characters() {
        let ics = render_calendar(
            "Cal",
            &[slot("Plan; buy eggs, milk", "line1\nline2")],
            generated_at(),
        );

        assert!(ics.contains("SUMMARY:Plan\\; buy eggs\\, milk\r\n"));
        assert!(ics.contains("DESCRIPTION:line1\\nline2\r\n"));
    }

    #[test]
    fn folds_long_lines_at_75_octets() {
        let long_name = "x".repeat(200);
        let ics = render_calendar("Cal", &[slot(&long_name, "")], generated_at());

        for line in ics.split("\r\n") {
            assert!(line.len() <= MAX_LINE_OCTETS, "unfolded line: {}", line);
        }
        // Unfolding (joining on CRLF-space) restores the original text
        assert!(ics.replace("\r\n ", "").contains(&format!("SUMMARY:{}", long_name)));
    }

    #[test]
    fn empty_schedule_is_still_a_valid_calendar() {
        let ics = render_calendar("Cal", &[], generated_at());
        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(!ics.contains("BEGIN:VEVENT"));
    }
}
