mod availability;
mod reminder;
pub mod scheduling;
mod shared;
mod slot;

pub use availability::{AvailabilityWindow, InvalidWindowError, WeekdayFlags};
pub use reminder::{sort_reminders, Reminder};
pub use scheduling::{assign_slots, SchedulePlan, SchedulingProblem, SlotAssignment};
pub use shared::entity::{Entity, ID};
pub use slot::{ScheduledSlot, SLOT_DURATION_MINUTES};
