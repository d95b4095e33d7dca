mod todoist;

pub use todoist::{ITaskSource, TodoistApi};
