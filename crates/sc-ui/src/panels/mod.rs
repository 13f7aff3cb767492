//! Input panels and the dashboard header

mod entry;
mod header;
mod search;

pub use entry::{EntryForm, EntrySubmission, TRAFFIC_LEVELS};
pub use header::{format_clock, header};
pub use search::SearchPanel;
