pub mod progress;
pub mod quotes;
pub mod record;

pub use progress::{compute_progress, status_message, Progress, StatusTier};
pub use quotes::pick_quote;
pub use record::{DayRecord, Question};

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingQuestion,
    EditingTopic,
}
