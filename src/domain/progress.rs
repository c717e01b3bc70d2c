use super::record::Question;

/// Completion summary for a list of questions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// `completed / total`, or 0.0 when there are no questions
    pub ratio: f64,
}

impl Progress {
    /// Whole-number percentage for display (0..=100)
    pub fn percent(&self) -> u16 {
        (self.ratio * 100.0).round() as u16
    }

    /// "2/3 Questions Completed"
    pub fn count_label(&self) -> String {
        format!("{}/{} Questions Completed", self.completed, self.total)
    }

    pub fn tier(&self) -> StatusTier {
        StatusTier::from_counts(self.completed, self.total)
    }
}

/// Compute progress over `questions`
pub fn compute_progress(questions: &[Question]) -> Progress {
    let total = questions.len();
    let completed = questions.iter().filter(|q| q.completed).count();
    let ratio = if total > 0 {
        completed as f64 / total as f64
    } else {
        0.0
    };

    Progress {
        completed,
        total,
        ratio,
    }
}

/// Motivation tier shown under the progress gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTier {
    /// No questions yet
    Starting,
    /// Questions exist, none completed
    JourneyBegins,
    /// Some but not all completed
    KeepGoing,
    /// Every question completed
    AllCompleted,
}

impl StatusTier {
    pub fn from_counts(completed: usize, total: usize) -> Self {
        if total == 0 {
            Self::Starting
        } else if completed == 0 {
            Self::JourneyBegins
        } else if completed < total {
            Self::KeepGoing
        } else {
            Self::AllCompleted
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Starting => "Let's get started! You can do this!",
            Self::JourneyBegins => "The journey of a thousand miles begins with a single step!",
            Self::KeepGoing => "Keep going! You're making progress!",
            Self::AllCompleted => "Amazing! You've completed all questions!",
        }
    }
}

/// Tier message for the given counts
pub fn status_message(completed: usize, total: usize) -> &'static str {
    StatusTier::from_counts(completed, total).message()
}
