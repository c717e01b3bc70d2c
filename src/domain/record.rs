use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single practice question on today's checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

/// Everything tracked for one calendar day.
///
/// This is also the on-disk shape: `date`, `topic`, `quote` and the ordered
/// `questions` list. Fields other than `date` fall back to empty values so
/// a hand-edited file with missing keys still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl DayRecord {
    /// Start a new day with no topic and no questions
    pub fn fresh(date: NaiveDate, quote: impl Into<String>) -> Self {
        Self {
            date,
            topic: String::new(),
            quote: quote.into(),
            questions: Vec::new(),
        }
    }

    /// Append a question. Blank input is ignored.
    ///
    /// Returns `true` when a question was added.
    pub fn add_question(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.questions.push(Question::new(text));
        true
    }

    /// Set the completed flag of the question at `index`.
    ///
    /// Out-of-range indices leave the record untouched and return `false`.
    pub fn set_completed(&mut self, index: usize, value: bool) -> bool {
        match self.questions.get_mut(index) {
            Some(question) => {
                question.completed = value;
                true
            }
            None => false,
        }
    }

    /// Flip the completed flag of the question at `index`
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.questions.get(index) {
            Some(question) => {
                let value = !question.completed;
                self.set_completed(index, value)
            }
            None => false,
        }
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    pub fn is_for(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    pub fn completed_count(&self) -> usize {
        self.questions.iter().filter(|q| q.completed).count()
    }

    /// True once there is at least one question and every one is done
    pub fn all_completed(&self) -> bool {
        !self.questions.is_empty() && self.questions.iter().all(|q| q.completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_fresh_record_is_empty() {
        let record = DayRecord::fresh(day(), "quote");
        assert_eq!(record.date, day());
        assert!(record.topic.is_empty());
        assert!(record.questions.is_empty());
        assert_eq!(record.quote, "quote");
    }

    #[test]
    fn test_add_question_appends_uncompleted() {
        let mut record = DayRecord::fresh(day(), "q");
        assert!(record.add_question("Two Sum"));
        assert!(record.add_question("Reverse LL"));

        assert_eq!(record.questions.len(), 2);
        assert_eq!(record.questions[0], Question::new("Two Sum"));
        assert_eq!(record.questions[1].text, "Reverse LL");
        assert!(!record.questions[1].completed);
    }

    #[test]
    fn test_add_question_trims_text() {
        let mut record = DayRecord::fresh(day(), "q");
        record.add_question("   Valid Parentheses \t");
        assert_eq!(record.questions[0].text, "Valid Parentheses");
    }

    #[test]
    fn test_add_blank_question_is_noop() {
        let mut record = DayRecord::fresh(day(), "q");
        let before = record.clone();

        assert!(!record.add_question(""));
        assert!(!record.add_question("   "));
        assert!(!record.add_question("\n\t"));
        assert_eq!(record, before);
    }

    #[test]
    fn test_set_completed_in_range() {
        let mut record = DayRecord::fresh(day(), "q");
        record.add_question("Two Sum");

        assert!(record.set_completed(0, true));
        assert!(record.questions[0].completed);
        assert!(record.set_completed(0, false));
        assert!(!record.questions[0].completed);
    }

    #[test]
    fn test_set_completed_out_of_range_is_noop() {
        let mut record = DayRecord::fresh(day(), "q");
        record.add_question("Two Sum");
        let before = record.clone();

        assert!(!record.set_completed(1, true));
        assert!(!record.set_completed(usize::MAX, true));
        assert_eq!(record, before);
    }

    #[test]
    fn test_toggle() {
        let mut record = DayRecord::fresh(day(), "q");
        record.add_question("Two Sum");

        assert!(record.toggle(0));
        assert!(record.questions[0].completed);
        assert!(record.toggle(0));
        assert!(!record.questions[0].completed);
        assert!(!record.toggle(3));
    }

    #[test]
    fn test_all_completed() {
        let mut record = DayRecord::fresh(day(), "q");
        assert!(!record.all_completed());

        record.add_question("a");
        record.add_question("b");
        record.set_completed(0, true);
        assert!(!record.all_completed());
        assert_eq!(record.completed_count(), 1);

        record.set_completed(1, true);
        assert!(record.all_completed());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{ "date": "2026-10-19", "questions": [ { "text": "Two Sum" } ] }"#;
        let record: DayRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.date, day());
        assert!(record.topic.is_empty());
        assert!(record.quote.is_empty());
        assert_eq!(record.questions, vec![Question::new("Two Sum")]);
    }
}
