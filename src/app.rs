use crate::domain::{compute_progress, pick_quote, status_message, DayRecord, Progress, UiMode};
use crate::notifications;
use crate::persistence::{self, LoadOutcome, Loaded};
use chrono::{DateTime, Local, NaiveDate};
use rand::Rng;
use std::path::PathBuf;
use tracing::{error, info};

/// Input form state for adding a question or editing the topic
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub buffer: String,
}

/// Last known state of the progress file, shown in the status line
#[derive(Debug, Clone, PartialEq)]
pub enum PersistStatus {
    /// Nothing written yet this session
    Clean,
    Saved { at: DateTime<Local> },
    /// The file existed but could not be loaded; a fresh record is in use
    LoadFailed(String),
    /// The last write failed; changes live only in memory
    SaveFailed(String),
}

impl PersistStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::LoadFailed(_) | Self::SaveFailed(_))
    }

    pub fn label(&self) -> String {
        match self {
            Self::Clean => String::new(),
            Self::Saved { at } => format!("Saved {}", at.format("%H:%M:%S")),
            Self::LoadFailed(msg) => format!("Could not load progress ({}), started fresh", msg),
            Self::SaveFailed(msg) => format!("Could not save progress: {}", msg),
        }
    }
}

/// Main application state
pub struct AppState {
    pub record: DayRecord,
    pub data_file: PathBuf,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub needs_save: bool,
    pub persist_status: PersistStatus,
}

impl AppState {
    pub fn new(record: DayRecord, data_file: PathBuf) -> Self {
        Self {
            record,
            data_file,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            needs_save: false,
            persist_status: PersistStatus::Clean,
        }
    }

    /// Build the app from a load result.
    ///
    /// A fresh record for a new day (or first run) is persisted right away so
    /// the quote stays fixed for the rest of the day. A file that failed to
    /// load is left untouched until the user changes something.
    pub fn from_loaded(loaded: Loaded, data_file: PathBuf) -> Self {
        let mut app = Self::new(loaded.record, data_file);
        match loaded.outcome {
            LoadOutcome::Restored => {}
            LoadOutcome::NoFile | LoadOutcome::Stale { .. } => app.needs_save = true,
            LoadOutcome::Failed(e) => app.persist_status = PersistStatus::LoadFailed(e.to_string()),
        }
        app
    }

    pub fn progress(&self) -> Progress {
        compute_progress(&self.record.questions)
    }

    pub fn status_message(&self) -> &'static str {
        let progress = self.progress();
        status_message(progress.completed, progress.total)
    }

    /// Add a question to today's list; blank input is ignored
    pub fn add_question(&mut self, text: &str) -> bool {
        let added = self.record.add_question(text);
        if added {
            self.needs_save = true;
        }
        added
    }

    /// Set the completed flag of a question
    pub fn set_completed(&mut self, index: usize, value: bool) -> bool {
        let was_done = self.record.all_completed();
        if !self.record.set_completed(index, value) {
            return false;
        }

        if !was_done && self.record.all_completed() {
            info!(total = self.record.questions.len(), "all questions completed");
            notifications::notify_all_completed(self.record.questions.len());
        }
        self.needs_save = true;
        true
    }

    /// Toggle the selected question
    pub fn toggle_selected(&mut self) {
        if let Some(question) = self.record.questions.get(self.selected_index) {
            let value = !question.completed;
            self.set_completed(self.selected_index, value);
        }
    }

    pub fn set_topic(&mut self, topic: &str) {
        if self.record.topic != topic {
            self.record.set_topic(topic);
            self.needs_save = true;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.record.questions.len() {
            self.selected_index += 1;
        }
    }

    /// Open the input form for a new question
    pub fn start_add_question(&mut self) {
        self.input_form = Some(InputFormState {
            buffer: String::new(),
        });
        self.ui_mode = UiMode::AddingQuestion;
    }

    /// Open the input form prefilled with the current topic
    pub fn start_edit_topic(&mut self) {
        self.input_form = Some(InputFormState {
            buffer: self.record.topic.clone(),
        });
        self.ui_mode = UiMode::EditingTopic;
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            form.buffer.push(c);
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.buffer.pop();
        }
    }

    /// Submit the input form.
    ///
    /// Adding a question keeps the form open for the next one, like an entry
    /// field that clears on Enter. A blank question closes it.
    pub fn submit_input_form(&mut self) {
        let Some(form) = self.input_form.take() else {
            return;
        };

        match self.ui_mode {
            UiMode::AddingQuestion => {
                if self.add_question(&form.buffer) {
                    self.selected_index = self.record.questions.len() - 1;
                    self.input_form = Some(InputFormState {
                        buffer: String::new(),
                    });
                    return;
                }
            }
            UiMode::EditingTopic => self.set_topic(form.buffer.trim()),
            UiMode::Normal => {}
        }
        self.ui_mode = UiMode::Normal;
    }

    /// Cancel input form
    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Persist the record. Failures are logged and shown, never returned.
    pub fn save(&mut self) {
        match persistence::save(&self.data_file, &self.record) {
            Ok(()) => {
                self.persist_status = PersistStatus::Saved { at: Local::now() };
            }
            Err(e) => {
                error!(error = %e, "failed to save progress");
                self.persist_status = PersistStatus::SaveFailed(e.to_string());
            }
        }
        self.needs_save = false;
    }

    /// Check if `today` differs from the record's day (crossed midnight)
    pub fn has_day_changed(&self, today: NaiveDate) -> bool {
        !self.record.is_for(today)
    }

    /// Start a fresh record when the date has rolled over.
    ///
    /// Returns `true` when a new day was started.
    pub fn check_rollover<R: Rng + ?Sized>(&mut self, today: NaiveDate, rng: &mut R) -> bool {
        if !self.has_day_changed(today) {
            return false;
        }

        info!(
            from = %self.record.date,
            to = %today,
            questions = self.record.questions.len(),
            completed = self.record.completed_count(),
            "new day, starting a fresh checklist"
        );
        self.record = DayRecord::fresh(today, pick_quote(rng));
        self.selected_index = 0;
        self.needs_save = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quotes::QUOTES;
    use crate::domain::StatusTier;
    use crate::persistence::{load_today, StoreError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn create_test_app() -> (tempfile::TempDir, AppState) {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("progress.json");
        let app = AppState::new(DayRecord::fresh(today(), "quote"), path);
        (temp_dir, app)
    }

    #[test]
    fn test_add_and_toggle_scenario() {
        let (_dir, mut app) = create_test_app();
        assert_eq!(app.progress().tier(), StatusTier::Starting);

        assert!(app.add_question("Two Sum"));
        assert_eq!(app.progress().total, 1);
        assert_eq!(app.progress().completed, 0);
        assert_eq!(app.status_message(), StatusTier::JourneyBegins.message());

        app.toggle_selected();
        assert_eq!(app.progress().ratio, 1.0);
        assert_eq!(app.status_message(), StatusTier::AllCompleted.message());

        app.add_question("Reverse LL");
        assert_eq!(app.progress().ratio, 0.5);
        assert_eq!(app.status_message(), StatusTier::KeepGoing.message());
        assert!(app.needs_save);
    }

    #[test]
    fn test_blank_question_does_not_mark_dirty() {
        let (_dir, mut app) = create_test_app();
        assert!(!app.add_question("   "));
        assert!(!app.needs_save);
    }

    #[test]
    fn test_toggle_with_no_questions_is_noop() {
        let (_dir, mut app) = create_test_app();
        app.toggle_selected();
        assert!(!app.needs_save);
        assert!(!app.set_completed(0, true));
    }

    #[test]
    fn test_selection_bounds() {
        let (_dir, mut app) = create_test_app();
        app.add_question("a");
        app.add_question("b");

        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
        app.move_selection_down();
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_input_form_adds_question_and_stays_open() {
        let (_dir, mut app) = create_test_app();
        app.start_add_question();
        for c in "Two Sum".chars() {
            app.input_form_add_char(c);
        }
        app.submit_input_form();

        assert_eq!(app.record.questions.len(), 1);
        assert_eq!(app.ui_mode, UiMode::AddingQuestion);
        assert_eq!(app.input_form.as_ref().unwrap().buffer, "");

        // Empty submit closes the form
        app.submit_input_form();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
        assert_eq!(app.record.questions.len(), 1);
    }

    #[test]
    fn test_edit_topic_prefills_and_saves_trimmed() {
        let (_dir, mut app) = create_test_app();
        app.set_topic("Graphs");
        app.needs_save = false;

        app.start_edit_topic();
        assert_eq!(app.input_form.as_ref().unwrap().buffer, "Graphs");
        app.input_form_backspace();
        app.input_form_backspace();
        app.input_form_backspace();
        app.input_form_backspace();
        app.input_form_backspace();
        app.input_form_backspace();
        for c in "Trees ".chars() {
            app.input_form_add_char(c);
        }
        app.submit_input_form();

        assert_eq!(app.record.topic, "Trees");
        assert!(app.needs_save);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_cancel_input_form() {
        let (_dir, mut app) = create_test_app();
        app.start_add_question();
        app.input_form_add_char('x');
        app.cancel_input_form();

        assert!(app.input_form.is_none());
        assert!(app.record.questions.is_empty());
    }

    #[test]
    fn test_save_then_reload() {
        let (_dir, mut app) = create_test_app();
        app.add_question("Two Sum");
        app.toggle_selected();
        app.save();

        assert!(!app.needs_save);
        assert!(matches!(app.persist_status, PersistStatus::Saved { .. }));

        let loaded = load_today(&app.data_file, today(), &mut StdRng::seed_from_u64(0));
        assert_eq!(loaded.record, app.record);
    }

    #[test]
    fn test_save_failure_is_surfaced() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let mut app = AppState::new(
            DayRecord::fresh(today(), "quote"),
            blocker.join("progress.json"),
        );

        app.add_question("Two Sum");
        app.save();

        assert!(app.persist_status.is_error());
        assert!(app.persist_status.label().starts_with("Could not save"));
        assert!(!app.needs_save);
        assert_eq!(app.record.questions.len(), 1);
    }

    #[test]
    fn test_from_loaded_fresh_day_needs_save() {
        let loaded = Loaded {
            record: DayRecord::fresh(today(), "q"),
            outcome: LoadOutcome::Stale {
                date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            },
        };
        let app = AppState::from_loaded(loaded, PathBuf::from("unused.json"));
        assert!(app.needs_save);
        assert_eq!(app.persist_status, PersistStatus::Clean);
    }

    #[test]
    fn test_from_loaded_failure_keeps_file() {
        let source = serde_json::from_str::<DayRecord>("nope").unwrap_err();
        let loaded = Loaded {
            record: DayRecord::fresh(today(), "q"),
            outcome: LoadOutcome::Failed(StoreError::Parse {
                path: PathBuf::from("progress.json"),
                source,
            }),
        };
        let app = AppState::from_loaded(loaded, PathBuf::from("progress.json"));
        assert!(!app.needs_save);
        assert!(app.persist_status.is_error());
    }

    #[test]
    fn test_rollover_starts_fresh_day() {
        let (_dir, mut app) = create_test_app();
        app.set_topic("Heaps");
        app.add_question("Kth Largest");
        app.record.quote = "stale quote".to_string();
        app.needs_save = false;
        let mut rng = StdRng::seed_from_u64(9);

        assert!(!app.check_rollover(today(), &mut rng));

        let tomorrow = today().succ_opt().unwrap();
        assert!(app.check_rollover(tomorrow, &mut rng));
        assert_eq!(app.record.date, tomorrow);
        assert!(app.record.questions.is_empty());
        assert!(app.record.topic.is_empty());
        assert_ne!(app.record.quote, "stale quote");
        assert!(QUOTES.contains(&app.record.quote.as_str()));
        assert!(app.needs_save);
    }
}
