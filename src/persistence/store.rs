use super::error::{StoreError, StoreResult};
use super::files::{atomic_write, read_file};
use crate::domain::{pick_quote, DayRecord, Question};
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// Why `load_today` returned the record it did
#[derive(Debug)]
pub enum LoadOutcome {
    /// Today's record was found on disk
    Restored,
    /// No progress file yet
    NoFile,
    /// The file belongs to an earlier (or later) day and was discarded
    Stale { date: NaiveDate },
    /// The file could not be read or parsed
    Failed(StoreError),
}

/// Result of loading today's record
#[derive(Debug)]
pub struct Loaded {
    pub record: DayRecord,
    pub outcome: LoadOutcome,
}

impl Loaded {
    /// True when the record was created rather than restored
    pub fn is_fresh(&self) -> bool {
        !matches!(self.outcome, LoadOutcome::Restored)
    }
}

/// Record as read from disk. A missing `quote` key is kept apart from an
/// empty quote; only the former gets a new one.
#[derive(Debug, Deserialize)]
struct StoredRecord {
    date: NaiveDate,
    #[serde(default)]
    topic: String,
    quote: Option<String>,
    #[serde(default)]
    questions: Vec<Question>,
}

impl StoredRecord {
    fn into_record<R: Rng + ?Sized>(self, rng: &mut R) -> DayRecord {
        DayRecord {
            date: self.date,
            topic: self.topic,
            quote: self.quote.unwrap_or_else(|| pick_quote(rng).to_string()),
            questions: self.questions,
        }
    }
}

/// Read whatever record is on disk, `None` if there is no file
fn read_record(path: &Path) -> StoreResult<Option<StoredRecord>> {
    let content = read_file(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match content {
        Some(content) => serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            }),
        None => Ok(None),
    }
}

/// Load the record for `today`.
///
/// Never fails: a missing, unreadable, corrupt or out-of-date file yields a
/// fresh record with a newly picked quote. The reason is kept in
/// [`Loaded::outcome`] so callers can surface it.
pub fn load_today<R: Rng + ?Sized>(path: &Path, today: NaiveDate, rng: &mut R) -> Loaded {
    let outcome = match read_record(path) {
        Ok(Some(stored)) if stored.date == today => {
            let record = stored.into_record(rng);
            debug!(
                path = %path.display(),
                questions = record.questions.len(),
                "restored today's progress"
            );
            return Loaded {
                record,
                outcome: LoadOutcome::Restored,
            };
        }
        Ok(Some(stored)) => {
            info!(
                path = %path.display(),
                date = %stored.date,
                questions = stored.questions.len(),
                "progress file is from another day, starting fresh"
            );
            LoadOutcome::Stale { date: stored.date }
        }
        Ok(None) => {
            debug!(path = %path.display(), "no progress file, starting fresh");
            LoadOutcome::NoFile
        }
        Err(e) => {
            warn!(error = %e, "could not load progress, starting fresh");
            LoadOutcome::Failed(e)
        }
    };

    Loaded {
        record: DayRecord::fresh(today, pick_quote(rng)),
        outcome,
    }
}

/// Encode a record as 4-space indented JSON
pub fn encode_record(record: &DayRecord) -> StoreResult<String> {
    let mut json = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut json, formatter);
    record
        .serialize(&mut serializer)
        .map_err(StoreError::Encode)?;

    json.push(b'\n');
    String::from_utf8(json)
        .map_err(|e| StoreError::Encode(<serde_json::Error as serde::ser::Error>::custom(e)))
}

/// Write the full record to `path`, replacing any previous content
pub fn save(path: &Path, record: &DayRecord) -> StoreResult<()> {
    let json = encode_record(record)?;
    atomic_write(path, &json).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), questions = record.questions.len(), "saved progress");
    Ok(())
}
