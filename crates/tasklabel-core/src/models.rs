//! Data models for tasklabel.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

// =============================================================================
// SETTINGS
// =============================================================================

/// Contents of the settings store.
///
/// Only `taskClasses` is interpreted; every other top-level field is carried
/// through unchanged when the file is rewritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Allowed classification labels, in insertion order.
    #[serde(rename = "taskClasses")]
    pub task_classes: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl Settings {
    /// Build settings holding only the given categories.
    pub fn with_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            task_classes: categories.into_iter().map(Into::into).collect(),
            extra: Map::new(),
        }
    }

    /// Exact-match membership test. No case or whitespace folding.
    pub fn has_category(&self, name: &str) -> bool {
        self.task_classes.iter().any(|c| c == name)
    }

    /// Append `name` unless already present. Returns whether it was added.
    pub fn push_category(&mut self, name: &str) -> bool {
        if self.has_category(name) {
            return false;
        }
        self.task_classes.push(name.to_string());
        true
    }
}

/// Request body for `POST /add_category`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddCategoryRequest {
    pub category: String,
}

// =============================================================================
// CLASSIFICATIONS
// =============================================================================

/// One saved classification.
///
/// Held as the JSON object that was sent, so every key (including an
/// explicit `"classification": null`) survives a rewrite of the store in its
/// original order. The only constraint is a string `task`, the natural key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, JsonValue>", into = "Map<String, JsonValue>")]
pub struct ClassificationRecord {
    fields: Map<String, JsonValue>,
}

impl ClassificationRecord {
    pub fn new(task: impl Into<String>, classification: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("task".to_string(), JsonValue::String(task.into()));
        fields.insert(
            "classification".to_string(),
            JsonValue::String(classification.into()),
        );
        Self { fields }
    }

    pub fn task(&self) -> &str {
        self.fields
            .get("task")
            .and_then(JsonValue::as_str)
            .unwrap_or_default()
    }

    /// The raw `classification` value; `None` when the key is absent.
    pub fn classification_value(&self) -> Option<&JsonValue> {
        self.fields.get("classification")
    }

    /// The label, when `classification` is a string.
    pub fn classification(&self) -> Option<&str> {
        self.classification_value().and_then(JsonValue::as_str)
    }

    /// Key this record is tallied under in the summary.
    ///
    /// Strings count as themselves. An absent key counts as `"undefined"`,
    /// `null` as `"null"` and any other value as its compact JSON text.
    pub fn summary_label(&self) -> String {
        match self.classification_value() {
            None => "undefined".to_string(),
            Some(JsonValue::String(label)) => label.clone(),
            Some(other) => other.to_string(),
        }
    }
}

impl TryFrom<Map<String, JsonValue>> for ClassificationRecord {
    type Error = String;

    fn try_from(fields: Map<String, JsonValue>) -> std::result::Result<Self, Self::Error> {
        match fields.get("task") {
            Some(JsonValue::String(_)) => Ok(Self { fields }),
            Some(_) => Err("field `task` must be a string".to_string()),
            None => Err("missing field `task`".to_string()),
        }
    }
}

impl From<ClassificationRecord> for Map<String, JsonValue> {
    fn from(record: ClassificationRecord) -> Self {
        record.fields
    }
}

/// Outcome of looking up a task in the classification store.
///
/// A miss is a normal result, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationLookup {
    /// `classification` is the stored value verbatim; `None` when the record
    /// has no `classification` key.
    Found { classification: Option<JsonValue> },
    NotFound,
}

impl ClassificationLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, ClassificationLookup::Found { .. })
    }

    /// The stored label, if the task was found and carries a string one.
    pub fn classification(&self) -> Option<&str> {
        match self {
            ClassificationLookup::Found {
                classification: Some(value),
            } => value.as_str(),
            _ => None,
        }
    }

    /// The stored value for a response body: `null` on a miss or when absent.
    pub fn classification_value(&self) -> JsonValue {
        match self {
            ClassificationLookup::Found {
                classification: Some(value),
            } => value.clone(),
            _ => JsonValue::Null,
        }
    }
}

/// Replace the record with the same `task` in place, or append.
///
/// Returns `true` when an existing record was replaced.
pub fn upsert_record(records: &mut Vec<ClassificationRecord>, record: ClassificationRecord) -> bool {
    match records.iter_mut().find(|r| r.task() == record.task()) {
        Some(existing) => {
            *existing = record;
            true
        }
        None => {
            records.push(record);
            false
        }
    }
}

/// Linear scan for `task`.
pub fn lookup_record(records: &[ClassificationRecord], task: &str) -> ClassificationLookup {
    records
        .iter()
        .find(|r| r.task() == task)
        .map(|r| ClassificationLookup::Found {
            classification: r.classification_value().cloned(),
        })
        .unwrap_or(ClassificationLookup::NotFound)
}

// =============================================================================
// SUMMARY
// =============================================================================

/// Progress summary returned by `GET /classification_summary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationSummary {
    pub total_tasks: i64,
    pub classified_tasks: i64,
    /// `total_tasks - classified_tasks`. Negative when the store holds
    /// records for tasks that are no longer in the corpus.
    pub unclassified_tasks: i64,
    pub classification_counts: BTreeMap<String, i64>,
}

impl ClassificationSummary {
    /// Tally records in a single pass against a corpus of `total_tasks`.
    ///
    /// Every record lands in exactly one bucket (see
    /// [`ClassificationRecord::summary_label`]), so the counts always sum to
    /// `classified_tasks`.
    pub fn from_records(total_tasks: usize, records: &[ClassificationRecord]) -> Self {
        let mut counts: BTreeMap<String, i64> = BTreeMap::new();
        for record in records {
            *counts.entry(record.summary_label()).or_insert(0) += 1;
        }

        let total = total_tasks as i64;
        let classified = records.len() as i64;
        Self {
            total_tasks: total,
            classified_tasks: classified,
            unclassified_tasks: total - classified,
            classification_counts: counts,
        }
    }
}
