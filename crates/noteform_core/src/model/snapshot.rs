//! Save-time note payload.
//!
//! # Responsibility
//! - Define the snapshot handed to the persistence collaborator.
//! - Parse the notebook field with lenient integer semantics.
//!
//! # Invariants
//! - `NoteSnapshot::title` is never empty.
//! - `task_completed <= task_all`.
//! - Notebook parse failures produce `NotebookId::NotANumber`, never an error.

use serde::{Serialize, Serializer};
use uuid::Uuid;

/// Stable identifier of the note being edited.
pub type NoteId = Uuid;

/// Integer notebook reference or the not-a-number marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotebookId {
    Id(i64),
    NotANumber,
}

impl NotebookId {
    /// Parses the raw notebook field.
    ///
    /// Rules:
    /// - leading whitespace is skipped, then an optional `+`/`-` sign;
    /// - `0x`/`0X` switches to base 16;
    /// - the longest run of valid digits is used, trailing text is ignored;
    /// - no digits, or a value outside `i64`, yields `NotANumber`.
    pub fn parse(raw: &str) -> Self {
        let rest = raw.trim_start();
        let (negative, rest) = match rest.as_bytes().first() {
            Some(b'-') => (true, &rest[1..]),
            Some(b'+') => (false, &rest[1..]),
            _ => (false, rest),
        };
        let (radix, digits) = match rest.get(..2) {
            Some("0x") | Some("0X") => (16, &rest[2..]),
            _ => (10, rest),
        };
        let end = digits
            .find(|c: char| !c.is_digit(radix))
            .unwrap_or(digits.len());
        if end == 0 {
            return Self::NotANumber;
        }

        let signed = if negative {
            format!("-{}", &digits[..end])
        } else {
            digits[..end].to_string()
        };
        i64::from_str_radix(&signed, radix)
            .map(Self::Id)
            .unwrap_or(Self::NotANumber)
    }

    pub fn as_id(self) -> Option<i64> {
        match self {
            Self::Id(value) => Some(value),
            Self::NotANumber => None,
        }
    }

    pub fn is_nan(self) -> bool {
        matches!(self, Self::NotANumber)
    }
}

impl Serialize for NotebookId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Id(value) => serializer.serialize_i64(*value),
            Self::NotANumber => serializer.serialize_none(),
        }
    }
}

/// Checklist completion statistics for one markup text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChecklistSummary {
    pub total: usize,
    pub completed: usize,
}

impl ChecklistSummary {
    pub fn pending(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }
}

/// Transient save payload assembled from the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteSnapshot {
    /// Trimmed title, or the untitled sentinel.
    pub title: String,
    /// Trimmed raw markup.
    pub content: String,
    pub notebook_id: NotebookId,
    /// Tags as entered; order and duplicates preserved.
    pub tags: Vec<String>,
    pub task_all: usize,
    pub task_completed: usize,
}

/// Note the form was opened for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingNote {
    pub id: NoteId,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::NotebookId;

    #[test]
    fn notebook_parse_accepts_leading_integer() {
        assert_eq!(NotebookId::parse("42"), NotebookId::Id(42));
        assert_eq!(NotebookId::parse("  7 "), NotebookId::Id(7));
        assert_eq!(NotebookId::parse("-3"), NotebookId::Id(-3));
        assert_eq!(NotebookId::parse("12abc"), NotebookId::Id(12));
        assert_eq!(NotebookId::parse("0x1A"), NotebookId::Id(26));
    }

    #[test]
    fn notebook_parse_falls_back_to_marker() {
        assert!(NotebookId::parse("abc").is_nan());
        assert!(NotebookId::parse("").is_nan());
        assert!(NotebookId::parse("-").is_nan());
        assert!(NotebookId::parse("0x").is_nan());
        assert!(NotebookId::parse("99999999999999999999").is_nan());
    }
}
