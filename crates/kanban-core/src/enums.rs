//! Task type and task status enums.
//!
//! Both enums serialize to their capitalized variant name (`"Epic"`,
//! `"Draft"`, ...), which is the exact string stored in documents. They are
//! closed: an unrecognized string fails to parse instead of flowing through.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// TaskType
// ---------------------------------------------------------------------------

/// Granularity of a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TaskType {
    /// A high-level goal that is broken down into smaller records.
    Epic,
    /// A standalone unit of work.
    Task,
    /// A smaller unit of work that belongs to a larger one.
    Subtask,
}

impl TaskType {
    pub const ALL: [Self; 3] = [Self::Epic, Self::Task, Self::Subtask];

    /// Return the string representation used in stored documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Epic => "Epic",
            Self::Task => "Task",
            Self::Subtask => "Subtask",
        }
    }

    /// Match a stored value exactly. Case and whitespace variants are
    /// rejected; use [`FromStr`] for user input.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidValue` unless `s` equals one of the
    /// [`as_str`](Self::as_str) values.
    pub fn from_stored(s: &str) -> Result<Self, CoreError> {
        exact(&Self::ALL, Self::as_str, "type", s)
    }

    /// Board highlight for cards of this type.
    #[must_use]
    pub const fn style(self) -> &'static str {
        match self {
            Self::Epic => "success",
            Self::Task => "info",
            Self::Subtask => "light",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::InvalidValue {
                field: "type".to_string(),
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Lifecycle stage of a task record. Drives board column placement.
///
/// ```text
/// Draft | Open | Active | Complete | Discarded
/// ```
///
/// Any stage may be set from any other; the board imposes no transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TaskStatus {
    /// Still being written up.
    Draft,
    /// Ready to be worked on.
    Open,
    /// Being worked on.
    Active,
    /// Finished.
    Complete,
    /// Abandoned or deemed unnecessary.
    Discarded,
}

impl TaskStatus {
    /// All stages in board column order.
    pub const ALL: [Self; 5] = [
        Self::Draft,
        Self::Open,
        Self::Active,
        Self::Complete,
        Self::Discarded,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Open => "Open",
            Self::Active => "Active",
            Self::Complete => "Complete",
            Self::Discarded => "Discarded",
        }
    }

    /// Match a stored value exactly, like [`TaskType::from_stored`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidValue` unless `s` equals one of the
    /// [`as_str`](Self::as_str) values.
    pub fn from_stored(s: &str) -> Result<Self, CoreError> {
        exact(&Self::ALL, Self::as_str, "status", s)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::InvalidValue {
                field: "status".to_string(),
                value: s.to_string(),
            })
    }
}

fn exact<T: Copy>(
    all: &[T],
    as_str: fn(T) -> &'static str,
    field: &str,
    s: &str,
) -> Result<T, CoreError> {
    all.iter()
        .copied()
        .find(|candidate| as_str(*candidate) == s)
        .ok_or_else(|| CoreError::InvalidValue {
            field: field.to_string(),
            value: s.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(type_epic, TaskType, TaskType::Epic, "Epic");
    test_serde_roundtrip!(type_subtask, TaskType, TaskType::Subtask, "Subtask");
    test_serde_roundtrip!(status_draft, TaskStatus, TaskStatus::Draft, "Draft");
    test_serde_roundtrip!(status_discarded, TaskStatus, TaskStatus::Discarded, "Discarded");

    #[test]
    fn display_matches_as_str() {
        for ty in TaskType::ALL {
            assert_eq!(ty.to_string(), ty.as_str());
        }
        for status in TaskStatus::ALL {
            assert_eq!(status.to_string(), status.as_str());
        }
    }

    #[test]
    fn serde_agrees_with_as_str() {
        for status in TaskStatus::ALL {
            let value = serde_json::to_value(status).unwrap();
            assert_eq!(value, serde_json::Value::String(status.as_str().into()));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("active".parse::<TaskStatus>().unwrap(), TaskStatus::Active);
        assert_eq!(" COMPLETE ".parse::<TaskStatus>().unwrap(), TaskStatus::Complete);
        assert_eq!("subtask".parse::<TaskType>().unwrap(), TaskType::Subtask);
    }

    #[test]
    fn stored_values_match_exactly() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::from_stored(status.as_str()).unwrap(), status);
        }
        assert_eq!(TaskType::from_stored("Epic").unwrap(), TaskType::Epic);
        assert!(TaskStatus::from_stored("active").is_err());
        assert!(TaskStatus::from_stored(" Draft").is_err());
        assert!(TaskType::from_stored("task").is_err());
    }

    #[test]
    fn parse_rejects_unknown_values() {
        let err = "Progress".parse::<TaskStatus>().unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidValue { ref field, ref value } if field == "status" && value == "Progress"
        ));
        assert!("Story".parse::<TaskType>().is_err());
    }

    #[test]
    fn unknown_status_fails_serde() {
        let result = serde_json::from_str::<TaskStatus>("\"TODO\"");
        assert!(result.is_err());
    }

    #[test]
    fn board_columns_in_fixed_order() {
        let names: Vec<_> = TaskStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, ["Draft", "Open", "Active", "Complete", "Discarded"]);
    }

    #[test]
    fn styles_per_type() {
        assert_eq!(TaskType::Epic.style(), "success");
        assert_eq!(TaskType::Task.style(), "info");
        assert_eq!(TaskType::Subtask.style(), "light");
    }
}
