use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown compass code '{0}'")]
pub struct UnknownCompassCode(pub String);

/// Well-formed JSON that does not have the windrose shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("windrose field missing or not a list")]
    WindroseMissing,
    #[error("missing required fields (date, time, data) in record {record}")]
    MissingRecordFields { record: usize },
    #[error("data in record {record} is not a list")]
    DataNotList { record: usize },
    #[error("record {record} has {found} measurements, expected at least 5")]
    NotEnoughMeasurements { record: usize, found: usize },
    #[error("invalid data structure in measurement {index} of record {record}")]
    InvalidMeasurement { record: usize, index: usize },
    #[error("speed_kph in measurement {index} of record {record} must be a non-negative number")]
    InvalidSpeed { record: usize, index: usize },
    #[error("unknown direction '{code}' in measurement {index} of record {record}")]
    UnknownDirection {
        record: usize,
        index: usize,
        code: String,
    },
}

#[derive(Debug, Error)]
pub enum WindroseError {
    #[error("No file was selected.")]
    NoFileSelected,
    #[error("File selection was cancelled.")]
    UserCancelled,
    #[error("failed to read '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

pub type Result<T, E = WindroseError> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
}

/// A user-facing message produced at an operation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn warning(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Which operation an error surfaced from; picks the dialog title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorContext {
    SelectFile,
    GenerateCharts,
}

impl WindroseError {
    pub fn is_schema(&self) -> bool {
        matches!(self, WindroseError::Schema(_))
    }

    pub fn to_notice(&self, context: ErrorContext) -> Notice {
        match (self, context) {
            (WindroseError::NoFileSelected, ErrorContext::GenerateCharts) => {
                Notice::warning("No File", "Please select a JSON file first.")
            }
            (WindroseError::NoFileSelected | WindroseError::UserCancelled, _) => {
                Notice::warning("File Selection Error", "No file was selected.")
            }
            (WindroseError::InvalidJson(_), ErrorContext::SelectFile) => Notice::warning(
                "Invalid File",
                "The selected file is not a valid JSON file.",
            ),
            (WindroseError::InvalidJson(_), ErrorContext::GenerateCharts) => Notice::warning(
                "Invalid JSON",
                "There was an error parsing the JSON file. Please check the format.",
            ),
            (WindroseError::FileRead { .. }, _) => Notice::warning("File Error", self.to_string()),
            (WindroseError::Schema(err), _) => Notice::warning("Data Format Error", err.to_string()),
        }
    }
}
