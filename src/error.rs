use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while loading a catalog file.
///
/// Line-level variants are collected and reported together; the load keeps
/// going after them. Source-level variants end the attempt. The `Display`
/// output of each variant is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The file could not be opened at all.
    #[error("Could not open file: {}", path.display())]
    SourceUnreadable { path: PathBuf },

    /// The file was opened but reading it failed part way with an I/O error.
    #[error("Could not read file: {}: {reason}", path.display())]
    SourceRead { path: PathBuf, reason: String },

    #[error("Line {line}: Not enough fields")]
    NotEnoughFields { line: usize },

    #[error("Line {line}: Missing course number")]
    MissingNumber { line: usize },

    #[error("Line {line}: Missing course title")]
    MissingTitle { line: usize },

    /// A later line reused a course number; the first occurrence is kept.
    #[error("Line {line}: Duplicate course number: {number}")]
    DuplicateNumber { line: usize, number: String },

    /// The file was readable but not a single record survived validation.
    #[error("No valid course data found in file: {}", path.display())]
    NoValidData { path: PathBuf },
}

impl LoadError {
    /// Whether this error made the whole load fail, as opposed to a skipped line.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            LoadError::SourceUnreadable { .. }
                | LoadError::SourceRead { .. }
                | LoadError::NoValidData { .. }
        )
    }

    /// The 1-based line this error refers to, if it is a line-level error.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::NotEnoughFields { line }
            | LoadError::MissingNumber { line }
            | LoadError::MissingTitle { line }
            | LoadError::DuplicateNumber { line, .. } => Some(*line),
            _ => None,
        }
    }
}
