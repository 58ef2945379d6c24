//! Validation rules for user-entered text, applied by callers before an
//! action is constructed. The store itself never validates; by the time an
//! action reaches it the text is expected to be sane.

use crate::error::{DriftboardError, Result};

/// Longest accepted column title, in characters
pub const MAX_COLUMN_TITLE_CHARS: usize = 100;

/// Longest accepted task description, in characters
pub const MAX_TASK_DESCRIPTION_CHARS: usize = 500;

/// Trims and collapses internal whitespace runs to single spaces
pub fn sanitize_title(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trims and collapses internal whitespace runs to single spaces
pub fn sanitize_description(description: &str) -> String {
    description.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Checks a column title against the length limit and its sibling titles.
/// Titles are compared case-sensitively after trimming.
pub fn validate_column_title(title: &str, existing_titles: &[&str]) -> Result<()> {
    let trimmed = title.trim();

    if trimmed.is_empty() {
        return Err(DriftboardError::EmptyColumnTitle);
    }

    if title.chars().count() > MAX_COLUMN_TITLE_CHARS {
        return Err(DriftboardError::ColumnTitleTooLong);
    }

    if existing_titles.contains(&trimmed) {
        return Err(DriftboardError::DuplicateColumnTitle);
    }

    Ok(())
}

/// Checks a task description against the length limit
pub fn validate_task_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(DriftboardError::EmptyTaskDescription);
    }

    if description.chars().count() > MAX_TASK_DESCRIPTION_CHARS {
        return Err(DriftboardError::TaskDescriptionTooLong);
    }

    Ok(())
}
