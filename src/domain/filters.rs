use crate::domain::board::Board;
use crate::domain::column::{Column, ColumnId};
use std::str::FromStr;

/// Completion-state filter applied on top of search and column filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionFilter {
    #[default]
    All,
    Completed,
    Uncompleted,
}

impl FromStr for CompletionFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(CompletionFilter::All),
            "completed" => Ok(CompletionFilter::Completed),
            "uncompleted" => Ok(CompletionFilter::Uncompleted),
            _ => Err(format!(
                "Invalid completion filter '{}'. Valid filters: all, completed, uncompleted",
                s
            )),
        }
    }
}

/// A filtered view of the board. The columns are copies; the source board is
/// never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredBoard {
    pub columns: Vec<Column>,
    pub total_tasks: usize,
}

/// Computes the board view for the current search term, column subset and
/// completion filter.
///
/// An empty `selected_columns` slice means "all columns"; an empty search
/// term matches every task. Search is a case-insensitive substring match on
/// the task description.
pub fn filter_board(
    board: &Board,
    search_term: &str,
    selected_columns: &[ColumnId],
    completion: CompletionFilter,
) -> FilteredBoard {
    let query = search_term.to_lowercase();

    let columns: Vec<Column> = board
        .columns
        .iter()
        .filter(|col| selected_columns.is_empty() || selected_columns.contains(&col.id))
        .map(|col| {
            let tasks = col
                .tasks
                .iter()
                .filter(|task| {
                    query.is_empty() || task.description.to_lowercase().contains(&query)
                })
                .filter(|task| match completion {
                    CompletionFilter::All => true,
                    CompletionFilter::Completed => task.completed,
                    CompletionFilter::Uncompleted => !task.completed,
                })
                .cloned()
                .collect();

            Column {
                id: col.id.clone(),
                title: col.title.clone(),
                tasks,
            }
        })
        .collect();

    let total_tasks = columns.iter().map(|col| col.tasks.len()).sum();

    FilteredBoard {
        columns,
        total_tasks,
    }
}
