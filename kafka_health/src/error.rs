use std::fmt::{Display, Formatter};

/// Returned by [`RecordStore::project`](crate::table::RecordStore::project) when a requested
/// column is absent. `row` is `None` when the header itself lacks the column.
#[derive(Debug)]
pub struct MissingColumnError {
    pub column: String,
    pub row: Option<usize>,
}

impl Display for MissingColumnError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.row {
            Some(row) => write!(f, "column '{}' is missing in row {}", self.column, row),
            None => write!(f, "column '{}' is missing in header", self.column),
        }
    }
}

impl std::error::Error for MissingColumnError {}
