use super::{Condition, Fields, Join, OrderBy};

/// Accumulated state of a query against one table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    /// Table name, already prefixed
    pub table: String,

    pub alias: Option<String>,

    /// `None` selects every column
    pub fields: Option<Fields>,

    /// Conditions joined with `AND`
    pub filters: Vec<Condition>,

    pub joins: Vec<Join>,

    pub group_by: Vec<String>,

    pub order_by: Vec<OrderBy>,

    pub limit: Option<u64>,

    pub offset: Option<u64>,
}

impl Options {
    pub fn new(table: impl Into<String>) -> Options {
        Options {
            table: table.into(),
            ..Options::default()
        }
    }

    /// The name columns of this table are qualified with: the alias when set,
    /// the table name otherwise.
    pub fn qualifier(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.table)
    }

    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }
}
