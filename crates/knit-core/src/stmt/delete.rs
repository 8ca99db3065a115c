use super::{Condition, Options};

/// `DELETE FROM <table> [AS <alias>] WHERE ...`
///
/// Joins, ordering and limits on the originating query do not carry over.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,
    pub alias: Option<String>,
    pub filters: Vec<Condition>,
}

impl Delete {
    pub fn from_options(options: &Options) -> Delete {
        Delete {
            table: options.table.clone(),
            alias: options.alias.clone(),
            filters: options.filters.clone(),
        }
    }
}
