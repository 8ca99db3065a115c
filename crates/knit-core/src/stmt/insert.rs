use super::Record;

/// `INSERT INTO <table> (<columns>) VALUES (<values>)`
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,
    pub record: Record,
}

impl Insert {
    pub fn new(table: impl Into<String>, record: Record) -> Insert {
        Insert {
            table: table.into(),
            record,
        }
    }
}
