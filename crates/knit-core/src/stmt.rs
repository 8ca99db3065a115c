mod condition;
pub use condition::{Condition, Filter, Op};

mod delete;
pub use delete::Delete;

mod fields;
pub use fields::{Fields, Selection};

mod insert;
pub use insert::Insert;

mod join;
pub use join::{Join, JoinKind};

mod options;
pub use options::Options;

mod order_by;
pub use order_by::{Direction, OrderBy};

mod qualify;
pub use qualify::{qualify_fields, qualify_where};

mod record;
pub use record::Record;

mod value;
pub use value::Value;

/// A statement ready to be handed to a driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `SELECT <fields> FROM ...`
    Select(Options),

    /// `SELECT COUNT(*) FROM ...`, returning a single `count` column.
    Count(Options),

    Insert(Insert),

    Delete(Delete),
}

impl Statement {
    pub fn is_query(&self) -> bool {
        matches!(self, Statement::Select(_) | Statement::Count(_))
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}
