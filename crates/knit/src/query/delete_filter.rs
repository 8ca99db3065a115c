use crate::stmt::{Filter, Value};

/// Extra scoping for [`Query::delete`](super::Query::delete).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeleteFilter {
    /// Use only the query's own conditions
    #[default]
    None,

    /// Allow a delete with no condition
    Force,

    /// Match one primary key
    Key(Value),

    /// Match any of the primary keys
    Keys(Vec<Value>),

    Filters(Vec<Filter>),
}

impl From<bool> for DeleteFilter {
    fn from(force: bool) -> Self {
        if force {
            DeleteFilter::Force
        } else {
            DeleteFilter::None
        }
    }
}

impl From<()> for DeleteFilter {
    fn from(_: ()) -> Self {
        DeleteFilter::None
    }
}

impl From<i64> for DeleteFilter {
    fn from(key: i64) -> Self {
        DeleteFilter::Key(key.into())
    }
}

impl From<&str> for DeleteFilter {
    fn from(key: &str) -> Self {
        DeleteFilter::Key(key.into())
    }
}

impl From<Value> for DeleteFilter {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => DeleteFilter::None,
            Value::Bool(force) => force.into(),
            Value::List(keys) => DeleteFilter::Keys(keys),
            key => DeleteFilter::Key(key),
        }
    }
}

impl From<Vec<Filter>> for DeleteFilter {
    fn from(filters: Vec<Filter>) -> Self {
        DeleteFilter::Filters(filters)
    }
}
