use super::{Comma, Delimited, Formatter, Ident, Name, Params, ToSql};

use knit_core::stmt::{Condition, Direction, Join, JoinKind, Op, OrderBy, Value};

impl ToSql for &Condition {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = Name(&self.field);

        match (self.op, &self.value) {
            (Op::IsNull, _) | (Op::Eq, Value::Null) => fmt!(f, name " IS NULL"),
            (Op::IsNotNull, _) | (Op::Ne, Value::Null) => fmt!(f, name " IS NOT NULL"),
            (Op::In | Op::NotIn, value) => {
                let items = match value {
                    Value::List(items) => items.as_slice(),
                    value => std::slice::from_ref(value),
                };

                // `IN ()` is not valid SQL.
                if items.is_empty() {
                    let constant = if self.op == Op::In { "1 = 0" } else { "1 = 1" };
                    fmt!(f, constant);
                } else {
                    fmt!(f, name " " self.op.as_str() " (" Comma(items) ")");
                }
            }
            (op, value) => fmt!(f, name " " op.as_str() " " value),
        }
    }
}

/// `WHERE a AND b`, or nothing for an empty list
pub(super) struct Where<'a>(pub(super) &'a [Condition]);

impl ToSql for Where<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if !self.0.is_empty() {
            fmt!(f, " WHERE " Delimited(self.0, " AND "));
        }
    }
}

/// `<table> [AS <alias>]`
pub(super) struct TableRef<'a>(pub(super) &'a str, pub(super) Option<&'a str>);

impl ToSql for TableRef<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, Ident(self.0));

        if let Some(alias) = self.1 {
            fmt!(f, " AS " Ident(alias));
        }
    }
}

impl ToSql for &Join {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let kind = match self.kind {
            JoinKind::Inner => " INNER JOIN ",
            JoinKind::Left => " LEFT JOIN ",
        };

        fmt!(f, kind TableRef(&self.table, self.alias.as_deref()) " ON " Name(&self.left) " = " Name(&self.right));
    }
}

impl ToSql for &OrderBy {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let direction = match self.direction {
            Direction::Asc => " ASC",
            Direction::Desc => " DESC",
        };

        fmt!(f, Name(&self.field) direction);
    }
}
