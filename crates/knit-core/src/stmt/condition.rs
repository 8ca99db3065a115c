use super::Value;
use crate::{Error, Result};

use std::str::FromStr;

/// Comparison operator of a [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Like,
    In,
    NotIn,
    IsNull,
    IsNotNull,
}

impl Op {
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "<>",
            Op::Lt => "<",
            Op::Le => "<=",
            Op::Gt => ">",
            Op::Ge => ">=",
            Op::Like => "LIKE",
            Op::In => "IN",
            Op::NotIn => "NOT IN",
            Op::IsNull => "IS NULL",
            Op::IsNotNull => "IS NOT NULL",
        }
    }

    /// Whether the operator takes no right-hand operand.
    pub fn is_unary(self) -> bool {
        matches!(self, Op::IsNull | Op::IsNotNull)
    }
}

impl FromStr for Op {
    type Err = Error;

    fn from_str(s: &str) -> Result<Op> {
        Ok(match s.trim().to_ascii_uppercase().as_str() {
            "=" | "EQ" => Op::Eq,
            "<>" | "!=" | "NEQ" => Op::Ne,
            "<" | "LT" => Op::Lt,
            "<=" | "ELT" => Op::Le,
            ">" | "GT" => Op::Gt,
            ">=" | "EGT" => Op::Ge,
            "LIKE" => Op::Like,
            "IN" => Op::In,
            "NOT IN" => Op::NotIn,
            "NULL" | "IS NULL" => Op::IsNull,
            "NOT NULL" | "IS NOT NULL" => Op::IsNotNull,
            other => {
                return Err(Error::invalid_statement(format!(
                    "unknown operator `{other}`"
                )))
            }
        })
    }
}

/// A `field op value` triple.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: String,
    pub op: Op,
    pub value: Value,
}

impl Condition {
    pub fn new(field: impl Into<String>, op: Op, value: impl Into<Value>) -> Condition {
        Condition {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Condition {
        Condition::new(field, Op::Eq, value)
    }

    /// Whether the field already carries a table qualifier.
    pub fn is_qualified(&self) -> bool {
        self.field.contains('.')
    }
}

/// One entry of a where list, as written by the caller.
///
/// Keyed entries are implicit equalities; condition entries carry their own
/// operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Keyed { key: String, value: Value },
    Condition(Condition),
}

impl Filter {
    pub fn keyed(key: impl Into<String>, value: impl Into<Value>) -> Filter {
        Filter::Keyed {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn condition(field: impl Into<String>, op: Op, value: impl Into<Value>) -> Filter {
        Filter::Condition(Condition::new(field, op, value))
    }

    /// Converts to a condition without touching the field name.
    pub fn into_condition(self) -> Condition {
        match self {
            Filter::Keyed { key, value } => Condition::eq(key, value),
            Filter::Condition(cond) => cond,
        }
    }
}

impl From<Condition> for Filter {
    fn from(value: Condition) -> Self {
        Filter::Condition(value)
    }
}
