use super::Query;
use crate::{
    stmt::{Direction, Fields, Op, Value},
    Error, Result,
};

use std::vec;

/// Result of a call dispatched by name through [`Query::invoke`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The call returned the query itself, for chaining.
    Query,

    Value(Value),
}

impl Query {
    /// Dispatches a query operation by name.
    ///
    /// Chaining operations (`where`, `field`, `alias`, `order`, `limit`,
    /// `page`, ...) return [`Outcome::Query`]. `select` returns a list of
    /// records, `find` a record or null, and `count` an integer.
    pub fn invoke(&mut self, method: &str, args: Vec<Value>) -> Result<Outcome> {
        let mut args = Args::new(method, args);

        match method {
            "where" | "filter" => match args.len() {
                2 => {
                    let field = args.string()?;
                    let value = args.value()?;
                    self.where_eq(field, value);
                }
                3 => {
                    let field = args.string()?;
                    let op: Op = args.string()?.parse()?;
                    let value = args.value()?;
                    self.filter(field, op, value);
                }
                _ => return Err(args.arity("2 or 3")),
            },
            "where_in" => {
                args.expect(2)?;
                let field = args.string()?;
                let values = args.value()?;
                self.where_in(field, values);
            }
            "field" => match args.len() {
                0 => return Err(args.arity("at least 1")),
                1 => match args.value()? {
                    Value::String(raw) => {
                        self.field(Fields::Raw(raw));
                    }
                    Value::List(items) => {
                        let names = items
                            .into_iter()
                            .map(|item| item.to_string())
                            .collect::<Result<Vec<_>>>()?;
                        self.field(names);
                    }
                    other => return Err(Error::type_conversion(other, "field list")),
                },
                _ => {
                    let names = args.rest_strings()?;
                    self.field(names);
                }
            },
            "alias" => {
                args.expect(1)?;
                let alias = args.string()?;
                self.alias(&alias);
            }
            "group" => {
                args.expect(1)?;
                let field = args.string()?;
                self.group(field);
            }
            "order" => match args.len() {
                1 => {
                    let field = args.string()?;
                    self.order(field, Direction::Asc);
                }
                2 => {
                    let field = args.string()?;
                    let direction: Direction = args.string()?.parse()?;
                    self.order(field, direction);
                }
                _ => return Err(args.arity("1 or 2")),
            },
            // `limit(length)` or `limit(offset, length)`
            "limit" => match args.len() {
                1 => {
                    let limit = args.u64()?;
                    self.limit(limit);
                }
                2 => {
                    let offset = args.u64()?;
                    let limit = args.u64()?;
                    self.offset(offset).limit(limit);
                }
                _ => return Err(args.arity("1 or 2")),
            },
            "page" => {
                args.expect(2)?;
                let page = args.u64()?;
                let per_page = args.u64()?;
                self.page(page, per_page)?;
            }
            "select" => {
                args.expect(0)?;
                let rows = self.select()?;
                return Ok(Outcome::Value(Value::List(
                    rows.into_iter().map(Value::Record).collect(),
                )));
            }
            "find" => {
                args.expect(0)?;
                return Ok(Outcome::Value(self.find()?.into()));
            }
            "count" => {
                args.expect(0)?;
                let count = self.count()?;
                return Ok(Outcome::Value(Value::I64(count as i64)));
            }
            _ => return Err(Error::method_not_found("Query", method)),
        }

        Ok(Outcome::Query)
    }
}

/// Positional arguments of a dispatched call.
struct Args<'a> {
    method: &'a str,
    len: usize,
    values: vec::IntoIter<Value>,
}

impl<'a> Args<'a> {
    fn new(method: &'a str, values: Vec<Value>) -> Self {
        Args {
            method,
            len: values.len(),
            values: values.into_iter(),
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn expect(&self, len: usize) -> Result<()> {
        if self.len == len {
            Ok(())
        } else {
            Err(self.arity(&len.to_string()))
        }
    }

    fn arity(&self, expected: &str) -> Error {
        Error::invalid_statement(format!(
            "`{}` takes {} arguments, got {}",
            self.method, expected, self.len
        ))
    }

    fn value(&mut self) -> Result<Value> {
        self.values
            .next()
            .ok_or_else(|| missing_argument(self.method, self.len))
    }

    fn string(&mut self) -> Result<String> {
        self.value()?.to_string()
    }

    fn u64(&mut self) -> Result<u64> {
        self.value()?.to_u64()
    }

    fn rest_strings(&mut self) -> Result<Vec<String>> {
        self.values.by_ref().map(Value::to_string).collect()
    }
}

fn missing_argument(method: &str, len: usize) -> Error {
    Error::invalid_statement(format!("`{method}` is missing an argument; got {len}"))
}
