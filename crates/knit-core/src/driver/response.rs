use crate::{stmt::Record, Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Number of affected rows
    Count(u64),

    Rows(Vec<Record>),
}

impl Response {
    pub fn count(count: u64) -> Response {
        Response::Count(count)
    }

    pub fn rows(rows: Vec<Record>) -> Response {
        Response::Rows(rows)
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Response::Count(count) => Ok(count),
            Response::Rows(_) => Err(Error::from_args(format_args!(
                "invalid result: expected Count, got Rows"
            ))),
        }
    }

    pub fn into_rows(self) -> Result<Vec<Record>> {
        match self {
            Response::Rows(rows) => Ok(rows),
            Response::Count(_) => Err(Error::from_args(format_args!(
                "invalid result: expected Rows, got Count"
            ))),
        }
    }
}
