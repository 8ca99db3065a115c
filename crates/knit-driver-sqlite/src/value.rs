use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};
use knit_core::{stmt::Value as CoreValue, Error, Result};

/// A borrowed Knit value bound as a statement parameter.
#[derive(Debug)]
pub(crate) struct Param<'a>(pub(crate) &'a CoreValue);

impl ToSql for Param<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self.0 {
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            CoreValue::Bool(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            CoreValue::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            CoreValue::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            CoreValue::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            value => Err(rusqlite::Error::ToSqlConversionFailure(Box::new(
                Error::type_conversion(value.clone(), "SQL parameter"),
            ))),
        }
    }
}

/// Converts a column of a SQLite row to a Knit value.
pub(crate) fn from_sql(value: ValueRef<'_>) -> Result<CoreValue> {
    Ok(match value {
        ValueRef::Null => CoreValue::Null,
        ValueRef::Integer(v) => CoreValue::I64(v),
        ValueRef::Real(v) => CoreValue::F64(v),
        ValueRef::Text(v) => CoreValue::String(
            std::str::from_utf8(v)
                .map_err(crate::driver_error)?
                .to_string(),
        ),
        ValueRef::Blob(_) => {
            return Err(Error::invalid_statement("BLOB columns are not supported"))
        }
    })
}
