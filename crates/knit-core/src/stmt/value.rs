use super::Record;
use crate::{Error, Result};

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit float
    F64(f64),

    /// String value
    String(String),

    /// A list of values, used for `IN` lists and forwarded call results
    List(Vec<Value>),

    /// A single row
    Record(Record),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Name of the variant, used in error messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::I64(_) => "I64",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::List(_) => "List",
            Self::Record(_) => "Record",
        }
    }

    pub fn to_bool(self) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(v),
            Self::I64(v) => Ok(v != 0),
            value => Err(Error::type_conversion(value, "bool")),
        }
    }

    pub fn to_i64(self) -> Result<i64> {
        match self {
            Self::I64(v) => Ok(v),
            Self::Bool(v) => Ok(v as i64),
            value => Err(Error::type_conversion(value, "i64")),
        }
    }

    pub fn to_option_i64(self) -> Result<Option<i64>> {
        match self {
            Self::Null => Ok(None),
            value => value.to_i64().map(Some),
        }
    }

    pub fn to_u64(self) -> Result<u64> {
        match self {
            Self::I64(v) if v >= 0 => Ok(v as u64),
            value => Err(Error::type_conversion(value, "u64")),
        }
    }

    pub fn to_f64(self) -> Result<f64> {
        match self {
            Self::F64(v) => Ok(v),
            Self::I64(v) => Ok(v as f64),
            value => Err(Error::type_conversion(value, "f64")),
        }
    }

    pub fn to_string(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            value => Err(Error::type_conversion(value, "String")),
        }
    }

    pub fn to_option_string(self) -> Result<Option<String>> {
        match self {
            Self::Null => Ok(None),
            value => value.to_string().map(Some),
        }
    }

    pub fn to_list(self) -> Result<Vec<Value>> {
        match self {
            Self::List(v) => Ok(v),
            value => Err(Error::type_conversion(value, "List")),
        }
    }

    pub fn to_record(self) -> Result<Record> {
        match self {
            Self::Record(v) => Ok(v),
            value => Err(Error::type_conversion(value, "Record")),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src as i64)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<u32> for Value {
    fn from(src: u32) -> Self {
        Self::I64(src as i64)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Record> for Value {
    fn from(src: Record) -> Self {
        Self::Record(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(src: Vec<T>) -> Self {
        Self::List(src.into_iter().map(Into::into).collect())
    }
}
