mod value;
use value::Param;

use knit_core::{
    driver::{Driver, Response},
    stmt::{Record, Statement, Value},
    Error, Result,
};
use knit_sql::Serializer;
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    sync::Mutex,
};
use url::Url;

#[derive(Debug)]
pub struct Sqlite {
    location: Location,
    connection: Mutex<RusqliteConnection>,
}

#[derive(Debug)]
enum Location {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Open a SQLite database from a connection URL.
    ///
    /// `sqlite::memory:` opens a fresh in-memory database, `sqlite:<path>`
    /// opens (or creates) a file.
    pub fn connect(url: &str) -> Result<Self> {
        let parsed =
            Url::parse(url).map_err(|err| Error::invalid_connection_url(url, err.to_string()))?;

        if parsed.scheme() != "sqlite" {
            return Err(Error::unsupported_scheme(url, parsed.scheme()));
        }

        if parsed.path() == ":memory:" {
            Self::in_memory()
        } else {
            Self::open(parsed.path())
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(driver_error)?;

        Ok(Self {
            location: Location::InMemory,
            connection: Mutex::new(connection),
        })
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path.as_ref()).map_err(driver_error)?;

        Ok(Self {
            location: Location::File(path.as_ref().to_path_buf()),
            connection: Mutex::new(connection),
        })
    }

    /// Run raw SQL, typically schema setup. Statements are separated by `;`.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.lock()?.execute_batch(sql).map_err(driver_error)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, RusqliteConnection>> {
        self.connection
            .lock()
            .map_err(|_| knit_core::err!("sqlite connection mutex poisoned"))
    }
}

impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match &self.location {
            Location::InMemory => Cow::Borrowed("sqlite::memory:"),
            Location::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn exec(&self, stmt: Statement) -> Result<Response> {
        let mut params: Vec<Value> = vec![];
        let sql = Serializer::sqlite().serialize(&stmt, &mut params);

        tracing::debug!(sql = %sql, params = params.len(), "executing statement");

        let connection = self.lock()?;
        let mut prepared = connection.prepare_cached(&sql).map_err(driver_error)?;
        let bound = rusqlite::params_from_iter(params.iter().map(Param));

        if !stmt.is_query() {
            let count = prepared.execute(bound).map_err(driver_error)?;
            return Ok(Response::count(count as u64));
        }

        let columns: Vec<String> = prepared
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let mut rows = prepared.query(bound).map_err(driver_error)?;
        let mut records = vec![];

        while let Some(row) = rows.next().map_err(driver_error)? {
            let mut record = Record::new();

            for (index, column) in columns.iter().enumerate() {
                let value = row.get_ref(index).map_err(driver_error)?;
                record.set(column.as_str(), value::from_sql(value)?);
            }

            records.push(record);
        }

        Ok(Response::rows(records))
    }
}

pub(crate) fn driver_error(err: impl std::error::Error + Send + Sync + 'static) -> Error {
    Error::driver("sqlite", err)
}
