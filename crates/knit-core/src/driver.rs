mod response;
pub use response::Response;

use crate::stmt::Statement;

use std::{borrow::Cow, fmt::Debug};

/// A synchronous database connection able to execute statements.
pub trait Driver: Debug + Send + Sync + 'static {
    /// The URL this driver was opened with.
    fn url(&self) -> Cow<'_, str>;

    /// Execute a statement.
    ///
    /// Queries return rows, everything else returns the number of affected
    /// rows.
    fn exec(&self, stmt: Statement) -> crate::Result<Response>;
}
