mod builder;
mod connect;

pub use builder::Builder;
pub use connect::connect;

use crate::{driver::Driver, driver::Response, stmt::Statement, Result};

use std::sync::Arc;

/// A database handle. Cloning is cheap; clones share the driver.
#[derive(Debug, Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    driver: Box<dyn Driver>,

    /// Prepended to every model table name
    table_name_prefix: String,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connect with default settings.
    pub fn connect(url: &str) -> Result<Db> {
        Builder::default().connect(url)
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.shared.driver
    }

    pub fn table_name_prefix(&self) -> &str {
        &self.shared.table_name_prefix
    }

    /// Applies the configured prefix to `name`.
    pub fn table_name(&self, name: &str) -> String {
        format!("{}{}", self.shared.table_name_prefix, name)
    }

    pub fn exec(&self, stmt: Statement) -> Result<Response> {
        self.shared.driver.exec(stmt)
    }
}
