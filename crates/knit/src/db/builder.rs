use super::{Db, Shared};
use crate::{driver::Driver, Result};

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    table_name_prefix: String,
}

impl Builder {
    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = prefix.to_string();
        self
    }

    pub fn build(&self, driver: impl Driver) -> Db {
        self.build_boxed(Box::new(driver))
    }

    /// Open a driver from a connection URL, then build.
    pub fn connect(&self, url: &str) -> Result<Db> {
        let driver = super::connect(url)?;
        Ok(self.build_boxed(driver))
    }

    fn build_boxed(&self, driver: Box<dyn Driver>) -> Db {
        tracing::debug!(
            url = %driver.url(),
            prefix = %self.table_name_prefix,
            "building database handle"
        );

        Db {
            shared: Arc::new(Shared {
                driver,
                table_name_prefix: self.table_name_prefix.clone(),
            }),
        }
    }
}
