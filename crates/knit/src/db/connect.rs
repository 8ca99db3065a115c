use crate::{driver::Driver, Error, Result};

use url::Url;

/// Opens the driver matching the URL scheme.
pub fn connect(url: &str) -> Result<Box<dyn Driver>> {
    let parsed = Url::parse(url).map_err(|err| Error::invalid_connection_url(url, err.to_string()))?;

    match parsed.scheme() {
        "sqlite" => connect_sqlite(url),
        scheme => Err(Error::unsupported_scheme(url, scheme)),
    }
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Box<dyn Driver>> {
    let driver = knit_driver_sqlite::Sqlite::connect(url)?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url(url, "the `sqlite` feature is not enabled"))
}
