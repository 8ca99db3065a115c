use super::Error;

/// A failure reported by a database driver, tagged with the driver's name.
#[derive(Debug)]
pub(super) struct DriverError {
    driver: &'static str,
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}: {}", self.driver, self.inner)?;

        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {err}")?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Wraps a native error from the driver named `driver`.
    ///
    /// Relations pass these through untranslated.
    pub fn driver(driver: &'static str, err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Driver(DriverError {
            driver,
            inner: Box::new(err),
        }))
    }

    pub fn is_driver(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Driver(_))
    }

    /// Name of the driver that raised this error, if it is a driver error.
    pub fn driver_name(&self) -> Option<&'static str> {
        match self.kind() {
            super::ErrorKind::Driver(err) => Some(err.driver),
            _ => None,
        }
    }
}
