use super::Error;

/// Error raised by a storage connector.
#[derive(Debug)]
pub(super) struct ConnectorError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ConnectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // Display the error and walk its source chain
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a connector failure.
    ///
    /// This is the preferred way for connector implementations to surface
    /// errors from the storage client they wrap. The mapper never wraps or
    /// retries these; they reach the caller as returned.
    pub fn connector(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Connector(ConnectorError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a connector error.
    pub fn is_connector(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Connector(_))
    }
}
