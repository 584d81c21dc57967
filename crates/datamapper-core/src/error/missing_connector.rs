use super::Error;

/// Error when a mapper is built without a connector.
#[derive(Debug)]
pub(super) struct MissingConnectorError;

impl std::error::Error for MissingConnectorError {}

impl core::fmt::Display for MissingConnectorError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("Must provide connector")
    }
}

impl Error {
    pub fn missing_connector() -> Error {
        Error::from(super::ErrorKind::MissingConnector(MissingConnectorError))
    }

    pub fn is_missing_connector(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingConnector(_))
    }
}
