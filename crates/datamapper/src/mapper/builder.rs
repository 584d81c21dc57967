use super::{connect::Connection, Mapper};
use crate::{Connector, Error, Options, Result};

#[derive(Debug, Default)]
pub struct Builder {
    connector: Option<Box<dyn Connector>>,

    /// Settings applied to every call made through the mapper
    default_options: Options,
}

impl Builder {
    pub fn connector(&mut self, connector: impl Connector) -> &mut Self {
        self.connector = Some(Box::new(connector));
        self
    }

    /// Set options every call falls back to. Options passed to an individual
    /// call take precedence.
    pub fn default_options(&mut self, options: Options) -> &mut Self {
        self.default_options = options;
        self
    }

    /// Connect one of the built-in connectors, chosen by URL scheme.
    pub async fn connect(&mut self, url: &str) -> Result<Mapper> {
        let connection = Connection::connect(url).await?;
        self.connector(connection).build()
    }

    pub fn build(&mut self) -> Result<Mapper> {
        let connector = self.connector.take().ok_or_else(Error::missing_connector)?;

        Ok(Mapper::from_parts(
            connector,
            std::mem::take(&mut self.default_options),
        ))
    }
}
