use crate::{async_trait, Connector, Criteria, Error, Options, Record, Result};

use url::Url;

/// Built-in connectors, selected by URL scheme.
#[derive(Debug)]
pub(crate) enum Connection {
    #[cfg(feature = "memory")]
    Memory(datamapper_connector_memory::Memory),
}

impl Connection {
    pub(crate) async fn connect(url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        match url.scheme() {
            "memory" => Self::connect_memory(&url),
            scheme => Err(Error::invalid_connection_url(format!(
                "unsupported connector; scheme={scheme}; url={url}"
            ))),
        }
    }

    #[cfg(feature = "memory")]
    fn connect_memory(url: &Url) -> Result<Self> {
        let connector = datamapper_connector_memory::Memory::connect(url.as_str())?;
        Ok(Self::Memory(connector))
    }

    #[cfg(not(feature = "memory"))]
    fn connect_memory(_url: &Url) -> Result<Self> {
        Err(Error::unsupported_feature("`memory` feature not enabled"))
    }
}

macro_rules! match_connector {
    ($self:expr, $connector:pat => $e:expr) => {
        match *$self {
            #[cfg(feature = "memory")]
            Connection::Memory($connector) => $e,
        }
    };
}

#[async_trait]
impl Connector for Connection {
    async fn create(&self, model: &str, attributes: Record, options: &Options) -> Result<Record> {
        #[allow(unused_variables)]
        let (model, attributes, options) = (model, attributes, options);
        match_connector!(self, ref connector => connector.create(model, attributes, options).await)
    }

    async fn find(
        &self,
        model: &str,
        criteria: &Criteria,
        options: &Options,
    ) -> Result<Option<Record>> {
        #[allow(unused_variables)]
        let (model, criteria, options) = (model, criteria, options);
        match_connector!(self, ref connector => connector.find(model, criteria, options).await)
    }

    async fn find_all(
        &self,
        model: &str,
        criteria: &Criteria,
        options: &Options,
    ) -> Result<Vec<Record>> {
        #[allow(unused_variables)]
        let (model, criteria, options) = (model, criteria, options);
        match_connector!(self, ref connector => connector.find_all(model, criteria, options).await)
    }

    async fn update(
        &self,
        model: &str,
        criteria: &Criteria,
        attributes: Record,
        options: &Options,
    ) -> Result<Record> {
        #[allow(unused_variables)]
        let (model, criteria, attributes, options) = (model, criteria, attributes, options);
        match_connector!(self, ref connector => {
            connector.update(model, criteria, attributes, options).await
        })
    }

    async fn delete(&self, model: &str, criteria: &Criteria, options: &Options) -> Result<u64> {
        #[allow(unused_variables)]
        let (model, criteria, options) = (model, criteria, options);
        match_connector!(self, ref connector => connector.delete(model, criteria, options).await)
    }
}
