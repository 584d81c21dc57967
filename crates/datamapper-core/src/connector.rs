use crate::{async_trait, Criteria, Options, Record, Result};

use std::{fmt::Debug, sync::Arc};

/// A storage backend.
///
/// The mapper treats connectors as opaque: it hands over the model name, the
/// criteria and the options it was given, and applies whatever record comes
/// back. Errors returned here reach the mapper's caller unchanged.
#[async_trait]
pub trait Connector: Debug + Send + Sync + 'static {
    /// Persist a new record, returning it as stored (including any generated
    /// primary key).
    async fn create(&self, model: &str, attributes: Record, options: &Options) -> Result<Record>;

    /// Read a single record, or `None` when nothing matches.
    async fn find(&self, model: &str, criteria: &Criteria, options: &Options)
        -> Result<Option<Record>>;

    /// Read every matching record.
    async fn find_all(
        &self,
        model: &str,
        criteria: &Criteria,
        options: &Options,
    ) -> Result<Vec<Record>>;

    /// Write `attributes` to the records matching `criteria`, returning the
    /// updated record.
    async fn update(
        &self,
        model: &str,
        criteria: &Criteria,
        attributes: Record,
        options: &Options,
    ) -> Result<Record>;

    /// Remove matching records, returning how many were removed.
    async fn delete(&self, model: &str, criteria: &Criteria, options: &Options) -> Result<u64>;
}

#[async_trait]
impl<T: Connector + ?Sized> Connector for Arc<T> {
    async fn create(&self, model: &str, attributes: Record, options: &Options) -> Result<Record> {
        (**self).create(model, attributes, options).await
    }

    async fn find(
        &self,
        model: &str,
        criteria: &Criteria,
        options: &Options,
    ) -> Result<Option<Record>> {
        (**self).find(model, criteria, options).await
    }

    async fn find_all(
        &self,
        model: &str,
        criteria: &Criteria,
        options: &Options,
    ) -> Result<Vec<Record>> {
        (**self).find_all(model, criteria, options).await
    }

    async fn update(
        &self,
        model: &str,
        criteria: &Criteria,
        attributes: Record,
        options: &Options,
    ) -> Result<Record> {
        (**self).update(model, criteria, attributes, options).await
    }

    async fn delete(&self, model: &str, criteria: &Criteria, options: &Options) -> Result<u64> {
        (**self).delete(model, criteria, options).await
    }
}
