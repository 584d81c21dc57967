mod builder;
pub use builder::Builder;

mod connect;

use crate::{
    Connector, Criteria, Decision, Error, Options, Outcome, Persistable, Record, Result, Value,
};

use futures::future::try_join_all;
use tracing::{debug, trace};

use std::sync::Arc;

/// Shared state between all `Mapper` clones.
#[derive(Debug)]
struct Shared {
    connector: Box<dyn Connector>,

    /// Settings layered underneath every call's options.
    default_options: Options,
}

/// Moves models in and out of a [`Connector`], running their lifecycle hooks
/// around each operation.
///
/// Cloning is cheap; clones share the connector.
#[derive(Debug, Clone)]
pub struct Mapper {
    shared: Arc<Shared>,
}

impl Mapper {
    pub fn new(connector: impl Connector) -> Mapper {
        Mapper::from_parts(Box::new(connector), Options::default())
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    fn from_parts(connector: Box<dyn Connector>, default_options: Options) -> Mapper {
        Mapper {
            shared: Arc::new(Shared {
                connector,
                default_options,
            }),
        }
    }

    pub fn connector(&self) -> &dyn Connector {
        &*self.shared.connector
    }

    fn options(&self, options: &Options) -> Options {
        options.merged_over(&self.shared.default_options)
    }

    /// Load a single instance through the connector's single-record read.
    ///
    /// Returns `None` when the connector finds nothing. A found instance has
    /// its `on_after_find` hook run before it is returned.
    pub async fn find<M: Persistable>(
        &self,
        criteria: &Criteria,
        options: &Options,
    ) -> Result<Option<M>> {
        let options = self.options(options);
        debug!(model = M::model_name(), "find");

        let Some(record) = self
            .connector()
            .find(M::model_name(), criteria, &options)
            .await?
        else {
            return Ok(None);
        };

        let mut instance = M::from_record(record)?;
        instance.on_after_find(&options).await?;
        Ok(Some(instance))
    }

    /// Load the instance whose primary key equals `value`.
    ///
    /// The lookup is `{where: {[primary_key]: value}}`, and the options
    /// passed to the connector and hooks carry the primary key.
    pub async fn find_by_pk<M: Persistable>(
        &self,
        value: impl Into<Value>,
        options: &Options,
    ) -> Result<Option<M>> {
        let value = value.into();
        let primary_key = M::primary_key();

        let options = options.with_primary_key(primary_key, value.clone());
        let criteria = Criteria::by_key(primary_key, value);

        self.find(&criteria, &options).await
    }

    /// Load the first instance matching `criteria`, reading through
    /// [`find_all`](Mapper::find_all) with the limit forced to one.
    pub async fn find_one<M: Persistable>(
        &self,
        criteria: &Criteria,
        options: &Options,
    ) -> Result<Option<M>> {
        let criteria = criteria.clone().limit(1);
        let instances = self.find_all(&criteria, options).await?;
        Ok(instances.into_iter().next())
    }

    /// Load every instance matching `criteria`, in the connector's order.
    ///
    /// `on_after_find` runs on all loaded instances concurrently; the call
    /// returns once every hook has completed.
    pub async fn find_all<M: Persistable>(
        &self,
        criteria: &Criteria,
        options: &Options,
    ) -> Result<Vec<M>> {
        let options = self.options(options);
        debug!(model = M::model_name(), "find_all");

        let records = self
            .connector()
            .find_all(M::model_name(), criteria, &options)
            .await?;
        trace!(model = M::model_name(), count = records.len(), "loaded records");

        let mut instances = records
            .into_iter()
            .map(M::from_record)
            .collect::<Result<Vec<_>>>()?;

        try_join_all(
            instances
                .iter_mut()
                .map(|instance| instance.on_after_find(&options)),
        )
        .await?;

        Ok(instances)
    }

    /// Placeholder for loading related models. Always fails.
    pub async fn find_relation<M: Persistable>(
        &self,
        _model: &M,
        relation: &str,
        _criteria: &Criteria,
    ) -> Result<Vec<Record>> {
        Err(Error::unsupported_feature(format!(
            "relation lookup `{}.{relation}`",
            M::model_name()
        )))
    }

    /// Persist a new model.
    ///
    /// Runs `validate` then `on_before_create`; if either declines, nothing
    /// is written and the call resolves to [`Outcome::Aborted`]. Otherwise
    /// the persistable attributes are sent to the connector, the stored
    /// record is applied back onto the model, and `on_after_create` runs.
    pub async fn create<M: Persistable>(&self, model: &mut M, options: &Options) -> Result<Outcome> {
        if !model.is_new() {
            return Err(Error::invalid_state("Cannot create old model"));
        }

        let options = self.options(options);
        debug!(model = M::model_name(), "create");

        if aborted::<M>(model.validate(&options).await?, "validate") {
            return Ok(Outcome::Aborted);
        }

        if aborted::<M>(model.on_before_create(&options).await?, "on_before_create") {
            return Ok(Outcome::Aborted);
        }

        let record = self
            .connector()
            .create(M::model_name(), model.persistable_attributes(), &options)
            .await?;

        model.set_attributes(record)?;
        model.on_after_create(&options).await?;
        Ok(Outcome::Done)
    }

    /// Persist changes to an existing model, addressed by its primary key.
    ///
    /// Follows the same sequence as [`create`](Mapper::create) with the
    /// update hooks. The connector and `on_after_update` receive options
    /// carrying the primary key.
    pub async fn update<M: Persistable>(&self, model: &mut M, options: &Options) -> Result<Outcome> {
        let primary_key_value = existing_key(model, "Cannot update new model")?;

        let options = self.options(options);
        debug!(model = M::model_name(), "update");

        if aborted::<M>(model.validate(&options).await?, "validate") {
            return Ok(Outcome::Aborted);
        }

        if aborted::<M>(model.on_before_update(&options).await?, "on_before_update") {
            return Ok(Outcome::Aborted);
        }

        let primary_key = M::primary_key();
        let criteria = Criteria::by_key(primary_key, primary_key_value.clone());
        let options = options.with_primary_key(primary_key, primary_key_value);

        let record = self
            .connector()
            .update(
                M::model_name(),
                &criteria,
                model.persistable_attributes(),
                &options,
            )
            .await?;

        model.set_attributes(record)?;
        model.on_after_update(&options).await?;
        Ok(Outcome::Done)
    }

    /// Create the model if it is new, update it otherwise.
    pub async fn save<M: Persistable>(&self, model: &mut M, options: &Options) -> Result<Outcome> {
        if model.is_new() {
            self.create(model, options).await
        } else {
            self.update(model, options).await
        }
    }

    /// Remove an existing model from storage by its primary key.
    ///
    /// `on_before_delete` may decline, in which case nothing is removed.
    pub async fn delete_by_pk<M: Persistable>(
        &self,
        model: &mut M,
        options: &Options,
    ) -> Result<Outcome> {
        let primary_key_value = existing_key(model, "Cannot delete new model")?;

        let options = self.options(options);
        debug!(model = M::model_name(), "delete_by_pk");

        if aborted::<M>(model.on_before_delete(&options).await?, "on_before_delete") {
            return Ok(Outcome::Aborted);
        }

        let primary_key = M::primary_key();
        let criteria = Criteria::by_key(primary_key, primary_key_value.clone());
        let options = options.with_primary_key(primary_key, primary_key_value);

        let removed = self
            .connector()
            .delete(M::model_name(), &criteria, &options)
            .await?;
        trace!(model = M::model_name(), removed, "deleted records");

        model.on_after_delete(&options).await?;
        Ok(Outcome::Done)
    }

    /// Remove every record matching `criteria`. No hooks run.
    pub async fn delete_all<M: Persistable>(
        &self,
        criteria: &Criteria,
        options: &Options,
    ) -> Result<u64> {
        let options = self.options(options);
        debug!(model = M::model_name(), "delete_all");

        self.connector()
            .delete(M::model_name(), criteria, &options)
            .await
    }
}

/// Primary key value of a model that has already been created.
fn existing_key<M: Persistable>(model: &M, message: &'static str) -> Result<Value> {
    match model.primary_key_value() {
        Some(value) if !model.is_new() => Ok(value),
        _ => Err(Error::invalid_state(message)),
    }
}

fn aborted<M: Persistable>(decision: Decision, step: &'static str) -> bool {
    if decision.is_abort() {
        debug!(model = M::model_name(), step, "operation aborted");
        return true;
    }
    false
}
