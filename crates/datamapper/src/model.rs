use crate::{async_trait, Decision, Options, Record, Result, Value};

/// Describes one attribute of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,

    /// Whether the attribute is written to storage. Computed or derived
    /// attributes set this to `false`.
    pub persistable: bool,
}

impl Field {
    pub const fn new(name: &'static str) -> Field {
        Field {
            name,
            persistable: true,
        }
    }

    /// An attribute that lives on the model only.
    pub const fn transient(name: &'static str) -> Field {
        Field {
            name,
            persistable: false,
        }
    }
}

/// A model the [`Mapper`](crate::Mapper) can load and persist.
///
/// Implementors describe how to move between the model and a flat
/// [`Record`], and may override any lifecycle hook. Hooks run in this order:
///
/// * create: `validate`, `on_before_create`, connector write, `on_after_create`
/// * update: `validate`, `on_before_update`, connector write, `on_after_update`
/// * delete: `on_before_delete`, connector delete, `on_after_delete`
/// * reads: `on_after_find` on every loaded instance
///
/// `validate` and the before-hooks may return [`Decision::Abort`] to stop the
/// operation without writing anything. Errors returned by any hook propagate
/// to the caller.
#[async_trait]
pub trait Persistable: Sized + Send + Sync {
    /// Name the connector stores this model under.
    fn model_name() -> &'static str;

    /// Name of the primary key attribute.
    fn primary_key() -> &'static str {
        "id"
    }

    /// Attributes of the model, not including the primary key.
    ///
    /// # Examples
    ///
    /// Bind the descriptors to a `const` item so the slice is `'static`.
    ///
    /// ```
    /// use datamapper::{record, Field, Persistable, Record, Result};
    ///
    /// struct Tag {
    ///     id: Option<i64>,
    ///     label: String,
    /// }
    ///
    /// impl Persistable for Tag {
    ///     fn model_name() -> &'static str {
    ///         "tag"
    ///     }
    ///
    ///     fn fields() -> &'static [Field] {
    ///         const FIELDS: &[Field] = &[Field::new("label")];
    ///         FIELDS
    ///     }
    ///
    ///     fn from_record(record: Record) -> Result<Self> {
    ///         let mut tag = Tag { id: None, label: String::new() };
    ///         tag.set_attributes(record)?;
    ///         Ok(tag)
    ///     }
    ///
    ///     fn attributes(&self) -> Record {
    ///         record! { "id" => self.id, "label" => &self.label }
    ///     }
    ///
    ///     fn set_attributes(&mut self, record: Record) -> Result<()> {
    ///         for (key, value) in record {
    ///             match &key[..] {
    ///                 "id" => self.id = value.to()?,
    ///                 "label" => self.label = value.to()?,
    ///                 _ => {}
    ///             }
    ///         }
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let tag = Tag { id: Some(3), label: "rust".into() };
    /// assert_eq!(Tag::fields(), [Field::new("label")]);
    /// assert_eq!(tag.persistable_attributes(), record! { "label" => "rust" });
    /// ```
    fn fields() -> &'static [Field];

    /// Build an instance from a record returned by the connector.
    fn from_record(record: Record) -> Result<Self>;

    /// Every attribute currently set, including the primary key.
    fn attributes(&self) -> Record;

    /// Overwrite attributes with the values in `record`.
    fn set_attributes(&mut self, record: Record) -> Result<()>;

    /// Attributes sent to the connector on create and update.
    fn persistable_attributes(&self) -> Record {
        let fields = Self::fields();
        let mut attributes = self.attributes();
        attributes.retain_keys(|key| {
            fields
                .iter()
                .any(|field| field.persistable && field.name == key)
        });
        attributes
    }

    fn primary_key_value(&self) -> Option<Value> {
        self.attributes()
            .remove(Self::primary_key())
            .filter(|value| !value.is_null())
    }

    /// A model is new until it has been assigned a primary key value.
    fn is_new(&self) -> bool {
        self.primary_key_value().is_none()
    }

    async fn validate(&mut self, _options: &Options) -> Result<Decision> {
        Ok(Decision::Proceed)
    }

    async fn on_after_find(&mut self, _options: &Options) -> Result<()> {
        Ok(())
    }

    async fn on_before_create(&mut self, _options: &Options) -> Result<Decision> {
        Ok(Decision::Proceed)
    }

    async fn on_after_create(&mut self, _options: &Options) -> Result<()> {
        Ok(())
    }

    async fn on_before_update(&mut self, _options: &Options) -> Result<Decision> {
        Ok(Decision::Proceed)
    }

    async fn on_after_update(&mut self, _options: &Options) -> Result<()> {
        Ok(())
    }

    async fn on_before_delete(&mut self, _options: &Options) -> Result<Decision> {
        Ok(Decision::Proceed)
    }

    async fn on_after_delete(&mut self, _options: &Options) -> Result<()> {
        Ok(())
    }
}
