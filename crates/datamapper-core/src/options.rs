use crate::{Record, Value};

/// Call-scoped settings forwarded to hooks and connectors.
///
/// Besides the open `settings` bag, options carry the primary key of the
/// record being acted on. The mapper fills those in on key-based paths
/// (find-by-pk, update, delete) using [`Options::with_primary_key`], which
/// leaves the caller's options untouched.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Options {
    pub primary_key: Option<String>,
    pub primary_key_value: Option<Value>,
    pub settings: Record,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    /// Returns a copy augmented with the primary key name and value.
    pub fn with_primary_key(&self, primary_key: impl Into<String>, value: impl Into<Value>) -> Self {
        Options {
            primary_key: Some(primary_key.into()),
            primary_key_value: Some(value.into()),
            settings: self.settings.clone(),
        }
    }

    /// Layers `self` on top of `defaults`. Values set on `self` win.
    pub fn merged_over(&self, defaults: &Options) -> Self {
        let mut settings = defaults.settings.clone();
        settings.merge(self.settings.clone());

        Options {
            primary_key: self
                .primary_key
                .clone()
                .or_else(|| defaults.primary_key.clone()),
            primary_key_value: self
                .primary_key_value
                .clone()
                .or_else(|| defaults.primary_key_value.clone()),
            settings,
        }
    }
}

impl From<Record> for Options {
    fn from(settings: Record) -> Self {
        Options {
            settings,
            ..Options::default()
        }
    }
}
