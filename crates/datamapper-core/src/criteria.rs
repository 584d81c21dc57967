use crate::{Record, Value};

use serde::{Deserialize, Serialize};

/// A structured lookup passed to connectors.
///
/// The mapper only ever builds primary-key criteria itself; everything else
/// is handed to the connector untouched.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    /// Equality constraints, one per field. Serialized as `where`.
    #[serde(rename = "where", default, skip_serializing_if = "Record::is_empty")]
    pub filter: Record,

    /// Maximum number of records to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Number of matching records to skip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_by: Vec<OrderBy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// `{where: {[primary_key]: value}}`
    pub fn by_key(primary_key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new().filter(primary_key, value)
    }

    pub fn filter(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter.insert(field, value);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order_by.push(OrderBy {
            field: field.into(),
            direction,
        });
        self
    }
}
