use datamapper_core::{
    async_trait, Connector, Criteria, Direction, Error, Options, Record, Result, Value,
};

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Field that receives generated keys.
const ID_FIELD: &str = "id";

/// Connector keeping every record in process memory.
///
/// Records are grouped by model name. `create` assigns an auto-increment
/// `id` unless the record already carries one; filters are field
/// equalities.
#[derive(Debug, Default)]
pub struct Memory {
    store: Mutex<Store>,
}

#[derive(Debug, Default)]
struct Store {
    tables: HashMap<String, Table>,
}

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Record>,
    next_id: i64,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    /// Accepts `memory://` and `memory:` URLs.
    pub fn connect(url: &str) -> Result<Memory> {
        match url.split_once(':') {
            Some(("memory", _)) => Ok(Memory::new()),
            _ => Err(Error::invalid_connection_url(format!(
                "expected a `memory://` url, got `{url}`"
            ))),
        }
    }

    /// Number of records stored for `model`.
    pub fn len(&self, model: &str) -> Result<usize> {
        Ok(self
            .lock()?
            .tables
            .get(model)
            .map_or(0, |table| table.rows.len()))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>> {
        self.store
            .lock()
            .map_err(|_| datamapper_core::err!("memory store lock poisoned"))
    }
}

impl Table {
    fn insert(&mut self, model: &str, mut record: Record) -> Result<Record> {
        match record.get(ID_FIELD).and_then(Value::as_i64) {
            Some(id) => self.next_id = self.next_id.max(id),
            None if record.get(ID_FIELD).is_some_and(|id| !id.is_null()) => {}
            None => {
                let Some(id) = self.next_id.checked_add(1) else {
                    datamapper_core::bail!("id sequence exhausted for {model}");
                };

                record.remove(ID_FIELD);
                self.next_id = id;
                let mut keyed = Record::new();
                keyed.insert(ID_FIELD, id);
                keyed.merge(record);
                record = keyed;
            }
        }

        self.rows.push(record.clone());
        Ok(record)
    }

    /// Indices of matching rows, ordered and windowed per `criteria`.
    fn select(&self, criteria: &Criteria) -> Vec<usize> {
        let mut matched: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.matches(&criteria.filter))
            .map(|(index, _)| index)
            .collect();

        if !criteria.order_by.is_empty() {
            matched.sort_by(|&a, &b| {
                criteria
                    .order_by
                    .iter()
                    .map(|order| {
                        let ordering =
                            compare(self.rows[a].get(&order.field), self.rows[b].get(&order.field));
                        match order.direction {
                            Direction::Asc => ordering,
                            Direction::Desc => ordering.reverse(),
                        }
                    })
                    .find(|ordering| ordering.is_ne())
                    .unwrap_or(Ordering::Equal)
            });
        }

        matched
            .into_iter()
            .skip(criteria.offset.unwrap_or(0))
            .take(criteria.limit.unwrap_or(usize::MAX))
            .collect()
    }
}

/// Nulls and missing fields sort first. Mismatched kinds compare equal.
fn compare(lhs: Option<&Value>, rhs: Option<&Value>) -> Ordering {
    match (lhs.unwrap_or(&Value::Null), rhs.unwrap_or(&Value::Null)) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (a, b) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
    }
}

#[async_trait]
impl Connector for Memory {
    async fn create(&self, model: &str, attributes: Record, _options: &Options) -> Result<Record> {
        let mut store = self.lock()?;
        let record = store
            .tables
            .entry(model.to_string())
            .or_default()
            .insert(model, attributes)?;

        tracing::trace!(model, id = ?record.get(ID_FIELD), "memory insert");
        Ok(record)
    }

    async fn find(
        &self,
        model: &str,
        criteria: &Criteria,
        _options: &Options,
    ) -> Result<Option<Record>> {
        let store = self.lock()?;
        let Some(table) = store.tables.get(model) else {
            return Ok(None);
        };

        Ok(table
            .select(criteria)
            .first()
            .map(|&index| table.rows[index].clone()))
    }

    async fn find_all(
        &self,
        model: &str,
        criteria: &Criteria,
        _options: &Options,
    ) -> Result<Vec<Record>> {
        let store = self.lock()?;
        let Some(table) = store.tables.get(model) else {
            return Ok(vec![]);
        };

        Ok(table
            .select(criteria)
            .into_iter()
            .map(|index| table.rows[index].clone())
            .collect())
    }

    async fn update(
        &self,
        model: &str,
        criteria: &Criteria,
        attributes: Record,
        _options: &Options,
    ) -> Result<Record> {
        let mut store = self.lock()?;

        let mut updated = None;
        if let Some(table) = store.tables.get_mut(model) {
            for index in table.select(criteria) {
                let row = &mut table.rows[index];
                row.merge(attributes.clone());
                updated.get_or_insert_with(|| row.clone());
            }
        }

        tracing::trace!(model, found = updated.is_some(), "memory update");
        updated.ok_or_else(|| {
            Error::record_not_found(format!("model={model} where={:?}", criteria.filter))
        })
    }

    async fn delete(&self, model: &str, criteria: &Criteria, _options: &Options) -> Result<u64> {
        let mut store = self.lock()?;
        let Some(table) = store.tables.get_mut(model) else {
            return Ok(0);
        };

        let mut doomed = table.select(criteria);
        doomed.sort_unstable();
        for &index in doomed.iter().rev() {
            table.rows.remove(index);
        }

        tracing::trace!(model, count = doomed.len(), "memory delete");
        Ok(doomed.len() as u64)
    }
}
