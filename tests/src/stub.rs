use datamapper::{async_trait, Connector, Criteria, Error, Options, Record, Result};

/// A connector answering every call with canned responses.
///
/// Without a canned record, `create` echoes the attributes it was given and
/// `update` echoes them merged over the lookup filter.
#[derive(Debug, Default)]
pub struct Stub {
    find: Option<Record>,
    find_all: Vec<Record>,
    create: Option<Record>,
    update: Option<Record>,
    deleted: u64,
    failure: Option<Error>,
}

impl Stub {
    pub fn new() -> Stub {
        Stub::default()
    }

    pub fn find_returns(mut self, record: Record) -> Self {
        self.find = Some(record);
        self
    }

    pub fn find_all_returns(mut self, records: Vec<Record>) -> Self {
        self.find_all = records;
        self
    }

    pub fn create_returns(mut self, record: Record) -> Self {
        self.create = Some(record);
        self
    }

    pub fn update_returns(mut self, record: Record) -> Self {
        self.update = Some(record);
        self
    }

    pub fn delete_returns(mut self, count: u64) -> Self {
        self.deleted = count;
        self
    }

    /// Every call fails with `err`.
    pub fn failing(mut self, err: Error) -> Self {
        self.failure = Some(err);
        self
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Connector for Stub {
    async fn create(&self, _model: &str, attributes: Record, _options: &Options) -> Result<Record> {
        self.check()?;
        Ok(self.create.clone().unwrap_or(attributes))
    }

    async fn find(
        &self,
        _model: &str,
        _criteria: &Criteria,
        _options: &Options,
    ) -> Result<Option<Record>> {
        self.check()?;
        Ok(self.find.clone())
    }

    async fn find_all(
        &self,
        _model: &str,
        _criteria: &Criteria,
        _options: &Options,
    ) -> Result<Vec<Record>> {
        self.check()?;
        Ok(self.find_all.clone())
    }

    async fn update(
        &self,
        _model: &str,
        criteria: &Criteria,
        attributes: Record,
        _options: &Options,
    ) -> Result<Record> {
        self.check()?;
        Ok(self.update.clone().unwrap_or_else(|| {
            let mut record = criteria.filter.clone();
            record.merge(attributes);
            record
        }))
    }

    async fn delete(&self, _model: &str, _criteria: &Criteria, _options: &Options) -> Result<u64> {
        self.check()?;
        Ok(self.deleted)
    }
}
