pub mod mapper;
pub use mapper::{Builder, Mapper};

mod model;
pub use model::{Field, Persistable};

mod outcome;
pub use outcome::{Decision, Outcome};

pub use datamapper_core::{
    async_trait, record, Connector, Criteria, Direction, Error, FromValue, OrderBy, Options, Record,
    Result, Value,
};

/// Connector implementations and the trait they implement.
pub mod connector {
    pub use datamapper_core::connector::*;

    #[cfg(feature = "memory")]
    pub use datamapper_connector_memory::Memory;
}
