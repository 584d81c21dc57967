#[macro_use]
mod macros;

pub mod connector;
pub use connector::Connector;

mod criteria;
pub use criteria::{Criteria, Direction, OrderBy};

mod error;
pub use error::{Error, IntoError};

mod options;
pub use options::Options;

mod record;
pub use record::Record;

mod value;
pub use value::{FromValue, Value};

/// A Result type alias that uses datamapper's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
