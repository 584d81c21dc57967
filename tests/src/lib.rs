mod exec_log;
pub use exec_log::ExecLog;

pub use logging_connector::{ConnectorOp, LoggingConnector, Operation};


mod stub;
pub use stub::Stub;

use datamapper::{connector::Memory, Connector, Mapper, Options};
use tracing_subscriber::EnvFilter;

/// A mapper wired to a [`LoggingConnector`], plus the log of every call
/// that reached the connector.
pub struct MapperTest {
    pub mapper: Mapper,
    log: ExecLog,
}

impl MapperTest {
    pub fn new(connector: impl Connector) -> MapperTest {
        MapperTest::with_default_options(connector, Options::default())
    }

    pub fn with_default_options(connector: impl Connector, options: Options) -> MapperTest {
        init_tracing();

        let connector = LoggingConnector::new(connector);
        let log = ExecLog::new(connector.ops_log_handle());

        let mapper = Mapper::builder()
            .connector(connector)
            .default_options(options)
            .build()
            .expect("connector was provided");

        MapperTest { mapper, log }
    }

    /// Backed by a fresh in-memory store.
    pub fn memory() -> MapperTest {
        MapperTest::new(Memory::new())
    }

    pub fn stub(stub: Stub) -> MapperTest {
        MapperTest::new(stub)
    }

    pub fn log(&mut self) -> &mut ExecLog {
        &mut self.log
    }
}

/// Route tracing output through the test harness. Set `RUST_LOG` to see it.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
