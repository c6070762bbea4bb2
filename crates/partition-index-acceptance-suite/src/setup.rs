use partition_index::{driver::Driver, Config};
use partition_index_driver_memory::Memory;

#[async_trait::async_trait]
pub trait Setup: Send + Sync + 'static {
    /// Connect a new instance of the driver
    async fn driver(&self) -> partition_index::Result<Box<dyn Driver>>;

    /// Manager settings for the scenarios. Timing-sensitive scenarios adjust
    /// individual fields from here.
    fn config(&self) -> Config {
        Config::default()
    }

    /// The in-memory catalog behind [`driver`](Self::driver), if that is what
    /// the setup runs against. Scenarios that need fault injection are
    /// skipped when this returns `None`.
    fn memory(&self) -> Option<&Memory> {
        None
    }
}
