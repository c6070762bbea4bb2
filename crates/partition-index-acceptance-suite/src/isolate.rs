use rand::Rng;

/// Generates unique resource names for test isolation.
///
/// Each test gets a name of the form `tf-acc-test-{random}` so that tests
/// running in parallel, or against a shared catalog, never touch each
/// other's databases.
#[derive(Debug, Clone)]
pub struct Isolate {
    name: String,
}

impl Isolate {
    const PREFIX: &'static str = "tf-acc-test";

    pub fn new() -> Self {
        let suffix: u64 = rand::thread_rng().gen();

        Self {
            name: format!("{}-{suffix}", Self::PREFIX),
        }
    }

    /// The name used for this test's database, table and index.
    pub fn name(&self) -> &str {
        &self.name
    }
}
