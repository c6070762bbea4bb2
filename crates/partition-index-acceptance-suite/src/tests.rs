pub mod concurrency;
pub mod create;
pub mod disappears;
pub mod drift;
pub mod faults;

/// Ends a scenario early when the setup lacks something it needs.
pub(crate) fn skip(needs: &str) -> anyhow::Result<()> {
    tracing::info!(needs, "scenario skipped");
    Ok(())
}
