use crate::prelude::*;
use pretty_assertions::assert_eq;

use partition_index_driver_memory::{Fault, FaultKind};

/// Two creates of the same index race; the catalog lets exactly one through.
pub async fn same_name_create(test: &mut Test) -> Result<()> {
    let fixture = test.fixture().await?;
    let manager = test.manager().clone();

    let (a, b) = tokio::join!(
        manager.create(&fixture.spec),
        manager.create(&fixture.spec)
    );

    let (state, err) = match (a, b) {
        (Ok(state), Err(err)) | (Err(err), Ok(state)) => (state, err),
        (a, b) => bail!("expected exactly one create to succeed; a={a:?} b={b:?}"),
    };

    ensure!(err.is_already_exists(), "unexpected error: {err}");
    assert_eq!(state.keys, fixture.spec.keys);
    assert_eq!(test.log().count("CreatePartitionIndex"), 2);

    Ok(())
}

/// A throttled racer retries into the index the other one created and must
/// not mistake it for its own.
pub async fn same_name_create_after_throttling(test: &mut Test) -> Result<()> {
    let Some(memory) = test.memory() else {
        return skip("fault injection");
    };

    let fixture = test.fixture().await?;
    let manager = test.manager().clone();

    memory.inject(Fault::new("CreatePartitionIndex", FaultKind::Throttling, 1));

    let (a, b) = tokio::join!(
        manager.create(&fixture.spec),
        manager.create(&fixture.spec)
    );

    let Some(err) = (match (a, b) {
        (Ok(_), Err(err)) | (Err(err), Ok(_)) => Some(err),
        _ => None,
    }) else {
        bail!("expected exactly one create to succeed");
    };

    ensure!(err.is_already_exists(), "unexpected error: {err}");
    assert_eq!(test.log().count("CreatePartitionIndex"), 3);

    Ok(())
}
