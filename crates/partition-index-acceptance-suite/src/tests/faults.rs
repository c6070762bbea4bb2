use crate::prelude::*;
use pretty_assertions::assert_eq;

use partition_index::{driver::Operation, schema::IndexStatus};
use partition_index_driver_memory::{Fault, FaultKind};

pub async fn transient_absorbed(test: &mut Test) -> Result<()> {
    let Some(memory) = test.memory() else {
        return skip("fault injection");
    };

    let fixture = test.fixture().await?;
    test.log().clear();

    memory.inject(Fault::new("GetTable", FaultKind::Throttling, 1));
    memory.inject(Fault::new("CreatePartitionIndex", FaultKind::InternalFailure, 2));
    memory.inject(Fault::new("GetPartitionIndexes", FaultKind::Throttling, 1));

    let state = test.manager().create(&fixture.spec).await?;
    assert_eq!(state.status, IndexStatus::Active);

    assert_eq!(test.log().count("GetTable"), 2);
    assert_eq!(test.log().count("CreatePartitionIndex"), 3);

    Ok(())
}

pub async fn fatal_fails_fast(test: &mut Test) -> Result<()> {
    let Some(memory) = test.memory() else {
        return skip("fault injection");
    };

    let fixture = test.fixture().await?;
    test.log().clear();

    memory.inject(Fault::new("CreatePartitionIndex", FaultKind::AccessDenied, 1));

    let Err(err) = test.manager().create(&fixture.spec).await else {
        bail!("create should fail");
    };
    ensure!(err.is_fatal(), "unexpected error: {err}");

    // One parent lookup, then a single rejected submission
    assert_eq!(test.log().len(), 2);
    let lookup = test.log().pop();
    ensure!(
        matches!(lookup.operation, Operation::GetTable(_)),
        "unexpected call: {lookup:?}"
    );
    let submit = test.log().pop();
    ensure!(
        matches!(submit.operation, Operation::CreatePartitionIndex(_)),
        "unexpected call: {submit:?}"
    );
    ensure!(
        submit.response.as_ref().is_err_and(|err| err.is_fatal()),
        "unexpected response: {submit:?}"
    );

    check::destroyed(test.manager(), &fixture.id()).await
}

pub async fn retries_exhausted(test: &mut Test) -> Result<()> {
    let Some(memory) = test.memory() else {
        return skip("fault injection");
    };

    let fixture = test.fixture().await?;
    test.manager().create(&fixture.spec).await?;
    test.log().clear();

    memory.inject(Fault::new("GetPartitionIndexes", FaultKind::Throttling, u32::MAX));

    let Err(err) = test.manager().read(&fixture.id()).await else {
        bail!("read should give up");
    };
    ensure!(err.is_timeout(), "unexpected error: {err}");

    let max_attempts = test.manager().config().retry.max_attempts as usize;
    assert_eq!(test.log().count("GetPartitionIndexes"), max_attempts);

    Ok(())
}
