use crate::prelude::*;
use pretty_assertions::assert_eq;

use partition_index::{schema::IndexStatus, ValidationErrorKind};
use std::time::Duration;

pub async fn times_out(test: &mut Test) -> Result<()> {
    let Some(memory) = test.memory() else {
        return skip("index creation that never completes");
    };

    let fixture = test.fixture().await?;
    memory.stall_index_creation();

    let manager = test.manager_with(|config| config.create_timeout(Duration::from_millis(100)));

    let Err(err) = manager.create(&fixture.spec).await else {
        bail!("create should time out");
    };
    ensure!(err.is_timeout(), "unexpected error: {err}");

    // The submitted index is left as the catalog has it
    let state = check::exists(test.manager(), &fixture.id()).await?;
    assert_eq!(state.status, IndexStatus::Creating);

    Ok(())
}

pub async fn cancelled(test: &mut Test) -> Result<()> {
    let Some(memory) = test.memory() else {
        return skip("index creation that never completes");
    };

    let fixture = test.fixture().await?;
    memory.stall_index_creation();

    let res = test
        .manager()
        .create_with_cancel(&fixture.spec, tokio::time::sleep(Duration::from_millis(50)))
        .await;

    let Err(err) = res else {
        bail!("create should be cancelled");
    };
    ensure!(err.is_cancelled(), "unexpected error: {err}");

    check::exists(test.manager(), &fixture.id()).await?;

    Ok(())
}

pub async fn unknown_partition_key(test: &mut Test) -> Result<()> {
    let fixture = test.fixture().await?;
    test.log().clear();

    // `my_column_3` is a regular column, not a partition key
    let spec = fixture.spec_with_keys(&["my_column_1", "my_column_3"]);

    let Err(err) = test.manager().create(&spec).await else {
        bail!("create should be rejected");
    };

    assert_eq!(
        err.validation_kind(),
        Some(&ValidationErrorKind::UnknownPartitionKey {
            key: "my_column_3".to_string(),
            table: fixture.table_ref().to_string(),
            partition_keys: vec!["my_column_1".to_string(), "my_column_2".to_string()],
        })
    );

    // Rejected before anything was submitted
    assert_eq!(test.log().count("CreatePartitionIndex"), 0);
    check::destroyed(test.manager(), &fixture.id()).await
}

pub async fn failed_index(test: &mut Test) -> Result<()> {
    let Some(memory) = test.memory() else {
        return skip("index creation that fails");
    };

    let fixture = test.fixture().await?;
    memory.fail_index_creation("InvalidPartitionTypeDataException (12 partitions)");

    let Err(err) = test.manager().create(&fixture.spec).await else {
        bail!("create should fail");
    };
    ensure!(err.is_index_failed(), "unexpected error: {err}");
    ensure!(
        err.to_string().contains("InvalidPartitionTypeDataException"),
        "backfill errors missing: {err}"
    );

    Ok(())
}
