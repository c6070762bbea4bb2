use crate::prelude::*;
use pretty_assertions::assert_eq;

use partition_index::Applied;

pub async fn modified_keys_are_replaced(test: &mut Test) -> Result<()> {
    let fixture = test.fixture().await?;
    test.manager().create(&fixture.spec).await?;

    let reordered = fixture.spec_with_keys(&["my_column_2", "my_column_1"]);

    let drift = test.manager().detect_drift(&reordered).await?;
    ensure!(drift.requires_replacement(), "expected replacement; drift={drift:?}");

    test.log().clear();

    let applied = test.manager().apply(&reordered).await?;
    ensure!(
        matches!(applied, Applied::Replaced(_)),
        "expected replacement; applied={applied:?}"
    );
    assert_eq!(test.log().count("DeletePartitionIndex"), 1);
    assert_eq!(test.log().count("CreatePartitionIndex"), 1);

    let state = check::exists(test.manager(), &fixture.id()).await?;
    assert_eq!(state.keys, ["my_column_2", "my_column_1"]);

    // Applying again is a no-op
    let drift = test.manager().detect_drift(&reordered).await?;
    ensure!(drift.is_unchanged(), "expected no drift; drift={drift:?}");
    assert_eq!(
        test.manager().apply(&reordered).await?,
        Applied::Unchanged(state)
    );

    Ok(())
}
