use crate::prelude::*;
use pretty_assertions::assert_eq;

use partition_index::{Drift, NotFoundCause};

pub async fn index(test: &mut Test) -> Result<()> {
    let fixture = test.fixture().await?;
    test.manager().create(&fixture.spec).await?;

    check::disappears(test.manager(), &fixture.id()).await?;
    check::disappears(test.manager(), &fixture.id()).await?;

    check::destroyed(test.manager(), &fixture.id()).await?;
    assert_eq!(test.manager().detect_drift(&fixture.spec).await?, Drift::Deleted);

    Ok(())
}

pub async fn table(test: &mut Test) -> Result<()> {
    let fixture = test.fixture().await?;
    test.manager().create(&fixture.spec).await?;

    check::table_disappears(test.manager(), &fixture.table_ref()).await?;

    check::destroyed(test.manager(), &fixture.id()).await?;
    let Err(err) = test.manager().read(&fixture.id()).await else {
        bail!("partition index should be gone with its table");
    };
    assert_eq!(err.not_found_cause(), Some(NotFoundCause::Table));

    assert_eq!(test.manager().detect_drift(&fixture.spec).await?, Drift::Deleted);

    Ok(())
}

pub async fn database(test: &mut Test) -> Result<()> {
    let fixture = test.fixture().await?;
    test.manager().create(&fixture.spec).await?;

    check::database_disappears(test.manager(), &fixture.database.name).await?;

    check::destroyed(test.manager(), &fixture.id()).await?;
    let Err(err) = test.manager().read(&fixture.id()).await else {
        bail!("partition index should be gone with its database");
    };
    assert_eq!(err.not_found_cause(), Some(NotFoundCause::Database));

    // Deleting an index whose database is gone is not an error
    test.manager().delete(&fixture.id()).await?;

    Ok(())
}
