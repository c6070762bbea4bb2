use partition_index::{driver::Driver, Manager};

#[tokio::test]
async fn connect_memory_catalog() {
    let manager = Manager::builder()
        .connect("memory://?settle_reads=0")
        .await
        .unwrap();

    assert_eq!(manager.driver().name(), "memory");
}

#[tokio::test]
async fn unsupported_scheme() {
    let err = Manager::builder()
        .connect("dynamodb://localhost")
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "unsupported catalog; scheme=dynamodb; url=dynamodb://localhost"
    );
}

#[cfg(not(feature = "glue"))]
#[tokio::test]
async fn glue_requires_feature() {
    let err = Manager::builder().connect("glue://").await.unwrap_err();
    assert_eq!(err.to_string(), "`glue` feature not enabled");
}
