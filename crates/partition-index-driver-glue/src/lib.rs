mod error;
use error::SdkErrorExt;

mod op;

use partition_index_core::{
    async_trait,
    driver::{Driver, Operation, Response},
    schema::{Column, IndexStatus, PartitionIndexDescriptor},
    Error, Result,
};

use aws_sdk_glue::{
    types::{
        Column as GlueColumn, DatabaseInput, PartitionIndex as GluePartitionIndex,
        PartitionIndexDescriptor as GluePartitionIndexDescriptor, PartitionIndexStatus,
        StorageDescriptor, TableInput,
    },
    Client,
};
use url::Url;

/// AWS Glue Data Catalog driver.
#[derive(Debug, Clone)]
pub struct Glue {
    /// Handle to the AWS SDK client
    client: Client,

    /// Catalog to operate on. `None` selects the account's default catalog.
    catalog_id: Option<String>,
}

impl Glue {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            catalog_id: None,
        }
    }

    /// Connect using a `glue://` URL.
    ///
    /// `glue://` alone uses the default AWS credential and region chain.
    /// `glue://host:port` sends requests to that endpoint instead, with static
    /// credentials, which is how local catalog emulators are reached. The
    /// `region` and `catalog_id` query parameters are honored in both forms.
    pub async fn connect(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(Error::fatal)?;

        if url.scheme() != "glue" {
            return Err(partition_index_core::err!(
                "connection URL does not have a `glue` scheme; url={url}"
            ));
        }

        use aws_config::{BehaviorVersion, Region};
        use aws_sdk_glue::config::Credentials;

        let mut aws_config = aws_config::defaults(BehaviorVersion::latest());
        let mut catalog_id = None;

        for (key, value) in url.query_pairs() {
            match &*key {
                "region" => aws_config = aws_config.region(Region::new(value.into_owned())),
                "catalog_id" => catalog_id = Some(value.into_owned()),
                other => {
                    return Err(partition_index_core::err!(
                        "unsupported glue connection option `{other}`; url={url}"
                    ))
                }
            }
        }

        if let Some(host) = url.host_str().filter(|host| !host.is_empty()) {
            let mut endpoint_url = format!("http://{host}");

            if let Some(port) = url.port() {
                endpoint_url.push_str(&format!(":{port}"));
            }

            aws_config = aws_config
                .endpoint_url(&endpoint_url)
                .credentials_provider(Credentials::new(
                    "partition-index",
                    "partition-index",
                    None,
                    None,
                    "partition-index-static",
                ));
        }

        let sdk_config = aws_config.load().await;

        tracing::debug!(url = %url, region = ?sdk_config.region(), "connected to glue");

        Ok(Self {
            client: Client::new(&sdk_config),
            catalog_id,
        })
    }
}

#[async_trait]
impl Driver for Glue {
    fn name(&self) -> &'static str {
        "glue"
    }

    async fn exec(&self, op: Operation) -> Result<Response> {
        tracing::trace!(operation = op.name(), "glue exec");

        match op {
            Operation::CreateDatabase(op) => self.exec_create_database(op).await,
            Operation::CreatePartitionIndex(op) => self.exec_create_partition_index(op).await,
            Operation::CreateTable(op) => self.exec_create_table(op).await,
            Operation::DeleteDatabase(op) => self.exec_delete_database(op).await,
            Operation::DeletePartitionIndex(op) => self.exec_delete_partition_index(op).await,
            Operation::DeleteTable(op) => self.exec_delete_table(op).await,
            Operation::GetDatabase(op) => self.exec_get_database(op).await,
            Operation::GetPartitionIndexes(op) => self.exec_get_partition_indexes(op).await,
            Operation::GetTable(op) => self.exec_get_table(op).await,
        }
    }
}

fn glue_column(column: &Column) -> Result<GlueColumn> {
    GlueColumn::builder()
        .name(&column.name)
        .r#type(&column.ty)
        .set_comment(column.comment.clone())
        .build()
        .map_err(Error::fatal)
}

fn column_from_glue(column: &GlueColumn) -> Column {
    Column {
        name: column.name().to_string(),
        ty: column.r#type().unwrap_or_default().to_string(),
        comment: column.comment().map(str::to_string),
    }
}

fn index_status(status: &PartitionIndexStatus) -> Result<IndexStatus> {
    Ok(match status {
        PartitionIndexStatus::Creating => IndexStatus::Creating,
        PartitionIndexStatus::Active => IndexStatus::Active,
        PartitionIndexStatus::Deleting => IndexStatus::Deleting,
        PartitionIndexStatus::Failed => IndexStatus::Failed,
        other => {
            return Err(Error::invalid_result(format!(
                "unknown partition index status `{}`",
                other.as_str()
            )))
        }
    })
}

fn descriptor_from_glue(
    descriptor: &GluePartitionIndexDescriptor,
) -> Result<PartitionIndexDescriptor> {
    let keys = descriptor
        .keys()
        .iter()
        .map(|key| key.name().to_string())
        .collect();

    let mut ret = PartitionIndexDescriptor::new(
        descriptor.index_name(),
        keys,
        index_status(descriptor.index_status())?,
    );

    ret.backfill_errors = descriptor
        .backfill_errors()
        .iter()
        .map(|err| match err.code() {
            Some(code) => format!("{} ({} partitions)", code.as_str(), err.partitions().len()),
            None => format!("backfill error ({} partitions)", err.partitions().len()),
        })
        .collect();

    Ok(ret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_glue::types::KeySchemaElement;

    fn key(name: &str, ty: &str) -> KeySchemaElement {
        KeySchemaElement::builder()
            .name(name)
            .r#type(ty)
            .build()
            .unwrap()
    }

    #[test]
    fn descriptor_keeps_key_order() {
        let descriptor = GluePartitionIndexDescriptor::builder()
            .index_name("idx")
            .keys(key("my_column_2", "string"))
            .keys(key("my_column_1", "int"))
            .index_status(PartitionIndexStatus::Creating)
            .build()
            .unwrap();

        let descriptor = descriptor_from_glue(&descriptor).unwrap();
        assert_eq!(descriptor.name, "idx");
        assert_eq!(descriptor.keys, ["my_column_2", "my_column_1"]);
        assert_eq!(descriptor.status, IndexStatus::Creating);
        assert!(descriptor.backfill_errors.is_empty());
    }

    #[test]
    fn unknown_status_is_an_invalid_result() {
        let err = index_status(&PartitionIndexStatus::from("PAUSED")).unwrap_err();
        assert!(err.is_invalid_result());
    }

    #[test]
    fn columns_round_trip() {
        let column = Column::new("my_column_1", "int").comment("my_column1_comment");
        let glue = glue_column(&column).unwrap();
        assert_eq!(column_from_glue(&glue), column);
    }

    #[tokio::test]
    async fn connect_rejects_other_schemes() {
        assert!(Glue::connect("memory://").await.is_err());
        assert!(Glue::connect("glue://?flavor=x").await.is_err());
    }
}
