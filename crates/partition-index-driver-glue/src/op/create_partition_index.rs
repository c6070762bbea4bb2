use super::*;

impl Glue {
    pub(crate) async fn exec_create_partition_index(
        &self,
        op: operation::CreatePartitionIndex,
    ) -> Result<Response> {
        let index = GluePartitionIndex::builder()
            .index_name(&op.index.name)
            .set_keys(Some(op.index.keys.clone()))
            .build()
            .map_err(Error::fatal)?;

        self.client
            .create_partition_index()
            .set_catalog_id(self.catalog_id.clone())
            .database_name(&op.table.database)
            .table_name(&op.table.name)
            .partition_index(index)
            .send()
            .await
            .map_err(|e| {
                e.into_catalog_error(NotFoundCause::Table, || {
                    format!("partition index {} on table {}", op.index.name, op.table)
                })
            })?;

        Ok(Response::Ack)
    }
}
