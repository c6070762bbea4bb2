use super::*;

impl Glue {
    pub(crate) async fn exec_delete_partition_index(
        &self,
        op: operation::DeletePartitionIndex,
    ) -> Result<Response> {
        self.client
            .delete_partition_index()
            .set_catalog_id(self.catalog_id.clone())
            .database_name(&op.table.database)
            .table_name(&op.table.name)
            .index_name(&op.index_name)
            .send()
            .await
            .map_err(|e| {
                e.into_catalog_error(NotFoundCause::Index, || {
                    format!("partition index {} on table {}", op.index_name, op.table)
                })
            })?;

        Ok(Response::Ack)
    }
}
