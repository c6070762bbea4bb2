use super::*;

impl Glue {
    pub(crate) async fn exec_create_table(&self, op: operation::CreateTable) -> Result<Response> {
        let table = &op.table;

        let columns = table
            .columns
            .iter()
            .map(glue_column)
            .collect::<Result<Vec<_>>>()?;

        let partition_keys = table
            .partition_keys
            .iter()
            .map(glue_column)
            .collect::<Result<Vec<_>>>()?;

        let input = TableInput::builder()
            .name(&table.name)
            .set_table_type(table.table_type.clone())
            .storage_descriptor(
                StorageDescriptor::builder()
                    .set_columns(Some(columns))
                    .build(),
            )
            .set_partition_keys(Some(partition_keys))
            .build()
            .map_err(Error::fatal)?;

        self.client
            .create_table()
            .set_catalog_id(self.catalog_id.clone())
            .database_name(&table.database)
            .table_input(input)
            .send()
            .await
            .map_err(|e| {
                e.into_catalog_error(NotFoundCause::Database, || {
                    format!("table {}", table.table_ref())
                })
            })?;

        Ok(Response::Ack)
    }
}
