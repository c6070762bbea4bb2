use super::*;

impl Glue {
    pub(crate) async fn exec_get_table(&self, op: operation::GetTable) -> Result<Response> {
        let res = self
            .client
            .get_table()
            .set_catalog_id(self.catalog_id.clone())
            .database_name(&op.table.database)
            .name(&op.table.name)
            .send()
            .await
            .map_err(|e| {
                e.into_catalog_error(NotFoundCause::Table, || format!("table {}", op.table))
            })?;

        let Some(table) = res.table() else {
            return Err(Error::not_found(
                NotFoundCause::Table,
                format!("table {}", op.table),
            ));
        };

        let columns = table
            .storage_descriptor()
            .map(|sd| sd.columns().iter().map(column_from_glue).collect())
            .unwrap_or_default();

        Ok(Response::Table(schema::Table {
            database: op.table.database.clone(),
            name: table.name().to_string(),
            columns,
            partition_keys: table.partition_keys().iter().map(column_from_glue).collect(),
            table_type: table.table_type().map(str::to_string),
        }))
    }
}
