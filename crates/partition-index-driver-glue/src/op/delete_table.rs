use super::*;

impl Glue {
    pub(crate) async fn exec_delete_table(&self, op: operation::DeleteTable) -> Result<Response> {
        self.client
            .delete_table()
            .set_catalog_id(self.catalog_id.clone())
            .database_name(&op.table.database)
            .name(&op.table.name)
            .send()
            .await
            .map_err(|e| {
                e.into_catalog_error(NotFoundCause::Table, || format!("table {}", op.table))
            })?;

        Ok(Response::Ack)
    }
}
