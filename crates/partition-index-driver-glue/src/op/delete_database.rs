use super::*;

impl Glue {
    pub(crate) async fn exec_delete_database(
        &self,
        op: operation::DeleteDatabase,
    ) -> Result<Response> {
        self.client
            .delete_database()
            .set_catalog_id(self.catalog_id.clone())
            .name(&op.name)
            .send()
            .await
            .map_err(|e| {
                e.into_catalog_error(NotFoundCause::Database, || format!("database {}", op.name))
            })?;

        Ok(Response::Ack)
    }
}
