use super::*;

impl Glue {
    pub(crate) async fn exec_create_database(
        &self,
        op: operation::CreateDatabase,
    ) -> Result<Response> {
        let input = DatabaseInput::builder()
            .name(&op.database.name)
            .set_description(op.database.description.clone())
            .build()
            .map_err(Error::fatal)?;

        self.client
            .create_database()
            .set_catalog_id(self.catalog_id.clone())
            .database_input(input)
            .send()
            .await
            .map_err(|e| {
                e.into_catalog_error(NotFoundCause::Unknown, || {
                    format!("database {}", op.database.name)
                })
            })?;

        Ok(Response::Ack)
    }
}
