use super::*;

impl Glue {
    pub(crate) async fn exec_get_database(&self, op: operation::GetDatabase) -> Result<Response> {
        let res = self
            .client
            .get_database()
            .set_catalog_id(self.catalog_id.clone())
            .name(&op.name)
            .send()
            .await
            .map_err(|e| {
                e.into_catalog_error(NotFoundCause::Database, || format!("database {}", op.name))
            })?;

        let Some(database) = res.database() else {
            return Err(Error::not_found(
                NotFoundCause::Database,
                format!("database {}", op.name),
            ));
        };

        Ok(Response::Database(schema::Database {
            name: database.name().to_string(),
            description: database.description().map(str::to_string),
        }))
    }
}
