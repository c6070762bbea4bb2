use super::*;

impl Glue {
    pub(crate) async fn exec_get_partition_indexes(
        &self,
        op: operation::GetPartitionIndexes,
    ) -> Result<Response> {
        let mut descriptors = vec![];
        let mut next_token = None;

        loop {
            let res = self
                .client
                .get_partition_indexes()
                .set_catalog_id(self.catalog_id.clone())
                .database_name(&op.table.database)
                .table_name(&op.table.name)
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|e| {
                    e.into_catalog_error(NotFoundCause::Table, || format!("table {}", op.table))
                })?;

            for descriptor in res.partition_index_descriptor_list() {
                descriptors.push(descriptor_from_glue(descriptor)?);
            }

            match res.next_token() {
                Some(token) if !token.is_empty() => next_token = Some(token.to_string()),
                _ => break,
            }
        }

        Ok(Response::PartitionIndexes(descriptors))
    }
}
