use super::*;
use crate::schema::Database;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateDatabase {
    pub database: Database,
}

impl From<CreateDatabase> for Operation {
    fn from(value: CreateDatabase) -> Self {
        Self::CreateDatabase(value)
    }
}
