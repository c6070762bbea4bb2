use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteDatabase {
    pub name: String,
}

impl From<DeleteDatabase> for Operation {
    fn from(value: DeleteDatabase) -> Self {
        Self::DeleteDatabase(value)
    }
}
