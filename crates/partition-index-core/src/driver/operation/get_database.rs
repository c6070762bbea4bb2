use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct GetDatabase {
    pub name: String,
}

impl From<GetDatabase> for Operation {
    fn from(value: GetDatabase) -> Self {
        Self::GetDatabase(value)
    }
}
