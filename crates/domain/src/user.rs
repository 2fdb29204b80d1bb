use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub created: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String, created: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            name,
            email,
            created,
        }
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}
