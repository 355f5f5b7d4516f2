use super::{PersonId, PersonStore};
use crate::persons::NewPerson;
use crate::CoreResult;
use api_shared::Person;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local person store, in insertion order.
///
/// Identities are canonical UUIDs: 32 lowercase hex characters, no hyphens.
#[derive(Debug, Default)]
pub struct MemoryStore {
    persons: RwLock<Vec<Person>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.persons.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.persons.read().await.is_empty()
    }
}

#[async_trait]
impl PersonStore for MemoryStore {
    async fn insert(&self, person: &NewPerson) -> CoreResult<PersonId> {
        let id = PersonId::new(Uuid::new_v4().simple().to_string());

        self.persons.write().await.push(Person {
            id: id.to_string(),
            name: person.name().to_string(),
            marks: person.marks(),
            age: person.age(),
            dob: person.dob().to_string(),
        });

        Ok(id)
    }

    async fn find_all(&self) -> CoreResult<Vec<Person>> {
        Ok(self.persons.read().await.clone())
    }
}
