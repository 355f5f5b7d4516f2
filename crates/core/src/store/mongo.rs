use super::{PersonId, PersonStore};
use crate::persons::NewPerson;
use crate::{CoreError, CoreResult};
use api_shared::Person;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, Bson, Document};
use mongodb::{Client, Collection};

/// Person store backed by a MongoDB collection.
///
/// The driver's client pools connections internally and is safe to share between concurrent
/// requests; no extra locking is layered on top.
#[derive(Clone, Debug)]
pub struct MongoStore {
    collection: Collection<Document>,
}

/// Shape of a stored person document.
///
/// Numbers are read as `f64` whether the document holds an int32, int64 or double.
#[derive(serde::Deserialize)]
struct PersonDocument {
    #[serde(rename = "_id")]
    id: Bson,
    name: String,
    marks: f64,
    age: f64,
    dob: String,
}

impl MongoStore {
    /// Connect to `uri` and verify the server answers a `ping`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::StorageConnect` if the connection string is invalid or the server does
    /// not respond.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> CoreResult<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| CoreError::StorageConnect(Box::new(e)))?;

        let db = client.database(database);
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| CoreError::StorageConnect(Box::new(e)))?;

        tracing::info!("connected to document store ({database}.{collection})");

        Ok(Self {
            collection: db.collection(collection),
        })
    }
}

#[async_trait]
impl PersonStore for MongoStore {
    async fn insert(&self, person: &NewPerson) -> CoreResult<PersonId> {
        let document = doc! {
            "name": person.name().as_str(),
            "marks": person.marks(),
            "age": person.age(),
            "dob": person.dob().as_str(),
        };

        let result = self
            .collection
            .insert_one(document)
            .await
            .map_err(|e| CoreError::StorageInsert(Box::new(e)))?;

        Ok(PersonId::new(identity_to_string(&result.inserted_id)))
    }

    async fn find_all(&self) -> CoreResult<Vec<Person>> {
        let mut cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| CoreError::StorageRead(Box::new(e)))?;

        let mut persons = Vec::new();
        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| CoreError::StorageRead(Box::new(e)))?
        {
            match decode_person(document) {
                Ok(person) => persons.push(person),
                Err(e) => tracing::warn!("skipping undecodable person document: {e}"),
            }
        }

        Ok(persons)
    }
}

fn decode_person(document: Document) -> Result<Person, bson::de::Error> {
    let stored: PersonDocument = bson::from_document(document)?;

    Ok(Person {
        id: identity_to_string(&stored.id),
        name: stored.name,
        marks: stored.marks,
        age: stored.age,
        dob: stored.dob,
    })
}

/// ObjectIds render as 24 hex characters; string ids are used verbatim.
fn identity_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}
