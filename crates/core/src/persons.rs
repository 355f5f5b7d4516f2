//! Person records.
//!
//! Validates incoming person payloads, hands them to the injected [`PersonStore`] and returns
//! records carrying the store-assigned identity. Records are create + read only.
//!
//! ## Numeric policy
//!
//! `marks` and `age` arrive either as JSON numbers or as text. Text is trimmed and parsed; a
//! value that does not denote a finite number is rejected with
//! [`CoreError::InvalidNumber`]. Nothing non-numeric is ever stored.

use crate::store::{PersonId, PersonStore};
use crate::text::NonEmptyText;
use crate::validation::{require_number, require_present, require_text};
use crate::CoreResult;
use api_shared::{AddPersonReq, Person};
use std::sync::Arc;

/// A person payload that passed validation and is ready to persist.
#[derive(Clone, Debug, PartialEq)]
pub struct NewPerson {
    name: NonEmptyText,
    marks: f64,
    age: f64,
    dob: NonEmptyText,
}

impl NewPerson {
    /// Validate a request body.
    ///
    /// All four fields are checked for presence before any numeric conversion, so a payload
    /// missing `dob` reports the missing field even if `marks` is also malformed.
    ///
    /// # Errors
    ///
    /// - `CoreError::MissingField` for the first absent or blank field (name, marks, age, dob)
    /// - `CoreError::InvalidNumber` if marks or age is not numeric
    pub fn from_request(req: AddPersonReq) -> CoreResult<Self> {
        let name = require_text("name", req.name.as_deref())?;
        let marks = require_present("marks", req.marks.as_ref())?;
        let age = require_present("age", req.age.as_ref())?;
        let dob = require_text("dob", req.dob.as_deref())?;

        Ok(Self {
            name,
            marks: require_number("marks", marks)?,
            age: require_number("age", age)?,
            dob,
        })
    }

    pub fn name(&self) -> &NonEmptyText {
        &self.name
    }

    pub fn marks(&self) -> f64 {
        self.marks
    }

    pub fn age(&self) -> f64 {
        self.age
    }

    pub fn dob(&self) -> &NonEmptyText {
        &self.dob
    }

    /// The stored form of this person under `id`.
    pub fn into_person(self, id: &PersonId) -> Person {
        Person {
            id: id.to_string(),
            name: self.name.into_string(),
            marks: self.marks,
            age: self.age,
            dob: self.dob.into_string(),
        }
    }
}

/// Person operations over an injected store.
#[derive(Clone)]
pub struct PersonService {
    store: Arc<dyn PersonStore>,
}

impl PersonService {
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a new person.
    ///
    /// Nothing is written when validation fails.
    ///
    /// # Returns
    ///
    /// The stored record, including the identity assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns a validation error (see [`NewPerson::from_request`]) or
    /// `CoreError::StorageInsert` if the store rejects the write.
    pub async fn add_person(&self, req: AddPersonReq) -> CoreResult<Person> {
        let new_person = NewPerson::from_request(req)?;
        let id = self.store.insert(&new_person).await?;

        tracing::debug!("stored person {id}");

        Ok(new_person.into_person(&id))
    }

    /// All stored persons in insertion order. No server-side paging.
    pub async fn list_persons(&self) -> CoreResult<Vec<Person>> {
        self.store.find_all().await
    }
}
