//! # Showcase Core
//!
//! Core business logic for the showcase service.
//!
//! This crate contains the data operations behind the HTTP surface:
//! - Person validation, persistence and listing over an injected document store
//! - The joke proxy that normalises upstream batches
//! - Startup configuration resolved once and passed into services
//!
//! **No API concerns**: HTTP routing, status codes and response bodies belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod jokes;
pub mod persons;
pub mod store;
pub mod text;
pub mod validation;

pub use api_shared::{AddPersonReq, Joke, Person};
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use jokes::{JokeApiClient, JokeService, JokeSource, UpstreamJoke};
pub use persons::{NewPerson, PersonService};
pub use store::{MemoryStore, MongoStore, PersonId, PersonStore};
pub use text::{NonEmptyText, TextError};
