//! Constants used throughout the showcase core crate.
//!
//! Names of the persisted collection, upstream endpoints and user-facing messages live here so
//! the server and its tests agree on them.

/// Default database holding the person collection.
pub const DEFAULT_DATABASE_NAME: &str = "INDEX";

/// Default collection holding person documents.
pub const DEFAULT_COLLECTION_NAME: &str = "PERSON";

/// Connection string selecting the process-local store.
pub const MEMORY_STORE_URI: &str = "memory://";

/// Default base URL of the upstream joke provider.
pub const DEFAULT_JOKE_API_URL: &str = "https://v2.jokeapi.dev";

/// Category path segment requested from the upstream provider.
pub const JOKE_CATEGORY: &str = "Any";

/// Joke type filter requested from the upstream provider.
pub const JOKE_TYPE: &str = "twopart";

/// Jokes requested per batch when nothing else is configured.
pub const DEFAULT_JOKE_COUNT: usize = 10;

/// Largest batch the upstream provider serves in one request.
pub const MAX_JOKE_COUNT: usize = 10;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields (name, marks, age, dob) are required!";
pub const PERSON_ADDED_MESSAGE: &str = "Person added successfully!";
pub const JOKES_FAILED_MESSAGE: &str = "Failed to fetch jokes";
pub const PERSONS_FAILED_MESSAGE: &str = "Failed to fetch persons";
pub const ADD_PERSON_FAILED_MESSAGE: &str = "Failed to add person";
