use showcase_core::{JokeService, PersonService};

/// Application state shared across REST API handlers
///
/// Holds the services behind `/api/*`. Both are cheap to clone; the store handle and HTTP
/// client inside them are shared.
#[derive(Clone)]
pub struct AppState {
    pub persons: PersonService,
    pub jokes: JokeService,
}

impl AppState {
    pub fn new(persons: PersonService, jokes: JokeService) -> Self {
        Self { persons, jokes }
    }
}
