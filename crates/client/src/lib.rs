//! # Showcase Client
//!
//! Terminal client for the showcase REST API.
//!
//! It shows either the current joke batch or a paginated person list, keeps the most recent joke
//! batch in a local cache file, and walks the user through adding a person.
//!
//! [`ClientState`] holds what is displayed and never performs I/O. [`Controller`] issues fetches
//! through a [`Backend`] and applies their outcomes so that only the latest request can change the
//! screen. [`view::render`] turns the state into text.

pub mod api;
pub mod cache;
pub mod controller;
pub mod error;
pub mod pager;
pub mod prompt;
pub mod state;
pub mod view;

pub use api::{Backend, HttpBackend};
pub use cache::JokeCache;
pub use controller::{AddOutcome, Controller};
pub use error::{ClientError, ClientResult};
pub use pager::{Pager, PAGE_SIZE};
pub use prompt::{Prompter, Terminal};
pub use state::{ClientState, Mode};
