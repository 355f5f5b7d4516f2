//! Client display state.
//!
//! A pure state machine: it never performs I/O. The [`Controller`](crate::Controller) issues
//! fetches and feeds their outcomes back through [`ClientState::apply`].
//!
//! Every fetch is stamped with a [`Ticket`] carrying a generation number. Only the ticket of the
//! most recently issued fetch may change what is displayed; an older response that arrives late
//! is dropped, so the screen always reflects the last request issued rather than the last
//! response received.

use crate::error::ClientResult;
use crate::pager::Pager;
use api_shared::{Joke, Person};

pub const JOKES_FAILED: &str = "Failed to fetch jokes. Please try again later.";
pub const PERSONS_FAILED: &str = "Failed to fetch persons. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Jokes,
    Persons,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchKind {
    Jokes,
    Persons,
}

impl FetchKind {
    fn failure_message(self) -> &'static str {
        match self {
            FetchKind::Jokes => JOKES_FAILED,
            FetchKind::Persons => PERSONS_FAILED,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    kind: FetchKind,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn kind(&self) -> FetchKind {
        self.kind
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Fetched {
    Jokes(Vec<Joke>),
    Persons(Vec<Person>),
}

#[derive(Clone, Debug)]
pub struct ClientState {
    mode: Mode,
    jokes: Vec<Joke>,
    persons: Vec<Person>,
    loading: bool,
    error: Option<&'static str>,
    pager: Pager,
    generation: u64,
}

impl Default for ClientState {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientState {
    /// Initial state: jokes mode, loading, nothing fetched yet.
    pub fn new() -> Self {
        Self {
            mode: Mode::Jokes,
            jokes: Vec::new(),
            persons: Vec::new(),
            loading: true,
            error: None,
            pager: Pager::default(),
            generation: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn jokes(&self) -> &[Joke] {
        &self.jokes
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// The persons on the current page.
    pub fn visible_persons(&self) -> &[Person] {
        self.pager.window(&self.persons)
    }

    pub fn has_previous_page(&self) -> bool {
        self.pager.has_previous()
    }

    pub fn has_next_page(&self) -> bool {
        self.pager.has_next(self.persons.len())
    }

    /// Switch display mode. Selecting the persons view starts again from the first page.
    pub fn select_mode(&mut self, mode: Mode) {
        self.mode = mode;
        if mode == Mode::Persons {
            self.pager.reset();
        }
    }

    /// Show a locally cached joke batch without going to the network.
    pub fn show_cached_jokes(&mut self, jokes: Vec<Joke>) {
        self.jokes = jokes;
        self.loading = false;
        self.error = None;
    }

    /// Stamp a new fetch. Any ticket issued earlier is superseded from this point on.
    pub fn begin(&mut self, kind: FetchKind) -> Ticket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        Ticket {
            generation: self.generation,
            kind,
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply the outcome of the fetch stamped `ticket`.
    ///
    /// Returns false, leaving the state untouched, when `ticket` has been superseded.
    pub fn apply(&mut self, ticket: Ticket, outcome: ClientResult<Fetched>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(Fetched::Jokes(jokes)) => {
                self.jokes = jokes;
                self.error = None;
            }
            Ok(Fetched::Persons(persons)) => {
                self.persons = persons;
                self.pager.clamp(self.persons.len());
                self.error = None;
            }
            Err(_) => self.error = Some(ticket.kind.failure_message()),
        }
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.pager.next(self.persons.len())
    }

    pub fn previous_page(&mut self) -> bool {
        self.pager.previous()
    }

    /// Jump to a zero-based page, clamped to the last page.
    pub fn go_to_page(&mut self, page: usize) {
        self.pager.go_to(page, self.persons.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    fn person(n: usize) -> Person {
        Person {
            id: format!("id{n}"),
            name: format!("Person {n}"),
            marks: n as f64,
            age: 20.0,
            dob: "2000-01-01".into(),
        }
    }

    fn persons(n: usize) -> Vec<Person> {
        (0..n).map(person).collect()
    }

    fn offline() -> ClientError {
        ClientError::Status {
            status: 500,
            message: "Failed to fetch persons".into(),
        }
    }

    #[test]
    fn test_initial_state_is_loading_jokes() {
        let state = ClientState::new();
        assert_eq!(state.mode(), Mode::Jokes);
        assert!(state.is_loading());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_stale_response_is_dropped_after_newer_one() {
        let mut state = ClientState::new();
        state.select_mode(Mode::Persons);

        let older = state.begin(FetchKind::Persons);
        let newer = state.begin(FetchKind::Persons);

        assert!(state.apply(newer, Ok(Fetched::Persons(persons(2)))));
        assert!(!state.apply(older, Ok(Fetched::Persons(persons(9)))));

        assert_eq!(state.persons().len(), 2);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_response_arriving_first_keeps_loading() {
        let mut state = ClientState::new();

        let older = state.begin(FetchKind::Jokes);
        let newer = state.begin(FetchKind::Persons);

        assert!(!state.apply(older, Err(offline())));
        assert!(state.is_loading(), "newer request is still outstanding");
        assert!(state.error().is_none(), "stale failure must not surface");

        assert!(state.apply(newer, Ok(Fetched::Persons(persons(1)))));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failure_message_matches_request_kind() {
        let mut state = ClientState::new();

        let ticket = state.begin(FetchKind::Persons);
        state.apply(ticket, Err(offline()));
        assert_eq!(state.error(), Some(PERSONS_FAILED));

        let ticket = state.begin(FetchKind::Jokes);
        assert!(state.error().is_none(), "issuing a fetch clears the error");
        state.apply(ticket, Err(offline()));
        assert_eq!(state.error(), Some(JOKES_FAILED));
    }

    #[test]
    fn test_selecting_persons_resets_page() {
        let mut state = ClientState::new();
        state.select_mode(Mode::Persons);
        let ticket = state.begin(FetchKind::Persons);
        state.apply(ticket, Ok(Fetched::Persons(persons(12))));
        state.next_page();
        state.next_page();
        assert_eq!(state.pager().page(), 2);

        state.select_mode(Mode::Jokes);
        state.select_mode(Mode::Persons);

        assert_eq!(state.pager().page(), 0);
    }

    #[test]
    fn test_refetch_keeps_page_and_clamps_when_list_shrinks() {
        let mut state = ClientState::new();
        state.select_mode(Mode::Persons);
        let ticket = state.begin(FetchKind::Persons);
        state.apply(ticket, Ok(Fetched::Persons(persons(12))));
        state.next_page();

        let ticket = state.begin(FetchKind::Persons);
        state.apply(ticket, Ok(Fetched::Persons(persons(13))));
        assert_eq!(state.pager().page(), 1, "growing list keeps the page");

        state.next_page();
        let ticket = state.begin(FetchKind::Persons);
        state.apply(ticket, Ok(Fetched::Persons(persons(4))));
        assert_eq!(state.pager().page(), 0, "shrinking list clamps the page");
    }

    #[test]
    fn test_visible_persons_and_page_controls() {
        let mut state = ClientState::new();
        state.select_mode(Mode::Persons);
        let ticket = state.begin(FetchKind::Persons);
        state.apply(ticket, Ok(Fetched::Persons(persons(7))));

        assert_eq!(state.visible_persons().len(), 5);
        assert!(!state.has_previous_page());
        assert!(state.has_next_page());

        assert!(state.next_page());
        assert_eq!(state.visible_persons().len(), 2);
        assert_eq!(state.visible_persons()[0].name, "Person 5");
        assert!(state.has_previous_page());
        assert!(!state.has_next_page());
        assert!(!state.next_page());
    }

    #[test]
    fn test_cached_jokes_end_loading() {
        let mut state = ClientState::new();
        state.show_cached_jokes(vec![Joke {
            id: 1,
            title: "t".into(),
            content: "c".into(),
        }]);

        assert!(!state.is_loading());
        assert_eq!(state.jokes().len(), 1);
    }
}
