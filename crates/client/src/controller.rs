//! Client controller.
//!
//! Drives [`ClientState`] from user actions: issues fetches on background tasks, applies their
//! outcomes, keeps the joke cache current and runs the add-person flow.
//!
//! Issuing a fetch aborts the previous in-flight fetch task. A response that was already queued
//! before the abort is still rejected by the state's generation check.

use crate::api::Backend;
use crate::cache::JokeCache;
use crate::error::ClientResult;
use crate::prompt::Prompter;
use crate::state::{ClientState, FetchKind, Fetched, Mode, Ticket};
use api_shared::{AddPersonReq, FieldValue};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

pub const INVALID_MARKS: &str = "Invalid Marks";
pub const INVALID_AGE: &str = "Invalid Age";
pub const INVALID_DOB: &str = "Invalid DOB";
pub const PERSON_ADDED: &str = "User added successfully!";
pub const ADD_FAILED: &str = "Failed to add person.";

type Completion = (Ticket, ClientResult<Fetched>);

/// How an add-person attempt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// The name prompt was left empty; nothing was sent.
    Cancelled,
    /// A later answer failed the client-side check; nothing was sent.
    Rejected(&'static str),
    /// The server stored the person under this identity.
    Added(String),
    /// The server refused or could not be reached.
    Failed,
}

pub struct Controller<B: Backend> {
    backend: Arc<B>,
    cache: JokeCache,
    state: ClientState,
    in_flight: Option<JoinHandle<()>>,
    tx: UnboundedSender<Completion>,
    rx: UnboundedReceiver<Completion>,
}

impl<B: Backend> Controller<B> {
    pub fn new(backend: Arc<B>, cache: JokeCache) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            backend,
            cache,
            state: ClientState::new(),
            in_flight: None,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    /// Initial load: show the cached joke batch if there is one, otherwise fetch.
    pub fn start(&mut self) {
        match self.cache.load() {
            Ok(Some(jokes)) => {
                tracing::info!("loaded {} jokes from {}", jokes.len(), self.cache.path().display());
                self.state.show_cached_jokes(jokes);
            }
            Ok(None) => self.issue(FetchKind::Jokes),
            Err(e) => {
                tracing::warn!("ignoring joke cache: {e}");
                self.issue(FetchKind::Jokes);
            }
        }
    }

    pub fn show_jokes(&mut self) {
        self.state.select_mode(Mode::Jokes);
        self.issue(FetchKind::Jokes);
    }

    pub fn refresh_jokes(&mut self) {
        tracing::debug!("refreshing jokes");
        self.issue(FetchKind::Jokes);
    }

    pub fn show_persons(&mut self) {
        self.state.select_mode(Mode::Persons);
        self.issue(FetchKind::Persons);
    }

    pub fn next_page(&mut self) -> bool {
        self.state.next_page()
    }

    pub fn previous_page(&mut self) -> bool {
        self.state.previous_page()
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.state.go_to_page(page);
    }

    fn issue(&mut self, kind: FetchKind) {
        let ticket = self.state.begin(kind);

        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }

        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let outcome = match kind {
                FetchKind::Jokes => backend.fetch_jokes().await.map(Fetched::Jokes),
                FetchKind::Persons => backend.fetch_persons().await.map(Fetched::Persons),
            };
            // The receiver lives as long as the controller.
            let _ = tx.send((ticket, outcome));
        }));
    }

    fn receive(&mut self, ticket: Ticket, outcome: ClientResult<Fetched>) -> bool {
        if let Err(e) = &outcome {
            tracing::warn!("fetch {} failed: {e}", ticket.generation());
        }

        let fresh_jokes = match &outcome {
            Ok(Fetched::Jokes(jokes)) => Some(jokes.clone()),
            _ => None,
        };

        if !self.state.apply(ticket, outcome) {
            tracing::debug!("dropped superseded response {}", ticket.generation());
            return false;
        }

        if let Some(jokes) = fresh_jokes {
            if let Err(e) = self.cache.store(&jokes) {
                tracing::warn!("failed to cache jokes: {e}");
            }
        }
        true
    }

    /// Wait for the next completed fetch and apply it. Returns whether the display changed.
    ///
    /// Cancel safe; pends forever when nothing is in flight.
    pub async fn next_update(&mut self) -> bool {
        match self.rx.recv().await {
            Some((ticket, outcome)) => self.receive(ticket, outcome),
            None => false,
        }
    }

    /// Wait until the most recently issued fetch has been applied.
    pub async fn settle(&mut self) {
        while self.state.is_loading() {
            match self.rx.recv().await {
                Some((ticket, outcome)) => {
                    self.receive(ticket, outcome);
                }
                None => break,
            }
        }
    }

    /// Apply whatever has already completed without waiting. Returns how many were applied.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok((ticket, outcome)) = self.rx.try_recv() {
            if self.receive(ticket, outcome) {
                applied += 1;
            }
        }
        applied
    }

    /// Collect a new person through four prompts and submit it.
    ///
    /// An empty name cancels silently. An empty or non-numeric marks/age, or an empty date of
    /// birth, is reported with an alert and nothing is sent. After a successful add the person
    /// list is fetched again in full and shown; an existing persons page is kept.
    pub async fn add_person<P>(&mut self, prompter: &mut P) -> AddOutcome
    where
        P: Prompter + ?Sized,
    {
        let Some(name) = answer(prompter, "Enter Name:").await else {
            return AddOutcome::Cancelled;
        };

        let Some(marks) = numeric_answer(prompter, "Enter Marks:").await else {
            prompter.alert(INVALID_MARKS).await;
            return AddOutcome::Rejected("marks");
        };

        let Some(age) = numeric_answer(prompter, "Enter Age:").await else {
            prompter.alert(INVALID_AGE).await;
            return AddOutcome::Rejected("age");
        };

        let Some(dob) = answer(prompter, "Enter DOB (YYYY-MM-DD):").await else {
            prompter.alert(INVALID_DOB).await;
            return AddOutcome::Rejected("dob");
        };

        let req = AddPersonReq {
            name: Some(name),
            marks: Some(FieldValue::Number(marks)),
            age: Some(FieldValue::Number(age)),
            dob: Some(dob),
        };

        match self.backend.add_person(&req).await {
            Ok(res) => {
                prompter.alert(PERSON_ADDED).await;
                if self.state.mode() != Mode::Persons {
                    self.state.select_mode(Mode::Persons);
                }
                self.issue(FetchKind::Persons);
                self.settle().await;
                AddOutcome::Added(res.id)
            }
            Err(e) => {
                tracing::warn!("add person failed: {e}");
                prompter.alert(ADD_FAILED).await;
                AddOutcome::Failed
            }
        }
    }
}

async fn answer<P: Prompter + ?Sized>(prompter: &mut P, message: &str) -> Option<String> {
    prompter
        .prompt(message)
        .await
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
}

async fn numeric_answer<P: Prompter + ?Sized>(prompter: &mut P, message: &str) -> Option<f64> {
    answer(prompter, message)
        .await
        .and_then(|a| FieldValue::Text(a).as_number())
}
