//! Plain-text rendering of [`ClientState`].

use crate::state::{ClientState, Mode};
use std::fmt;

pub const TITLE: &str = "Full Stack Showcase";

/// Render the whole screen for `state`.
pub fn render(state: &ClientState) -> String {
    Screen(state).to_string()
}

/// The screen for one state, written through [`fmt::Display`].
pub struct Screen<'a>(pub &'a ClientState);

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        writeln!(f, "{TITLE}")?;
        writeln!(
            f,
            "{}  {}",
            ModeButton("Jokes", state.mode() == Mode::Jokes),
            ModeButton("Persons", state.mode() == Mode::Persons),
        )?;
        writeln!(f)?;

        if state.is_loading() {
            return writeln!(f, "Loading...");
        }
        if let Some(error) = state.error() {
            return writeln!(f, "{error}");
        }

        match state.mode() {
            Mode::Jokes => write_jokes(state, f),
            Mode::Persons => write_persons(state, f),
        }
    }
}

struct ModeButton(&'static str, bool);

impl fmt::Display for ModeButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeButton(label, true) => write!(f, "[*{label}*]"),
            ModeButton(label, false) => write!(f, "[ {label} ]"),
        }
    }
}

struct PageButton(&'static str, bool);

impl fmt::Display for PageButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageButton(label, true) => write!(f, "<{label}>"),
            PageButton(label, false) => write!(f, "({label})"),
        }
    }
}

fn write_jokes(state: &ClientState, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "JOKES: {}", state.jokes().len())?;
    for joke in state.jokes() {
        writeln!(f, "{}. {}", joke.id, joke.title)?;
        writeln!(f, "   {}", joke.content)?;
    }
    Ok(())
}

fn write_persons(state: &ClientState, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let total = state.persons().len();
    writeln!(f, "Persons: {total}")?;
    for person in state.visible_persons() {
        writeln!(f, "- {}", person.name)?;
        writeln!(f, "  Marks: {}", person.marks)?;
        writeln!(f, "  Age: {}", person.age)?;
        writeln!(f, "  DOB: {}", person.dob)?;
    }

    let pager = state.pager();
    writeln!(
        f,
        "{}  Page {} of {}  {}",
        PageButton("Previous", state.has_previous_page()),
        pager.page() + 1,
        pager.page_count(total),
        PageButton("Next", state.has_next_page()),
    )
}
