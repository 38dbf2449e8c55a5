//! Prints store snapshots to the terminal.
//!
//! Line building is kept apart from writing so the wording can be checked
//! without a terminal.

use console::{Term, style};
use std::fmt::Display;
use userlist_business::{StoreState, ViewMode};

use crate::render::{render, render_detail};

/// Writes user list output to stdout.
pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Print an error message with a red X.
    pub fn error(&self, message: impl Display) {
        self.write(&error_line(message));
    }

    /// Prints the whole snapshot: the error, an empty notice, or the users.
    pub fn store_state(&self, state: &StoreState, columns: usize) {
        for line in state_lines(state, columns) {
            self.write(&line);
        }
    }

    /// Prints the detail card of the user at 1-based `position`.
    ///
    /// Returns `false` and prints nothing when no user is loaded there.
    pub fn user_detail(&self, state: &StoreState, position: usize) -> bool {
        let Some(lines) = detail_lines(state, position) else {
            return false;
        };
        for line in lines {
            self.write(&line);
        }
        true
    }

    fn write(&self, line: &str) {
        drop(self.term.write_line(line));
    }
}

fn error_line(message: impl Display) -> String {
    format!("{} {}", style("✗").red().bold(), message)
}

/// Lines describing `state` in its current view mode.
pub fn state_lines(state: &StoreState, columns: usize) -> Vec<String> {
    if let Some(message) = state.error_message() {
        return vec![error_line(message)];
    }
    if state.users().is_empty() {
        return vec![style("No users found.").dim().to_string()];
    }

    let title = match state.view_mode() {
        ViewMode::List => "Users",
        ViewMode::Grid => "Users (grid)",
    };
    let mut lines = vec![
        style(title).bold().cyan().to_string(),
        render(state, columns),
        format!(
            "\n{}: {}",
            style("Total").bold(),
            style(format!("{} user(s)", state.users().len())).cyan()
        ),
    ];
    if state.is_exhausted() {
        lines.push(format!(
            "{} Reached the end of the list",
            style("ℹ").blue().bold()
        ));
    }
    lines
}

/// Lines for the user at 1-based `position`, or `None` when out of range.
pub fn detail_lines(state: &StoreState, position: usize) -> Option<Vec<String>> {
    let users = state.users();
    let user = users.get(position.checked_sub(1)?)?;
    Some(vec![
        style(format!("User {position} of {}", users.len()))
            .bold()
            .cyan()
            .to_string(),
        render_detail(user),
    ])
}
