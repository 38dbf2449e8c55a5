//! Turns a store snapshot into terminal text.
//!
//! List mode is a table (thumbnail, name, date of birth); grid mode packs
//! users into tiles showing the medium picture and the name. Picking one user
//! out of either gives the detail card with everything the source decoded.

use chrono::DateTime;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use userlist_business::{StoreState, User, ViewMode};

#[derive(Tabled)]
struct ListRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Born")]
    born: String,
    #[tabled(rename = "Thumbnail")]
    thumbnail: String,
}

/// Renders the users of `state` in its current view mode.
pub fn render(state: &StoreState, columns: usize) -> String {
    match state.view_mode() {
        ViewMode::List => render_list(state.users()),
        ViewMode::Grid => render_grid(state.users(), columns),
    }
}

pub fn render_list(users: &[User]) -> String {
    let rows: Vec<ListRow> = users
        .iter()
        .enumerate()
        .map(|(i, user)| ListRow {
            index: i + 1,
            name: user.full_name(),
            born: display_date(user.date_of_birth()),
            thumbnail: user.avatar_urls().thumbnail.clone(),
        })
        .collect();

    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    table.to_string()
}

pub fn render_grid(users: &[User], columns: usize) -> String {
    let columns = columns.max(1);
    let mut builder = Builder::default();

    for chunk in users.chunks(columns) {
        let mut row: Vec<String> = chunk
            .iter()
            .map(|user| format!("{}\n{}", user.full_name(), user.avatar_urls().medium))
            .collect();
        // Pad the last row so every row has the same width.
        row.resize(columns, String::new());
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

/// Detail card for one user: title, name, birth date, age and large picture.
pub fn render_detail(user: &User) -> String {
    let age = user.age().map_or_else(|| "-".to_owned(), |age| age.to_string());

    let mut builder = Builder::default();
    builder.push_record(["Title", user.title().unwrap_or("-")]);
    builder.push_record(["Name", &user.full_name()]);
    builder.push_record(["Born", &display_date(user.date_of_birth())]);
    builder.push_record(["Age", &age]);
    builder.push_record(["Picture", &user.avatar_urls().large]);

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// Shows the calendar date when the source gives an RFC 3339 timestamp.
pub fn display_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_owned())
}
