///! Some utility functions

use chrono::{DateTime, Duration, Utc};

use crate::Item;
use crate::config;

/// The current time
pub fn today() -> DateTime<Utc> {
    Utc::now()
}

/// One day after the current time. This is the default date of a reminder
pub fn tomorrow() -> DateTime<Utc> {
    Utc::now() + Duration::days(1)
}

/// Format a date the way the board displays them (see [`config::DATE_FORMAT`])
pub fn format_date(date: &DateTime<Utc>) -> String {
    let format = config::DATE_FORMAT.lock().unwrap();
    date.format(&format).to_string()
}

/// A debug utility that pretty-prints an item
pub fn print_task(item: &Item) {
    let kind = if item.is_todo() { "T" } else { "R" };
    println!("    {} {}\t{}", kind, item.description(), item.id());
}
