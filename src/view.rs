//! Turning form fields into items, and items back into displayed text

use chrono::{DateTime, NaiveDate, Utc};

use crate::page::Page;
use crate::reminder::NotificationPlatform;
use crate::utils;
use crate::Item;
use crate::Reminder;
use crate::Todo;

/// Which of the two fieldsets the form currently displays
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Todo,
    Reminder,
}

impl ViewMode {
    /// The other mode
    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::Todo => ViewMode::Reminder,
            ViewMode::Reminder => ViewMode::Todo,
        }
    }
}

/// The view of the board.
///
/// It reads the form into model items, and writes the item list and the
/// fieldset states back onto the [`Page`]. It performs no validation: unusable
/// form values are replaced by the model defaults (with a logged warning),
/// never reported as errors.
#[derive(Default, Clone, Debug)]
pub struct TaskView {}

impl TaskView {
    pub fn new() -> Self {
        Self {}
    }

    /// Build a [`Todo`] from the form, then reset the form
    pub fn get_todo(&self, page: &mut Page) -> Todo {
        let description = page.form.todo_description.clone();
        page.form.reset();
        Todo::new(description)
    }

    /// Build a [`Reminder`] from the form, then reset the form.
    ///
    /// A date that does not parse falls back to tomorrow, and an unknown
    /// notification label falls back to EMAIL, since the form is trusted
    /// rather than validated.
    pub fn get_reminder(&self, page: &mut Page) -> Reminder {
        let description = page.form.reminder_description.clone();
        let date = parse_schedule_date(&page.form.schedule_date);
        let notifications = vec![parse_notification(&page.form.notification)];
        page.form.reset();
        Reminder::new(description, date, notifications)
    }

    /// Redraw the whole page: clear the displayed list, append every item's
    /// rendering in insertion order, then activate the fieldset matching `mode`
    pub fn render(&self, tasks: &[Item], mode: ViewMode, page: &mut Page) {
        page.clear_task_list();
        for task in tasks {
            page.append_task_entry(task.render());
        }

        page.todo_set.set_active(mode == ViewMode::Todo);
        page.reminder_set.set_active(mode == ViewMode::Reminder);
    }
}

/// Parse a `YYYY-MM-DD` form value into the reminder's target date
fn parse_schedule_date(value: &str) -> DateTime<Utc> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => DateTime::from_utc(date.and_hms(0, 0, 0), Utc),
        Err(err) => {
            log::warn!("Unusable schedule date {:?} ({}). Defaulting to tomorrow", value, err);
            utils::tomorrow()
        }
    }
}

fn parse_notification(value: &str) -> NotificationPlatform {
    match value.parse() {
        Ok(platform) => platform,
        Err(err) => {
            log::warn!("{}. Defaulting to EMAIL", err);
            NotificationPlatform::Email
        }
    }
}
