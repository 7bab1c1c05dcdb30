//! An in-memory model of the page the board lives in.
//!
//! The board's only boundary is a page with a form (two fieldsets, one per mode),
//! and a list the rendered items end up in. This module models that page as plain
//! data, so that the view can manipulate it and tests can inspect it.

/// The input fields of the submission form.
///
/// Fields hold whatever the user typed, as strings. Nothing here is validated:
/// the view is responsible for making sense of the values (or falling back to
/// defaults when it cannot).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct TaskForm {
    /// Description field of the todo fieldset
    pub todo_description: String,
    /// Description field of the reminder fieldset
    pub reminder_description: String,
    /// Target date of the reminder, as a `YYYY-MM-DD` string (what a date input supplies)
    pub schedule_date: String,
    /// The selected notification platform label (e.g. `EMAIL`)
    pub notification: String,
}

impl TaskForm {
    /// Clear every field, like a form reset after submission
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The display state of one of the two form fieldsets
#[derive(Clone, Debug, PartialEq)]
pub struct Fieldset {
    pub visible: bool,
    pub disabled: bool,
}

impl Fieldset {
    fn active() -> Self {
        Self { visible: true, disabled: false }
    }
    fn inactive() -> Self {
        Self { visible: false, disabled: true }
    }

    /// Make this fieldset the visible, enabled one (or not)
    pub fn set_active(&mut self, active: bool) {
        *self = if active { Self::active() } else { Self::inactive() };
    }

    pub fn is_active(&self) -> bool {
        self.visible && !self.disabled
    }
}

/// The page the board is displayed on
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    /// The submission form
    pub form: TaskForm,
    /// The fieldset used to create todos
    pub todo_set: Fieldset,
    /// The fieldset used to create reminders
    pub reminder_set: Fieldset,
    /// The rendered items, in insertion order
    task_list: Vec<String>,
}

impl Page {
    /// A fresh page, with the todo fieldset active (the board starts in TODO mode)
    pub fn new() -> Self {
        Self {
            form: TaskForm::default(),
            todo_set: Fieldset::active(),
            reminder_set: Fieldset::inactive(),
            task_list: Vec::new(),
        }
    }

    /// Remove every entry from the displayed list
    pub fn clear_task_list(&mut self) {
        self.task_list.clear();
    }

    /// Append a rendered item at the end of the displayed list
    pub fn append_task_entry(&mut self, entry: String) {
        self.task_list.push(entry);
    }

    /// The displayed entries, in insertion order
    pub fn task_list(&self) -> &[String] {
        &self.task_list
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
