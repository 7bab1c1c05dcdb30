//! The controller that owns the board state

use crate::page::Page;
use crate::view::{TaskView, ViewMode};
use crate::Item;

/// The controller of the board.
///
/// It owns the item list (append-only, insertion order) and the current
/// [`ViewMode`], and exposes the two events the board reacts to: submitting
/// the form, and toggling the mode. Both handlers run to completion on the
/// caller's thread; there is no other thread, and no other state.
#[derive(Debug)]
pub struct TaskController {
    tasks: Vec<Item>,
    mode: ViewMode,
    view: TaskView,
}

impl TaskController {
    /// A controller with an empty list, starting in TODO mode
    pub fn new(view: TaskView) -> Self {
        Self {
            tasks: Vec::new(),
            mode: ViewMode::Todo,
            view,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Every item created so far, in creation order
    pub fn tasks(&self) -> &[Item] {
        &self.tasks
    }

    /// The form was submitted: build the item matching the current mode,
    /// append it to the list, and redraw the page
    pub fn handle_submit(&mut self, page: &mut Page) {
        let task = match self.mode {
            ViewMode::Todo => Item::Todo(self.view.get_todo(page)),
            ViewMode::Reminder => Item::Reminder(self.view.get_reminder(page)),
        };
        log::debug!("Created item {}", task.id());
        self.tasks.push(task);
        self.view.render(&self.tasks, self.mode, page);
    }

    /// The toggle button was clicked: flip the mode and redraw the
    /// (unchanged) list under the new mode
    pub fn handle_toggle_mode(&mut self, page: &mut Page) {
        self.mode = self.mode.toggled();
        log::debug!("Switched to {:?} mode", self.mode);
        self.view.render(&self.tasks, self.mode, page);
    }
}

impl Default for TaskController {
    fn default() -> Self {
        Self::new(TaskView::new())
    }
}
