//! Scenarios driving the whole board through the controller, the way the page would

use corkboard::page::Page;
use corkboard::view::ViewMode;
use corkboard::{Item, TaskController, TaskView};

fn new_board() -> (TaskController, Page) {
    let _ = env_logger::builder().is_test(true).try_init();
    (TaskController::new(TaskView::new()), Page::new())
}

/// Fill the todo description and submit
fn submit_todo(controller: &mut TaskController, page: &mut Page, description: &str) {
    assert_eq!(controller.mode(), ViewMode::Todo);
    page.form.todo_description = description.to_string();
    controller.handle_submit(page);
}

/// Fill the reminder fields and submit
fn submit_reminder(controller: &mut TaskController, page: &mut Page,
                   description: &str, date: &str, notification: &str) {
    assert_eq!(controller.mode(), ViewMode::Reminder);
    page.form.reminder_description = description.to_string();
    page.form.schedule_date = date.to_string();
    page.form.notification = notification.to_string();
    controller.handle_submit(page);
}


#[test]
fn submitting_a_todo_appends_it_and_clears_the_form() {
    let (mut controller, mut page) = new_board();

    submit_todo(&mut controller, &mut page, "Buy milk");

    assert_eq!(controller.tasks().len(), 1);
    let todo = controller.tasks()[0].unwrap_todo();
    assert_eq!(todo.description(), "Buy milk");
    assert_eq!(todo.done(), false);

    assert_eq!(page.form, Default::default());
    assert_eq!(page.task_list().len(), 1);
    assert!(page.task_list()[0].contains("description: Buy milk"));
}

#[test]
fn submitting_a_reminder_keeps_the_exact_values() {
    let (mut controller, mut page) = new_board();

    controller.handle_toggle_mode(&mut page);
    submit_reminder(&mut controller, &mut page, "Stand-up", "2021-07-04", "SMS");

    assert_eq!(controller.tasks().len(), 1);
    let reminder = controller.tasks()[0].unwrap_reminder();
    assert_eq!(reminder.description(), "Stand-up");
    assert_eq!(reminder.notifications().len(), 1);
    assert_eq!(reminder.notifications()[0].label(), "SMS");
    assert!(page.task_list()[0].contains("Notify by SMS in 4.7.2021"));
}

#[test]
fn toggling_twice_returns_to_the_original_fieldset() {
    let (mut controller, mut page) = new_board();
    assert!(page.todo_set.is_active());
    assert!(!page.reminder_set.is_active());

    controller.handle_toggle_mode(&mut page);
    assert_eq!(controller.mode(), ViewMode::Reminder);
    assert!(!page.todo_set.is_active());
    assert!(page.reminder_set.is_active());

    controller.handle_toggle_mode(&mut page);
    assert_eq!(controller.mode(), ViewMode::Todo);
    assert!(page.todo_set.is_active());
    assert!(!page.reminder_set.is_active());
}

#[test]
fn the_list_always_matches_the_items_created_so_far() {
    let (mut controller, mut page) = new_board();

    submit_todo(&mut controller, &mut page, "first");
    submit_todo(&mut controller, &mut page, "second");
    controller.handle_toggle_mode(&mut page);
    submit_reminder(&mut controller, &mut page, "third", "2021-07-04", "EMAIL");

    assert_eq!(controller.tasks().len(), 3);
    assert_eq!(page.task_list().len(), 3);
    // Insertion order is preserved
    assert!(page.task_list()[0].contains("first"));
    assert!(page.task_list()[1].contains("second"));
    assert!(page.task_list()[2].contains("third"));
    assert!(controller.tasks()[0].is_todo());
    assert!(controller.tasks()[2].is_reminder());
}

#[test]
fn items_are_never_mutated_after_creation() {
    let (mut controller, mut page) = new_board();

    submit_todo(&mut controller, &mut page, "immutable");
    let before: Vec<Item> = controller.tasks().to_vec();
    let displayed_before = page.task_list().to_vec();

    // Redraws must not touch existing items or their renderings
    controller.handle_toggle_mode(&mut page);
    controller.handle_toggle_mode(&mut page);

    assert_eq!(controller.tasks(), &before[..]);
    assert_eq!(page.task_list(), &displayed_before[..]);
    let todo = controller.tasks()[0].unwrap_todo();
    assert_eq!(todo.creation_date(), todo.last_modified());
}

#[test]
fn serde_items() {
    let (mut controller, mut page) = new_board();
    submit_todo(&mut controller, &mut page, "Buy milk");

    let json = serde_json::to_string(&controller.tasks()[0]).unwrap();
    let back: Item = serde_json::from_str(&json).unwrap();
    assert_eq!(back, controller.tasks()[0]);
}
