use std::io::{self, BufRead, Write};

use corkboard::page::Page;
use corkboard::view::ViewMode;
use corkboard::{TaskController, TaskView};

const HELP: &str = "\
commands:
  desc <text>          fill the description field of the active fieldset
  date <YYYY-MM-DD>    fill the reminder's schedule date field
  notify <LABEL>       fill the notification field (SMS, EMAIL, PUSH_NOTIFICATION)
  submit               submit the form
  toggle               switch between TODO and REMINDER mode
  list                 print a one-line summary of every item
  quit                 exit";

fn main() -> io::Result<()> {
    env_logger::init();

    let mut page = Page::new();
    let mut controller = TaskController::new(TaskView::new());

    println!("{}", HELP);
    prompt(&controller)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        let (command, argument) = match line.find(' ') {
            Some(pos) => (&line[..pos], line[pos + 1..].trim()),
            None => (line, ""),
        };

        match command {
            "" => {},
            "desc" => match controller.mode() {
                ViewMode::Todo => page.form.todo_description = argument.to_string(),
                ViewMode::Reminder => page.form.reminder_description = argument.to_string(),
            },
            "date" => page.form.schedule_date = argument.to_string(),
            "notify" => page.form.notification = argument.to_string(),
            "submit" => {
                controller.handle_submit(&mut page);
                print_page(&page);
            },
            "toggle" => {
                controller.handle_toggle_mode(&mut page);
                print_page(&page);
            },
            "list" => {
                for task in controller.tasks() {
                    corkboard::utils::print_task(task);
                }
            },
            "quit" => break,
            other => println!("Unknown command {:?}\n{}", other, HELP),
        }
        prompt(&controller)?;
    }

    Ok(())
}

fn prompt(controller: &TaskController) -> io::Result<()> {
    print!("[{:?}] > ", controller.mode());
    io::stdout().flush()
}

fn print_page(page: &Page) {
    for entry in page.task_list() {
        println!("{}\n", entry);
    }
}
