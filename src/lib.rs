//! This crate provides a small, in-memory task board.
//!
//! A board holds two kinds of items: plain to-dos (see [`Todo`]) and dated reminders (see [`Reminder`]). \
//! Items are created from the fields of a [`page::TaskForm`], which mimics the submission form of the board. \
//! The form is in one of two modes at any time (see [`view::ViewMode`]); a [`TaskController`] owns the
//! item list and the current mode, and reacts to the two events the board knows about:
//! submitting the form, and toggling the mode.
//!
//! Nothing is persisted anywhere: items live exactly as long as the [`TaskController`] does.

mod item;
pub use item::Item;
pub use item::ItemId;
mod todo;
pub use todo::Todo;
mod reminder;
pub use reminder::Reminder;
pub use reminder::NotificationPlatform;

pub mod page;
pub mod view;
pub use view::TaskView;
pub use view::ViewMode;
mod controller;
pub use controller::TaskController;

pub mod config;
pub mod utils;
