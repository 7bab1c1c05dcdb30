//! Plain to-do items

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::item::ItemId;
use crate::utils::format_date;

/// A to-do item
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// A short random identifier
    id: ItemId,

    /// The display description of this item
    description: String,

    /// The time this item was created
    creation_date: DateTime<Utc>,
    /// The last time this item was modified.
    /// Items are never modified after creation, so this always matches `creation_date`
    last_modified: DateTime<Utc>,

    /// Whether this item is completed
    done: bool,
}

impl Todo {
    /// Create a brand new, uncompleted Todo.
    /// This will pick a new (random) item ID and stamp both timestamps.
    pub fn new(description: String) -> Self {
        let now = Utc::now();
        Self {
            id: ItemId::random(),
            description,
            creation_date: now,
            last_modified: now,
            done: false,
        }
    }

    pub fn id(&self) -> &ItemId      { &self.id          }
    pub fn description(&self) -> &str { &self.description }
    pub fn done(&self) -> bool       { self.done         }
    pub fn creation_date(&self) -> &DateTime<Utc> { &self.creation_date }
    pub fn last_modified(&self) -> &DateTime<Utc> { &self.last_modified }

    /// The human-readable text block this item is displayed as
    pub fn render(&self) -> String {
        let done_label = if self.done { "Completed" } else { "In Progress" };
        format!(
            "---> TODO <---\n\
             description: {}\n\
             Status: {}\n\
             Created: {}\n\
             Last Update: {}",
            self.description,
            done_label,
            format_date(&self.creation_date),
            format_date(&self.last_modified),
        )
    }
}
