//! Board items (to-dos and reminders)

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use chrono::{DateTime, Utc};



#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Item {
    Todo(crate::todo::Todo),
    Reminder(crate::reminder::Reminder),
}

/// Returns `todo.$property_name` or `reminder.$property_name`, depending on whether self is a Todo or a Reminder
macro_rules! synthetise_common_getter {
    ($property_name:ident, $return_type:ty) => {
        pub fn $property_name(&self) -> $return_type {
            match self {
                Item::Todo(t) => t.$property_name(),
                Item::Reminder(r) => r.$property_name(),
            }
        }
    }
}

impl Item {
    synthetise_common_getter!(id, &ItemId);
    synthetise_common_getter!(description, &str);
    synthetise_common_getter!(creation_date, &DateTime<Utc>);
    synthetise_common_getter!(last_modified, &DateTime<Utc>);
    synthetise_common_getter!(render, String);

    pub fn is_todo(&self) -> bool {
        match &self {
            Item::Todo(_) => true,
            _ => false,
        }
    }

    pub fn is_reminder(&self) -> bool {
        match &self {
            Item::Reminder(_) => true,
            _ => false,
        }
    }

    /// Returns a reference to the inner Todo
    ///
    /// # Panics
    /// Panics if the inner item is not a Todo
    pub fn unwrap_todo(&self) -> &crate::todo::Todo {
        match self {
            Item::Todo(t) => t,
            _ => panic!("Not a todo"),
        }
    }

    /// Returns a reference to the inner Reminder
    ///
    /// # Panics
    /// Panics if the inner item is not a Reminder
    pub fn unwrap_reminder(&self) -> &crate::reminder::Reminder {
        match self {
            Item::Reminder(r) => r,
            _ => panic!("Not a reminder"),
        }
    }
}


/// The identifier of a board item.
///
/// These are short random strings, the way the board has always generated them.
/// Uniqueness is not enforced: a collision is theoretically possible, and nothing checks for it.
#[derive(Clone, Debug, PartialEq, Hash)]
pub struct ItemId {
    content: String,
}

/// How many characters of a UUID an `ItemId` keeps
const ID_LEN: usize = 9;

impl ItemId {
    /// Generate a random ItemId.
    pub fn random() -> Self {
        let random = uuid::Uuid::new_v4().to_simple().to_string();
        Self { content: random[..ID_LEN].to_string() }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}
impl From<String> for ItemId {
    fn from(content: String) -> Self {
        Self { content }
    }
}

impl Eq for ItemId {}
impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for ItemId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<ItemId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let content = String::deserialize(deserializer)?;
        Ok(ItemId { content })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_are_short() {
        let id = ItemId::random();
        assert_eq!(id.as_str().len(), ID_LEN);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn serde_item_id() {
        let id = ItemId::from("abc123def".to_string());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc123def\"");
        let back: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
