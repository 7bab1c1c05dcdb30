//! Dated reminder items

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::item::ItemId;
use crate::utils::format_date;

/// A channel a reminder claims it will notify through.
///
/// These are descriptive labels only: nothing is ever actually sent anywhere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum NotificationPlatform {
    Sms,
    Email,
    PushNotification,
}

impl NotificationPlatform {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationPlatform::Sms => "SMS",
            NotificationPlatform::Email => "EMAIL",
            NotificationPlatform::PushNotification => "PUSH_NOTIFICATION",
        }
    }
}

impl Display for NotificationPlatform {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.label())
    }
}

impl FromStr for NotificationPlatform {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SMS" => Ok(NotificationPlatform::Sms),
            "EMAIL" => Ok(NotificationPlatform::Email),
            "PUSH_NOTIFICATION" => Ok(NotificationPlatform::PushNotification),
            other => Err(format!("Unknown notification platform: {:?}", other)),
        }
    }
}


/// A reminder for a given date
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// A short random identifier
    id: ItemId,

    /// The display description of this item
    description: String,

    /// The time this item was created
    creation_date: DateTime<Utc>,
    /// The last time this item was modified.
    /// Items are never modified after creation, so this always matches `creation_date`
    last_modified: DateTime<Utc>,

    /// The date this reminder is for
    date: DateTime<Utc>,
    /// The channels this reminder claims it will notify through. Never empty
    notifications: Vec<NotificationPlatform>,
}

impl Reminder {
    /// Create a brand new Reminder.
    /// This will pick a new (random) item ID and stamp both timestamps.
    /// An empty `notifications` list is replaced by the EMAIL default, so the list is never empty.
    pub fn new(description: String, date: DateTime<Utc>, notifications: Vec<NotificationPlatform>) -> Self {
        let now = Utc::now();
        let notifications = if notifications.is_empty() {
            log::warn!("Creating a reminder with no notification platform. Defaulting to EMAIL");
            vec![NotificationPlatform::Email]
        } else {
            notifications
        };
        Self {
            id: ItemId::random(),
            description,
            creation_date: now,
            last_modified: now,
            date,
            notifications,
        }
    }

    pub fn id(&self) -> &ItemId      { &self.id          }
    pub fn description(&self) -> &str { &self.description }
    pub fn date(&self) -> &DateTime<Utc> { &self.date }
    pub fn notifications(&self) -> &[NotificationPlatform] { &self.notifications }
    pub fn creation_date(&self) -> &DateTime<Utc> { &self.creation_date }
    pub fn last_modified(&self) -> &DateTime<Utc> { &self.last_modified }

    /// The human-readable text block this item is displayed as
    pub fn render(&self) -> String {
        let channels = self.notifications.iter()
            .map(|n| n.label())
            .collect::<Vec<_>>()
            .join(" and ");
        format!(
            "---> Reminder <---\n\
             description: {}\n\
             Notify by {} in {}\n\
             Created: {}\n\
             Last Update: {}",
            self.description,
            channels,
            format_date(&self.date),
            format_date(&self.creation_date),
            format_date(&self.last_modified),
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::tomorrow;

    #[test]
    fn empty_notification_list_defaults_to_email() {
        let reminder = Reminder::new("Stand-up".to_string(), tomorrow(), Vec::new());
        assert_eq!(reminder.notifications(), &[NotificationPlatform::Email]);
    }

    #[test]
    fn platform_labels_round_trip() {
        for platform in &[NotificationPlatform::Sms, NotificationPlatform::Email, NotificationPlatform::PushNotification] {
            let parsed: NotificationPlatform = platform.label().parse().unwrap();
            assert_eq!(&parsed, platform);
        }
        assert!("CARRIER_PIGEON".parse::<NotificationPlatform>().is_err());
    }

    #[test]
    fn render_joins_channels() {
        let reminder = Reminder::new("Stand-up".to_string(), tomorrow(),
            vec![NotificationPlatform::Sms, NotificationPlatform::Email]);
        assert!(reminder.render().contains("Notify by SMS and EMAIL in "));
    }
}
