//! Fold-time diagnostics.
//!
//! Decode errors are terminal, but a few things noticed while folding sections
//! into a [`PudDocument`](crate::PudDocument) are not: a race id with no entry in
//! the race table, an ALOW section that is skipped, a second DIM section. These
//! are collected as `Notification` items and also logged through `tracing`.

use std::fmt;

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// A section was read but its contents are not modelled.
    NotImplemented,
    /// An id had no entry in the corresponding lookup table.
    MissingLookup,
    /// Anything else worth surfacing to the caller.
    Warning,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotImplemented => write!(f, "NotImplemented"),
            Self::MissingLookup => write!(f, "MissingLookup"),
            Self::Warning => write!(f, "Warning"),
        }
    }
}

/// A single notification produced while folding a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub notification_type: NotificationType,
    pub message: String,
}

impl Notification {
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.notification_type, self.message)
    }
}

/// Notifications collected for one map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification and emit it as a `tracing` warning.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        let notification = Notification::new(notification_type, message);
        tracing::warn!(kind = %notification.notification_type, "{}", notification.message);
        self.items.push(notification);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// All notifications of one category.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_basics() {
        let mut c = NotificationCollection::new();
        assert!(c.is_empty());

        c.notify(NotificationType::MissingLookup, "race 9 not in race table");
        c.notify(NotificationType::NotImplemented, "ALOW section skipped");
        c.notify(NotificationType::MissingLookup, "AI profile 200 not in AI table");

        assert_eq!(c.len(), 3);
        assert_eq!(c.of_type(NotificationType::MissingLookup).len(), 2);
        assert!(c.has_type(NotificationType::NotImplemented));
        assert!(!c.has_type(NotificationType::Warning));
    }

    #[test]
    fn test_display() {
        let n = Notification::new(NotificationType::NotImplemented, "ALOW section skipped");
        assert_eq!(n.to_string(), "[NotImplemented] ALOW section skipped");
    }
}
