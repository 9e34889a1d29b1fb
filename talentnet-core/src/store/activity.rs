use talentnet_types::{ConnectionRequest, Notification, RequestStatus};

use super::TalentStore;

impl TalentStore {
    /// Requests addressed to `user_id`, optionally narrowed to one status.
    ///
    /// Status is read-only here: no operation moves a request out of `Pending`.
    pub fn connection_requests(
        &self,
        user_id: &str,
        status: Option<RequestStatus>,
    ) -> Vec<&ConnectionRequest> {
        self.data
            .connection_requests
            .iter()
            .filter(|r| r.receiver_id == user_id)
            .filter(|r| status.map_or(true, |s| r.status == s))
            .collect()
    }

    pub fn user_notifications(&self, user_id: &str) -> Vec<&Notification> {
        self.data
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .collect()
    }

    pub fn unread_notification_count(&self, user_id: &str) -> usize {
        self.user_notifications(user_id)
            .iter()
            .filter(|n| !n.read)
            .count()
    }

    /// Returns false when no notification has this id
    pub fn mark_notification_read(&mut self, notification_id: &str) -> bool {
        match self
            .data
            .notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
        {
            Some(notification) => {
                notification.read = true;
                tracing::debug!(notification_id, "Notification marked read");
                true
            }
            None => false,
        }
    }
}
