use crate::shared::infrastructure::notifications::{
    Notification, NotificationError, NotificationSink,
};
use tokio::sync::Mutex;

/// Collects notifications in a list for inspection.
#[derive(Default)]
pub struct InMemoryNotificationSink {
    pub sent: Mutex<Vec<Notification>>,
    is_offline: bool,
}

impl InMemoryNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn sent_to(&self, user_id: &str) -> Vec<Notification> {
        self.sent
            .lock()
            .await
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl NotificationSink for InMemoryNotificationSink {
    async fn notify(&self, notification: Notification) -> Result<(), NotificationError> {
        if self.is_offline {
            return Err(NotificationError::Backend("Notification sink offline".into()));
        }
        self.sent.lock().await.push(notification);
        Ok(())
    }
}
