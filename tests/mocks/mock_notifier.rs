use formlink_contact::{Notification, Notifier};
use std::sync::{Arc, Mutex};

/// Mock notifier that records notifications and can be told to fail.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
    fail: bool,
}

#[allow(dead_code)]
impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, notification: &Notification) -> anyhow::Result<()> {
        self.notifications.lock().unwrap().push(notification.clone());
        if self.fail {
            anyhow::bail!("toast container not mounted");
        }
        Ok(())
    }
}
