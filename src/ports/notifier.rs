//! Notification port - transient user-facing messages.

/// Port for surfacing transient success and error notifications.
///
/// Messages are fire-and-forget; no acknowledgement or retry is modeled.
pub trait Notifier: Send + Sync {
    /// Shows a success notification.
    fn success(&self, message: &str);

    /// Shows an error notification.
    fn error(&self, message: &str);
}
