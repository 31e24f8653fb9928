//! User Notifications

/// Blocking, user-visible message
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// `window.alert`
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            tracing::error!("[ALERT] no window for alert: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            tracing::error!("[ALERT] alert failed: {:?}", e);
        }
    }
}
