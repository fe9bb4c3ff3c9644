//! Alert-based notifier for the browser.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use ats::notify::{Notifier, NotifyKind, TracingNotifier};

/// Shows notifications with `window.alert` and logs them.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

fn alert_text(kind: NotifyKind, message: &str) -> String {
    match kind {
        NotifyKind::Success => format!("✅ {message}"),
        NotifyKind::Failure => format!("❌ {message}"),
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, kind: NotifyKind, message: &str) {
        TracingNotifier.notify(kind, message);
        let text = alert_text(kind, message);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&text);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    }
}
