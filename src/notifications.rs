//! Desktop notification support
//! Currently only implements macOS notifications; elsewhere they are logged

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a notification when a task is completed
pub fn notify_task_completed(task_text: &str) {
    deliver("Listo - Task Completed", &format!("🎉 {}", task_text));
}

/// Send a due-day reminder
pub fn notify_reminder(message: &str) {
    deliver("Listo - Task Reminder", message);
}

fn deliver(title: &str, body: &str) {
    tracing::info!(title, body, "notification");

    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "{}""#,
            escape(body),
            escape(title)
        );

        // Delivery is best effort and never affects task state
        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
            tracing::warn!(error = %e, "failed to deliver notification");
        }
    }
}

#[cfg(any(target_os = "macos", test))]
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
