//! Desktop notifications (macOS only, no-op elsewhere)

#[cfg(target_os = "macos")]
use std::process::Command;

/// Build the notification body for a finished checklist
pub fn all_completed_message(total: usize) -> String {
    if total == 1 {
        "You finished today's question!".to_string()
    } else {
        format!("You finished all {} questions for today!", total)
    }
}

/// Send a notification when every question of the day is completed
pub fn notify_all_completed(total: usize) {
    let message = all_completed_message(total);

    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "DSA Progress""#,
            message.replace('"', "\\\"")
        );

        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
            tracing::debug!(error = %e, "notification failed");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        tracing::debug!(%message, "notifications unsupported on this platform");
    }
}
