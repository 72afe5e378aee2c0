//! Desktop notifications for finished phases.
//! macOS goes through osascript, Linux through notify-send; other platforms are a no-op.
use tracing::debug;

#[cfg(any(target_os = "macos", target_os = "linux"))]
use std::process::{Command, Stdio};
#[cfg(any(target_os = "macos", target_os = "linux"))]
use tracing::warn;

const NOTIFICATION_TITLE: &str = "Pomorks";

/// Body text shown when a phase ends, e.g. "WORK_1 is Finish."
pub fn phase_finished_message(label: &str) -> String {
    format!("{} is Finish.", label)
}

/// Send a notification when a phase countdown expires
pub fn notify_phase_finished(label: &str) {
    let message = phase_finished_message(label);
    debug!(%message, "sending notification");

    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "{}""#,
            message.replace('"', "\\\""),
            NOTIFICATION_TITLE
        );

        let mut command = Command::new("osascript");
        command.arg("-e").arg(&script);
        spawn_detached(command);
    }

    #[cfg(target_os = "linux")]
    {
        let mut command = Command::new("notify-send");
        command.arg(NOTIFICATION_TITLE).arg(&message);
        spawn_detached(command);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        // No-op on other platforms
        let _ = (NOTIFICATION_TITLE, message);
    }
}

/// Start the notifier without waiting on it; a background thread reaps the child
#[cfg(any(target_os = "macos", target_os = "linux"))]
fn spawn_detached(mut command: Command) {
    let child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match child {
        Ok(mut child) => {
            std::thread::spawn(move || {
                if let Err(err) = child.wait() {
                    warn!(error = %err, "notification process failed");
                }
            });
        }
        Err(err) => warn!(error = %err, "failed to send notification"),
    }
}
