//! Launching external programs for sharing.

use super::{SharePayload, ShareOutcome};
use tokio::process::Command;

/// Exit status a share command uses to say the user backed out (128 + SIGINT).
pub const CANCELLED_EXIT_CODE: i32 = 130;

fn opener_command(url: &str) -> Command {
    let program = if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };
    let mut cmd = Command::new(program);
    cmd.arg(url)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null());
    cmd
}

/// Open `url` with the platform's default handler.
pub async fn open_url(url: &str) -> ShareOutcome {
    // explorer exits 1 even after handing the URL to the browser.
    let check_exit = !cfg!(target_os = "windows");
    run_opener(opener_command(url), check_exit).await
}

async fn run_opener(mut cmd: Command, check_exit: bool) -> ShareOutcome {
    if !check_exit {
        return match cmd.spawn() {
            Ok(_) => ShareOutcome::Completed,
            Err(e) => ShareOutcome::Failed(format!("could not launch opener: {}", e)),
        };
    }
    match cmd.status().await {
        Ok(status) if status.success() => ShareOutcome::Completed,
        Ok(status) => ShareOutcome::Failed(format!("opener exited with {}", status)),
        Err(e) => ShareOutcome::Failed(format!("could not launch opener: {}", e)),
    }
}

/// Run the configured share command with the title, text and URL appended
/// as arguments.
pub async fn native_share(command: &[String], payload: &SharePayload) -> ShareOutcome {
    let Some((program, args)) = command.split_first() else {
        return ShareOutcome::Failed("no share command configured".to_string());
    };
    let status = Command::new(program)
        .args(args)
        .arg(&payload.title)
        .arg(&payload.text)
        .arg(&payload.url)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .await;
    match status {
        Ok(status) if status.success() => ShareOutcome::Completed,
        Ok(status) => classify_exit(status.code()),
        Err(e) => ShareOutcome::Failed(format!("could not launch {}: {}", program, e)),
    }
}

/// Maps a failed exit to an outcome. `None` means the process was killed by
/// a signal, which is what closing a share dialog usually looks like.
pub fn classify_exit(code: Option<i32>) -> ShareOutcome {
    match code {
        None | Some(CANCELLED_EXIT_CODE) => ShareOutcome::Cancelled,
        Some(code) => ShareOutcome::Failed(format!("share command exited with code {}", code)),
    }
}
