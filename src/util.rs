use log::{info, warn};
use std::path::PathBuf;
use std::process::Command;

/// Expand `~` and environment variables in a config path.
///
/// Unknown variables leave the path as written apart from the tilde.
pub fn expand_path(path: &str) -> PathBuf {
    match shellexpand::full(path) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(e) => {
            warn!("[fuzzel-launch] Could not expand '{}': {}", path, e);
            PathBuf::from(shellexpand::tilde(path).as_ref())
        }
    }
}

/// Print `body` and show it as a desktop notification.
pub fn notify(subject: &str, body: &str) {
    info!("[fuzzel-launch] {}", body);
    println!("{}", body);
    if let Err(e) = Command::new("notify-send").arg(subject).arg(body).spawn() {
        warn!("[fuzzel-launch] notify-send failed: {}", e);
    }
}
