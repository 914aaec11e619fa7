// Spawning launch commands

use crate::launch::pure::{build_command, format_command};

use log::info;
use std::error::Error;
use std::process::Child;

/// Start `argv` and return without waiting for it.
///
/// The child keeps running after this process exits.
pub fn spawn_detached(argv: &[String]) -> Result<Child, Box<dyn Error>> {
    let mut cmd = build_command(argv)?;
    info!("[fuzzel-launch] Launching {}", format_command(&cmd));

    let child = cmd
        .spawn()
        .map_err(|e| format!("Failed to launch {}: {}", format_command(&cmd), e))?;
    Ok(child)
}
