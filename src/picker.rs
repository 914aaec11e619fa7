//! External fuzzy-picker adapter
//!
//! Every menu goes through a dmenu-style program: the candidate list is
//! written to its stdin one item per line and the chosen line is read back
//! from stdout. A non-zero exit status means the user dismissed the menu.

use log::debug;
use std::error::Error;
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

/// Line cap used by the game, VM and SSH menus
pub const DEFAULT_MAX_LINES: usize = 8;
/// Line cap used by the printer menus
pub const PRINTER_MAX_LINES: usize = 10;

#[derive(Debug, Clone)]
pub struct Picker {
    pub program: String,
    pub args: Vec<String>,
    pub max_lines: usize,
}

impl Picker {
    /// `fuzzel --dmenu` showing at most `max_lines` rows
    pub fn fuzzel(max_lines: usize) -> Self {
        Self {
            program: "fuzzel".to_string(),
            args: vec!["--dmenu".to_string()],
            max_lines,
        }
    }

    /// Arguments passed to the picker for a list of `item_count` entries.
    pub fn invocation_args(&self, item_count: usize, prompt: &str) -> Vec<String> {
        let lines = item_count.min(self.max_lines);
        let mut args = self.args.clone();
        args.extend([
            "-l".to_string(),
            lines.to_string(),
            "-p".to_string(),
            prompt.to_string(),
        ]);
        args
    }

    /// Ask the user to pick one of `items`.
    ///
    /// Returns `Ok(None)` when the picker was dismissed or nothing was chosen.
    pub fn select<S: AsRef<str>>(
        &self,
        items: &[S],
        prompt: &str,
    ) -> Result<Option<String>, Box<dyn Error>> {
        let input = items
            .iter()
            .map(|item| item.as_ref())
            .collect::<Vec<_>>()
            .join("\n");

        debug!(
            "[fuzzel-launch] picker: {} {:?} ({} items)",
            self.program,
            self.invocation_args(items.len(), prompt),
            items.len()
        );

        let mut child = Command::new(&self.program)
            .args(self.invocation_args(items.len(), prompt))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| format!("Failed to start picker '{}': {}", self.program, e))?;

        if let Some(mut stdin) = child.stdin.take() {
            // The picker may quit before consuming the list
            if let Err(e) = stdin.write_all(input.as_bytes())
                && e.kind() != ErrorKind::BrokenPipe
            {
                return Err(e.into());
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            debug!("[fuzzel-launch] picker dismissed ({})", output.status);
            return Ok(None);
        }

        let selection = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if selection.is_empty() {
            return Ok(None);
        }
        Ok(Some(selection))
    }

    /// Show `message` as a zero-line prompt without waiting for it.
    pub fn notice(&self, message: &str) -> Result<(), Box<dyn Error>> {
        Command::new(&self.program)
            .args(self.invocation_args(0, message))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self::fuzzel(DEFAULT_MAX_LINES)
    }
}
