//! SSH host menu

use crate::config::{Loaded, SshConfig, load_or_create};
use crate::launch::{Outcome, spawn_detached};
use crate::picker::Picker;
use crate::util::notify;

use std::error::Error;
use std::path::Path;

/// Terminal command opening an SSH session to `target`.
pub fn ssh_command(target: &str) -> Vec<String> {
    vec!["wezterm".to_string(), "ssh".to_string(), target.to_string()]
}

/// Run the SSH menu once
pub fn run_ssh_menu(picker: &Picker, config_path: &Path) -> Result<Outcome, Box<dyn Error>> {
    let config = match load_or_create::<SshConfig>(config_path)? {
        Loaded::Existing(config) => config,
        Loaded::Created(path) => {
            notify(
                "fuzzel-ssh",
                &format!(
                    "Default config created in {}, please edit before running again.",
                    path.display()
                ),
            );
            return Ok(Outcome::ConfigCreated);
        }
    };

    let Some(selection) = picker.select(&config.nicknames(), "")? else {
        return Ok(Outcome::Cancelled);
    };

    let target = config
        .target(&selection)
        .ok_or_else(|| format!("No SSH target configured for '{}'", selection))?;

    spawn_detached(&ssh_command(target))?;
    Ok(Outcome::Done)
}
