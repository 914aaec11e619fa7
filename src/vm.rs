//! libvirt VM menu
//!
//! Running VMs are listed first, then the rest by how often they were
//! started. Picking a running VM offers power operations; picking a stopped
//! one starts it.

use crate::history::{self, CacheLayout};
use crate::launch::Outcome;
use crate::picker::Picker;

use log::{info, warn};
use std::error::Error;
use std::path::Path;
use std::process::Command;

/// Operations offered for a running VM
pub const RUNNING_VM_OPERATIONS: [&str; 3] = ["shutdown", "reboot", "destroy"];

/// Split `virsh list --name` output into VM names.
pub fn parse_name_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Menu order: running VMs, then every VM by start frequency.
pub fn order_vms(all: &[String], running: &[String], history: &[String]) -> Vec<String> {
    history::promote(history::rank(all, history), running)
}

/// libvirt command-line client
#[derive(Debug, Clone)]
pub struct Virsh {
    pub program: String,
    pub args: Vec<String>,
}

impl Virsh {
    /// Names from `virsh list`; a failing virsh yields an empty list.
    pub fn list(&self, include_inactive: bool) -> Vec<String> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg("list");
        if include_inactive {
            cmd.arg("--all");
        }
        cmd.arg("--name");

        match cmd.output() {
            Ok(output) => parse_name_list(&String::from_utf8_lossy(&output.stdout)),
            Err(e) => {
                warn!("[fuzzel-launch] {} list failed: {}", self.program, e);
                Vec::new()
            }
        }
    }

    /// Run `virsh <operation> <vm>`; a non-zero exit is only logged.
    pub fn run(&self, operation: &str, vm: &str) -> Result<(), Box<dyn Error>> {
        info!("[fuzzel-launch] virsh {} {}", operation, vm);
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(operation)
            .arg(vm)
            .status()?;
        if !status.success() {
            warn!("[fuzzel-launch] virsh {} {} exited with {}", operation, vm, status);
        }
        Ok(())
    }
}

impl Default for Virsh {
    fn default() -> Self {
        Self {
            program: "virsh".to_string(),
            args: Vec::new(),
        }
    }
}

/// Run the VM menu once
pub fn run_vm_menu(
    picker: &Picker,
    virsh: &Virsh,
    cache_path: &Path,
) -> Result<Outcome, Box<dyn Error>> {
    let all = virsh.list(true);
    let running = virsh.list(false);
    let ordered = order_vms(&all, &running, &history::load(cache_path));

    let Some(selection) = picker.select(&ordered, "")? else {
        return Ok(Outcome::Cancelled);
    };

    if !all.contains(&selection) {
        return Err(format!("'{}' is not a known VM", selection).into());
    }

    if running.contains(&selection) {
        let Some(operation) = picker.select(&RUNNING_VM_OPERATIONS, "Select an option: ")? else {
            return Ok(Outcome::Cancelled);
        };
        if !RUNNING_VM_OPERATIONS.contains(&operation.as_str()) {
            return Err(format!("Unknown VM operation '{}'", operation).into());
        }
        virsh.run(&operation, &selection)?;
    } else {
        virsh.run("start", &selection)?;
        history::record(cache_path, &selection, CacheLayout::Pretty)?;
    }

    Ok(Outcome::Done)
}
