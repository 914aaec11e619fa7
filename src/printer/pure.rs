// Pure printer menu helpers (no I/O)

use std::error::Error;

/// Command line of the `print` subcommand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterArgs {
    /// `host:port` of the first printer
    pub address: String,
    /// Number of printers on consecutive ports
    pub count: Option<usize>,
    /// Split prints into `pro/` and `misc/` folders
    pub filter: bool,
}

pub fn parse_printer_args(args: &[String]) -> Result<PrinterArgs, Box<dyn Error>> {
    let mut address = None;
    let mut count = None;
    let mut filter = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-f" => filter = true,
            "-n" => {
                let value = iter.next().ok_or("-n requires a number of printers")?;
                let n: usize = value
                    .parse()
                    .map_err(|_| format!("Invalid printer count '{}'", value))?;
                if n == 0 {
                    return Err("Printer count must be at least 1".into());
                }
                count = Some(n);
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown option '{}'", other).into());
            }
            other => {
                if address.is_some() {
                    return Err(format!("Unexpected argument '{}'", other).into());
                }
                address = Some(other.to_string());
            }
        }
    }

    Ok(PrinterArgs {
        address: address.ok_or("Missing printer address (ip:port)")?,
        count,
        filter,
    })
}

/// Address of printer `number` (1-based) when printers sit on consecutive ports.
pub fn printer_address(base: &str, number: usize) -> Result<String, Box<dyn Error>> {
    let (host, port) = base
        .rsplit_once(':')
        .ok_or_else(|| format!("Address '{}' has no port", base))?;
    let port: usize = port
        .parse()
        .map_err(|_| format!("Invalid port in '{}'", base))?;
    let port = port + number.saturating_sub(1);
    if port > u16::MAX as usize {
        return Err(format!("Port {} out of range", port).into());
    }
    Ok(format!("{}:{}", host, port))
}

/// Keep paths starting with `prefix`.
pub fn filter_by_prefix(paths: Vec<String>, prefix: &str) -> Vec<String> {
    paths.into_iter().filter(|p| p.starts_with(prefix)).collect()
}

/// Printer operations offered in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Print,
    PrintMisc,
    Reprint,
    Cancel,
    Macro,
    FirmwareRestart,
    KlipperRestart,
    EmergencyStop,
}

impl Operation {
    pub fn label(self) -> &'static str {
        match self {
            Operation::Print => "Print",
            Operation::PrintMisc => "Print Misc",
            Operation::Reprint => "Reprint",
            Operation::Cancel => "Cancel",
            Operation::Macro => "Macro",
            Operation::FirmwareRestart => "Firmware restart",
            Operation::KlipperRestart => "Klipper restart",
            Operation::EmergencyStop => "Emergency stop",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        ALL_OPERATIONS.into_iter().find(|op| op.label() == label)
    }
}

const ALL_OPERATIONS: [Operation; 8] = [
    Operation::Print,
    Operation::PrintMisc,
    Operation::Reprint,
    Operation::Cancel,
    Operation::Macro,
    Operation::FirmwareRestart,
    Operation::KlipperRestart,
    Operation::EmergencyStop,
];

/// Menu entries; `Print Misc` only exists with the folder filter.
pub fn operations(filter: bool) -> Vec<Operation> {
    ALL_OPERATIONS
        .into_iter()
        .filter(|op| filter || *op != Operation::PrintMisc)
        .collect()
}
