//! Printer menu pipeline

use super::client::MoonrakerClient;
use super::pure::{Operation, PrinterArgs, filter_by_prefix, operations, printer_address};
use crate::launch::Outcome;
use crate::picker::Picker;

use log::info;
use std::error::Error;

/// Run the printer menu once
pub fn run_printer_menu(picker: &Picker, args: &PrinterArgs) -> Result<Outcome, Box<dyn Error>> {
    let address = match args.count {
        Some(count) => {
            let numbers: Vec<String> = (1..=count).map(|n| n.to_string()).collect();
            let Some(choice) = picker.select(&numbers, "Select printer: ")? else {
                return Ok(Outcome::Cancelled);
            };
            let number: usize = choice
                .parse()
                .map_err(|_| format!("Invalid printer number '{}'", choice))?;
            printer_address(&args.address, number)?
        }
        None => args.address.clone(),
    };
    info!("[fuzzel-launch] Using printer at {}", address);

    let client = MoonrakerClient::new(&address)?;

    let labels: Vec<&str> = operations(args.filter)
        .into_iter()
        .map(Operation::label)
        .collect();
    let Some(choice) = picker.select(&labels, "Select an operation: ")? else {
        return Ok(Outcome::Cancelled);
    };
    let operation =
        Operation::from_label(&choice).ok_or_else(|| format!("Unknown operation '{}'", choice))?;

    match operation {
        Operation::Print => {
            let files = client.list_files()?;
            let files = if args.filter {
                filter_by_prefix(files, "pro/")
            } else {
                files
            };
            return pick_and_print(picker, &client, &files);
        }
        Operation::PrintMisc => {
            let files = filter_by_prefix(client.list_files()?, "misc/");
            return pick_and_print(picker, &client, &files);
        }
        Operation::Reprint => client.start_print(&client.last_file()?)?,
        Operation::Cancel => client.cancel_print()?,
        Operation::Macro => {
            let macros = client.list_macros()?;
            let Some(selected) = picker.select(&macros, "Select a macro: ")? else {
                return Ok(Outcome::Cancelled);
            };
            client.run_gcode(&selected)?;
        }
        Operation::FirmwareRestart => client.firmware_restart()?,
        Operation::KlipperRestart => client.restart()?,
        Operation::EmergencyStop => client.emergency_stop()?,
    }

    info!("[fuzzel-launch] {} sent to {}", operation.label(), address);
    Ok(Outcome::Done)
}

fn pick_and_print(
    picker: &Picker,
    client: &MoonrakerClient,
    files: &[String],
) -> Result<Outcome, Box<dyn Error>> {
    let Some(file) = picker.select(files, "Select a file: ")? else {
        return Ok(Outcome::Cancelled);
    };
    client.start_print(&file)?;
    info!("[fuzzel-launch] Started print of {}", file);
    Ok(Outcome::Done)
}
