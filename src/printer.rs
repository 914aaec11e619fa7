//! Moonraker (Klipper) printer menu
//!
//! Quick printer control over Moonraker's HTTP API: start a print, reprint
//! the last file, cancel, run a macro, restart or emergency-stop.
//!
//! ## Module Structure
//! - `pure.rs`: Argument parsing, operation list, address and file filtering
//! - `client.rs`: Blocking Moonraker HTTP client
//! - `pipelines.rs`: The interactive menu flow

mod client;
mod pipelines;
mod pure;

pub use pipelines::run_printer_menu;
pub use pure::parse_printer_args;
