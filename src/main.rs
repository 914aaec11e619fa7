mod config;
mod history;
mod launch;
mod paths;
mod picker;
mod printer;
mod sources;
mod ssh;
mod util;
mod vm;

use crate::paths::{PATH_GAME_CACHE, PATH_GAME_CONFIG, PATH_SSH_CONFIG, PATH_VM_CACHE};
use crate::picker::{PRINTER_MAX_LINES, Picker};

use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", USAGE_TEXT);
        return ExitCode::SUCCESS;
    }

    let Some(subcommand) = args.first() else {
        eprintln!("{}", USAGE_TEXT);
        return ExitCode::FAILURE;
    };

    let result = match subcommand.as_str() {
        "game" => launch::run_game_menu(&Picker::default(), &PATH_GAME_CONFIG, &PATH_GAME_CACHE),
        "vm" => vm::run_vm_menu(&Picker::default(), &vm::Virsh::default(), &PATH_VM_CACHE),
        "ssh" => ssh::run_ssh_menu(&Picker::default(), &PATH_SSH_CONFIG),
        "print" => match printer::parse_printer_args(&args[1..]) {
            Ok(printer_args) => {
                printer::run_printer_menu(&Picker::fuzzel(PRINTER_MAX_LINES), &printer_args)
            }
            Err(e) => {
                eprintln!("[fuzzel-launch] {}", e);
                eprintln!("{}", USAGE_TEXT);
                return ExitCode::FAILURE;
            }
        },
        other => {
            eprintln!("[fuzzel-launch] Unknown command '{}'", other);
            eprintln!("{}", USAGE_TEXT);
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            error!("[fuzzel-launch] {}", e);
            ExitCode::FAILURE
        }
    }
}

static USAGE_TEXT: &str = r#"
Usage: fuzzel-launch <COMMAND> [OPTIONS]

Commands:
    game                  Pick and launch a game (Steam, Heroic, Yuzu, RetroArch, custom)
    vm                    Start a libvirt VM, or shut down / reboot / destroy a running one
    ssh                   Open an SSH session to a configured host
    print <ip:port>       Control a Moonraker printer
        -n <count>        Number of printers on consecutive ports starting at <port>
        -f                Only list prints under pro/ and add a "Print Misc" entry for misc/

Config files live in $XDG_CONFIG_HOME/fuzzel, usage history in $XDG_CACHE_HOME.
Set RUST_LOG=debug for detailed output.
"#;
