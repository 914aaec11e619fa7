// Pure command building functions (no I/O)

use std::error::Error;
use std::process::Command;

/// Build a `Command` from a catalog argument list (program first).
pub fn build_command(argv: &[String]) -> Result<Command, Box<dyn Error>> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| "Cannot launch an empty command")?;
    if program.is_empty() {
        return Err("Cannot launch a command without a program".into());
    }

    let mut cmd = Command::new(program);
    cmd.args(args);
    Ok(cmd)
}

/// Format a command for debug logging (pure string building).
///
/// Returns the formatted string. Caller is responsible for printing.
pub fn format_command(cmd: &Command) -> String {
    let mut output = format!("\"{}\"", cmd.get_program().to_string_lossy());

    for arg in cmd.get_args() {
        output.push(' ');
        output.push_str(&format!("\"{}\"", arg.to_string_lossy()));
    }

    output
}
