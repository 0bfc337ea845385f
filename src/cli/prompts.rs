//! Messages for stderr.

use crossterm::style::Stylize;

fn stderr_is_tty() -> bool {
    unsafe { libc::isatty(2) == 1 }
}

/// Print an error message to stderr (red on a terminal)
pub fn error(msg: &str) {
    if stderr_is_tty() {
        eprintln!("{}", msg.red());
    } else {
        eprintln!("{msg}");
    }
}

/// Print a follow-up hint to stderr (dimmed on a terminal)
pub fn hint(msg: &str) {
    if stderr_is_tty() {
        eprintln!("{}", msg.dim());
    } else {
        eprintln!("{msg}");
    }
}
