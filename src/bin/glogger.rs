//! `glogger` binary.
//!
//! Usage:
//!   glogger [--level L] [--prefix P] [--no-color] [--config PATH] <severity> <message>...

use std::process::ExitCode;

fn main() -> ExitCode {
    glogger::cli::run()
}
