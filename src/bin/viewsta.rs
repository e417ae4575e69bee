// src/bin/viewsta.rs
use std::process::ExitCode;

fn main() -> ExitCode {
    sta_convert::app::view_main(std::env::args_os())
}
