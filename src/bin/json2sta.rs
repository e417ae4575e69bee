// src/bin/json2sta.rs
use std::process::ExitCode;

fn main() -> ExitCode {
    sta_convert::app::convert_main(std::env::args_os())
}
