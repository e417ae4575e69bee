// tests/common/mod.rs
//! Shared helpers for the binary-level tests.

use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use assert_cmd::Command;
use filetime::FileTime;

#[allow(dead_code)]
pub fn json2sta() -> Command {
    Command::new(env!("CARGO_BIN_EXE_json2sta"))
}

#[allow(dead_code)]
pub fn viewsta() -> Command {
    Command::new(env!("CARGO_BIN_EXE_viewsta"))
}

#[allow(dead_code)]
pub fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Pin a file's mtime to a fixed offset from the Unix epoch.
#[allow(dead_code)]
pub fn set_mtime(path: &Path, secs: u64) {
    let when = SystemTime::UNIX_EPOCH + Duration::from_secs(secs);
    filetime::set_file_mtime(path, FileTime::from_system_time(when)).unwrap();
}

#[allow(dead_code)]
pub fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout).lines().map(str::to_owned).collect()
}

#[allow(dead_code)]
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> =
        fs::read_dir(dir).unwrap().map(|e| e.unwrap().file_name().to_string_lossy().into_owned()).collect();
    names.sort();
    names
}
