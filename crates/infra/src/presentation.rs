// crates/infra/src/presentation.rs
pub mod console_reporter;
pub mod json_printer;

pub use console_reporter::ConsoleReporter;
pub use json_printer::JsonPrinter;
