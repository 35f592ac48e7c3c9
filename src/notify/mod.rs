//! Result delivery: console printer for debug runs, SMTP for real ones.

pub mod console;
pub mod smtp;

pub use console::ConsoleNotifier;
pub use smtp::SmtpNotifier;
