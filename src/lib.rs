pub mod config;
pub mod core;
pub mod domain;
pub mod notify;
pub mod utils;

pub use config::{cli::LocalFileSource, CliConfig};
pub use crate::core::{derange::assign, engine::ExchangeEngine, pipeline::ExchangePipeline};
pub use domain::model::{Exchange, Pairing, Participant};
pub use notify::{ConsoleNotifier, SmtpNotifier};
pub use utils::error::{Result, SantaError};
