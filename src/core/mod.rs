pub mod derange;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{Exchange, Pairing, Participant};
pub use crate::domain::ports::{ConfigProvider, Notifier, Pipeline, ParticipantSource};
pub use crate::utils::error::Result;
