use crate::domain::model::{Exchange, Pairing, Participant};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ParticipantSource: Send + Sync {
    fn read_participants(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Participant>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn participants_path(&self) -> &str;
    fn sender_email(&self) -> &str;
    fn sender_password(&self) -> &str;
    fn smtp_host(&self) -> &str;
    fn smtp_port(&self) -> u16;
    fn debug(&self) -> bool;
    fn verbose(&self) -> bool;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, pairing: &Pairing) -> Result<()>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Participant>>;
    async fn transform(&self, participants: Vec<Participant>) -> Result<Exchange>;
    async fn load(&self, exchange: Exchange) -> Result<String>;
}
