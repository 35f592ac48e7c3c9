use crate::core::derange;
use crate::core::{ConfigProvider, Exchange, Notifier, Participant, ParticipantSource, Pipeline};
use crate::utils::error::{Result, SantaError};

pub struct ExchangePipeline<S: ParticipantSource, N: Notifier, C: ConfigProvider> {
    source: S,
    notifier: N,
    config: C,
}

impl<S: ParticipantSource, N: Notifier, C: ConfigProvider> ExchangePipeline<S, N, C> {
    pub fn new(source: S, notifier: N, config: C) -> Self {
        Self {
            source,
            notifier,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<S: ParticipantSource, N: Notifier, C: ConfigProvider> Pipeline
    for ExchangePipeline<S, N, C>
{
    async fn extract(&self) -> Result<Vec<Participant>> {
        tracing::debug!(
            "Reading participants from: {}",
            self.config.participants_path()
        );
        let participants = self.source.read_participants().await?;
        tracing::debug!("Found {} participants", participants.len());
        Ok(participants)
    }

    async fn transform(&self, participants: Vec<Participant>) -> Result<Exchange> {
        // 空名單代表操作錯誤，直接拒絕而不是寄出零封信
        if participants.is_empty() {
            return Err(SantaError::InsufficientParticipants { count: 0 });
        }

        derange::assign(&participants, &mut rand::thread_rng())
    }

    async fn load(&self, exchange: Exchange) -> Result<String> {
        if self.config.debug() {
            println!("=====DEBUG RESULTS=====");
        }

        // 逐一通知每位參與者
        for pairing in exchange.pairings() {
            self.notifier.notify(pairing).await?;
        }

        let summary = if self.config.debug() {
            format!("{} pairings printed", exchange.len())
        } else {
            if self.config.verbose() {
                println!(
                    "=====EMAILS WERE SENT FROM \"{}\" AS FOLLOWS=====",
                    self.config.sender_email()
                );
                for pairing in exchange.pairings() {
                    println!(
                        "{} ({}) got {}",
                        pairing.giver, pairing.address, pairing.recipient
                    );
                }
            } else {
                println!(
                    "Emails sent! If you're a participant as well, check your email for your recipient."
                );
            }
            format!(
                "{} emails sent from {}",
                exchange.len(),
                self.config.sender_email()
            )
        };

        Ok(summary)
    }
}
