use crate::core::{ConfigProvider, Notifier, Pairing};
use crate::utils::error::{Result, SantaError};
use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

const SUBJECT: &str = "Secret Santa";

/// SMTP notifier over implicit TLS (the original tool talks to
/// smtp.gmail.com:465). Credentials are passed through as given.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let from: Mailbox = config
            .sender_email()
            .parse()
            .map_err(|_| SantaError::InvalidAddress(config.sender_email().to_string()))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(config.smtp_host())
            .map_err(|e| SantaError::Delivery {
                address: config.smtp_host().to_string(),
                reason: e.to_string(),
            })?
            .port(config.smtp_port())
            .credentials(Credentials::new(
                config.sender_email().to_string(),
                config.sender_password().to_string(),
            ))
            .build();

        Ok(Self { transport, from })
    }

    fn build_message(&self, pairing: &Pairing) -> Result<Message> {
        let to: Mailbox = pairing
            .address
            .parse()
            .map_err(|_| SantaError::InvalidAddress(pairing.address.clone()))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(SUBJECT)
            .body(render_body(pairing))
            .map_err(|e| SantaError::Delivery {
                address: pairing.address.clone(),
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify(&self, pairing: &Pairing) -> Result<()> {
        let message = self.build_message(pairing)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| SantaError::Delivery {
                address: pairing.address.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!("notified {}", pairing.address);
        Ok(())
    }
}

fn render_body(pairing: &Pairing) -> String {
    format!(
        "Dear {},\n\nYour secret santa recipient is {}. Don't tell anyone.\n\nBest regards,\nyour mysterious benefactor\n",
        pairing.giver, pairing.recipient
    )
}
