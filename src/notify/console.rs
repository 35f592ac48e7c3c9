use crate::core::{Notifier, Pairing};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Debug-mode notifier. Prints each pairing instead of emailing it, which
/// breaks the anonymity of the draw on purpose.
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, pairing: &Pairing) -> Result<()> {
        println!("{}", render_line(pairing));
        Ok(())
    }
}

fn render_line(pairing: &Pairing) -> String {
    format!(
        "{} ({}) got {}",
        pairing.giver, pairing.address, pairing.recipient
    )
}
