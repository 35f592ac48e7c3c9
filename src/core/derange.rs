use crate::domain::model::{Exchange, Pairing, Participant};
use crate::utils::error::{Result, SantaError};
use rand::seq::SliceRandom;
use rand::Rng;

/// Upper bound on re-shuffles. The expected number of shuffles until a
/// derangement appears approaches e (~2.718) as the pool grows, so this is
/// only ever reached when the random source is degenerate.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 1_000;

/// Draw a secret santa assignment for the given pool.
///
/// Every participant ends up exactly once as a giver and exactly once as a
/// recipient, and never as their own recipient. The draw is uniform over all
/// derangements: shuffle, scan for fixed points, re-shuffle from scratch on
/// any hit. Fixed points are detected by position, so participants sharing a
/// name never cause a false rejection.
///
/// An empty pool yields an empty exchange. A pool of one has no valid
/// assignment and fails with [`SantaError::InsufficientParticipants`].
pub fn assign<R: Rng + ?Sized>(participants: &[Participant], rng: &mut R) -> Result<Exchange> {
    match participants.len() {
        0 => return Ok(Exchange::default()),
        1 => return Err(SantaError::InsufficientParticipants { count: 1 }),
        _ => {}
    }

    let recipients = deranged_indices(participants.len(), rng)?;

    let mut exchange = Exchange::with_capacity(participants.len());
    for (giver, &recipient) in recipients.iter().enumerate() {
        exchange.insert(Pairing {
            giver: participants[giver].name.clone(),
            recipient: participants[recipient].name.clone(),
            address: participants[giver].address.clone(),
        });
    }

    Ok(exchange)
}

/// Rejection-sample a fixed-point-free permutation of `0..n`.
fn deranged_indices<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Vec<usize>> {
    let mut permutation: Vec<usize> = (0..n).collect();

    for attempt in 1..=MAX_SHUFFLE_ATTEMPTS {
        permutation.shuffle(rng);

        if !permutation.iter().enumerate().any(|(i, &j)| i == j) {
            tracing::debug!("derangement found after {} shuffle(s)", attempt);
            return Ok(permutation);
        }
    }

    Err(SantaError::AssignmentExhausted {
        attempts: MAX_SHUFFLE_ATTEMPTS,
    })
}
