use crate::core::{Participant, ParticipantSource};
use crate::utils::error::{Result, SantaError};
use std::fs;

#[derive(Debug, Clone)]
pub struct LocalFileSource {
    path: String,
}

impl LocalFileSource {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl ParticipantSource for LocalFileSource {
    async fn read_participants(&self) -> Result<Vec<Participant>> {
        let content = fs::read_to_string(&self.path)?;
        parse_participants(&content)
    }
}

/// Parse a newline delimited participants list.
///
/// Each non-blank line is split on the FIRST comma into name and address,
/// both trimmed. A line with no comma, or with nothing left on either side
/// after trimming, aborts the run with the 1-based line number.
pub fn parse_participants(content: &str) -> Result<Vec<Participant>> {
    let mut participants = Vec::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((name, address)) = line.split_once(',') else {
            return Err(SantaError::MalformedRecord {
                line: index + 1,
                content: raw_line.to_string(),
            });
        };

        let name = name.trim();
        let address = address.trim();
        if name.is_empty() || address.is_empty() {
            return Err(SantaError::MalformedRecord {
                line: index + 1,
                content: raw_line.to_string(),
            });
        }

        participants.push(Participant::new(name, address));
    }

    Ok(participants)
}
