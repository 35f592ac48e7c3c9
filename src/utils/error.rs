use thiserror::Error;

#[derive(Error, Debug)]
pub enum SantaError {
    #[error("not enough participants: got {count}, need at least 2")]
    InsufficientParticipants { count: usize },

    #[error("malformed participant record at line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },

    #[error("no valid assignment found after {attempts} shuffle attempts")]
    AssignmentExhausted { attempts: usize },

    #[error("delivery to {address} failed: {reason}")]
    Delivery { address: String, reason: String },

    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SantaError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SantaError::InsufficientParticipants { count } => format!(
                "A secret santa pool needs at least 2 participants, found {}",
                count
            ),
            SantaError::MalformedRecord { line, .. } => {
                format!("Could not parse line {} of the participants file", line)
            }
            SantaError::AssignmentExhausted { .. } => {
                "Could not draw a valid set of pairings".to_string()
            }
            SantaError::Delivery { address, .. } => {
                format!("Sending to {} failed", address)
            }
            SantaError::InvalidAddress(address) => {
                format!("{} is not a usable email address", address)
            }
            SantaError::IoError(e) => format!("Could not read the participants file: {}", e),
            SantaError::MissingConfigError { field } => format!("Missing configuration: {}", field),
            SantaError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SantaError::InsufficientParticipants { .. } => {
                "Add at least two participants to the list"
            }
            SantaError::MalformedRecord { .. } => {
                "Each line must look like: Firstname Lastname,email@example.com"
            }
            SantaError::AssignmentExhausted { .. } => {
                "Re-run the tool; if this repeats, check the participants list"
            }
            SantaError::Delivery { .. } => "Check the SMTP host, port and sender credentials",
            SantaError::InvalidAddress(_) => "Fix the address in the participants file or CLI args",
            SantaError::IoError(_) => "Check that the participants file exists and is readable",
            SantaError::MissingConfigError { .. } | SantaError::InvalidConfigValueError { .. } => {
                "Run with --help to see the expected arguments"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SantaError>;
