pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "secret-santa")]
#[command(
    about = "Create a secret santa pool and send out results. Unless --debug is set, \
             emails are sent automatically so the pairs stay anonymous even from the sender."
)]
pub struct CliConfig {
    #[arg(
        value_name = "participants",
        default_value = "./example.txt",
        help = "Path to a newline delimited list of participants in form \"f_name l_name,email\""
    )]
    pub participants_path: String,

    #[arg(
        default_value = "dummy@email.com",
        help = "Email address from which secret santas will be sent their recipients"
    )]
    pub sender_email: String,

    #[arg(default_value = "securepassword123", help = "Password for sender email")]
    pub sender_password: String,

    #[arg(
        short,
        long,
        help = "Print generated pairs to console instead of sending emails"
    )]
    pub debug: bool,

    #[arg(short, long, default_value_t = 465)]
    pub port: u16,

    #[arg(long, default_value = "smtp.gmail.com")]
    pub smtp_host: String,

    #[arg(short, long, help = "Also print the pairs after sending")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("participants_path", &self.participants_path)?;
        validate_range("port", self.port, 1, 65535)?;

        // Sender settings only matter when emails will actually go out
        if !self.debug {
            validate_non_empty_string("sender_email", &self.sender_email)?;
            validate_non_empty_string("sender_password", &self.sender_password)?;
            validate_non_empty_string("smtp_host", &self.smtp_host)?;
        }

        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn participants_path(&self) -> &str {
        &self.participants_path
    }

    fn sender_email(&self) -> &str {
        &self.sender_email
    }

    fn sender_password(&self) -> &str {
        &self.sender_password
    }

    fn smtp_host(&self) -> &str {
        &self.smtp_host
    }

    fn smtp_port(&self) -> u16 {
        self.port
    }

    fn debug(&self) -> bool {
        self.debug
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}
