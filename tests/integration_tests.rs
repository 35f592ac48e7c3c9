use anyhow::Result;
use async_trait::async_trait;
use secret_santa::core::Notifier;
use secret_santa::{
    CliConfig, ExchangeEngine, ExchangePipeline, LocalFileSource, Pairing, SantaError,
};
use std::collections::BTreeSet;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
struct RecordingNotifier {
    notified: Arc<Mutex<Vec<Pairing>>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, pairing: &Pairing) -> secret_santa::Result<()> {
        let mut notified = self.notified.lock().await;
        notified.push(pairing.clone());
        Ok(())
    }
}

fn test_config(participants_path: &str, debug: bool) -> CliConfig {
    CliConfig {
        participants_path: participants_path.to_string(),
        sender_email: "santa@northpole.org".to_string(),
        sender_password: "hohoho".to_string(),
        debug,
        port: 465,
        smtp_host: "smtp.northpole.org".to_string(),
        verbose: false,
    }
}

fn write_participants(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[tokio::test]
async fn test_end_to_end_draw_from_file() -> Result<()> {
    let file = write_participants(
        "Alice Smith,alice@x.com\nBob Jones,bob@x.com\nCarol White,carol@x.com\nDan Brown,dan@x.com\n",
    )?;
    let path = file.path().to_str().unwrap();

    let notifier = RecordingNotifier::default();
    let source = LocalFileSource::new(path.to_string());
    let pipeline = ExchangePipeline::new(source, notifier.clone(), test_config(path, true));
    let engine = ExchangeEngine::new(pipeline);

    let summary = engine.run().await?;
    assert_eq!(summary, "4 pairings printed");

    let notified = notifier.notified.lock().await;
    assert_eq!(notified.len(), 4);

    let names: BTreeSet<&str> = ["Alice Smith", "Bob Jones", "Carol White", "Dan Brown"]
        .into_iter()
        .collect();
    let givers: BTreeSet<&str> = notified.iter().map(|p| p.giver.as_str()).collect();
    let recipients: BTreeSet<&str> = notified.iter().map(|p| p.recipient.as_str()).collect();

    assert_eq!(givers, names);
    assert_eq!(recipients, names);
    for pairing in notified.iter() {
        assert_ne!(pairing.giver, pairing.recipient);
    }

    Ok(())
}

#[tokio::test]
async fn test_end_to_end_send_mode_summary() -> Result<()> {
    let file = write_participants("Alice,alice@x.com\nBob,bob@x.com\n")?;
    let path = file.path().to_str().unwrap();

    let notifier = RecordingNotifier::default();
    let source = LocalFileSource::new(path.to_string());
    let pipeline = ExchangePipeline::new(source, notifier.clone(), test_config(path, false));
    let engine = ExchangeEngine::new(pipeline);

    let summary = engine.run().await?;
    assert_eq!(summary, "2 emails sent from santa@northpole.org");

    // Two participants can only swap
    let notified = notifier.notified.lock().await;
    assert_eq!(notified.len(), 2);
    let alice = notified.iter().find(|p| p.giver == "Alice").unwrap();
    let bob = notified.iter().find(|p| p.giver == "Bob").unwrap();
    assert_eq!(alice.recipient, "Bob");
    assert_eq!(alice.address, "alice@x.com");
    assert_eq!(bob.recipient, "Alice");

    Ok(())
}

#[tokio::test]
async fn test_malformed_file_aborts_the_run() -> Result<()> {
    let file = write_participants("Alice,alice@x.com\nBob without an address\n")?;
    let path = file.path().to_str().unwrap();

    let source = LocalFileSource::new(path.to_string());
    let pipeline = ExchangePipeline::new(
        source,
        RecordingNotifier::default(),
        test_config(path, true),
    );
    let engine = ExchangeEngine::new(pipeline);

    let result = engine.run().await;
    assert!(matches!(
        result,
        Err(SantaError::MalformedRecord { line: 2, .. })
    ));

    Ok(())
}

#[tokio::test]
async fn test_single_participant_file_fails_fast() -> Result<()> {
    let file = write_participants("Alice,alice@x.com\n")?;
    let path = file.path().to_str().unwrap();

    let source = LocalFileSource::new(path.to_string());
    let pipeline = ExchangePipeline::new(
        source,
        RecordingNotifier::default(),
        test_config(path, true),
    );
    let engine = ExchangeEngine::new(pipeline);

    let result = engine.run().await;
    assert!(matches!(
        result,
        Err(SantaError::InsufficientParticipants { count: 1 })
    ));

    Ok(())
}

#[tokio::test]
async fn test_empty_file_fails_fast() -> Result<()> {
    let file = write_participants("")?;
    let path = file.path().to_str().unwrap();

    let source = LocalFileSource::new(path.to_string());
    let pipeline = ExchangePipeline::new(
        source,
        RecordingNotifier::default(),
        test_config(path, true),
    );
    let engine = ExchangeEngine::new(pipeline);

    let result = engine.run().await;
    assert!(matches!(
        result,
        Err(SantaError::InsufficientParticipants { count: 0 })
    ));

    Ok(())
}

#[tokio::test]
async fn test_missing_file_surfaces_io_error() {
    let source = LocalFileSource::new("./does-not-exist.txt".to_string());
    let pipeline = ExchangePipeline::new(
        source,
        RecordingNotifier::default(),
        test_config("./does-not-exist.txt", true),
    );
    let engine = ExchangeEngine::new(pipeline);

    let result = engine.run().await;
    assert!(matches!(result, Err(SantaError::IoError(_))));
}
