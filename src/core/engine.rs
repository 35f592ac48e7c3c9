use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ExchangeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ExchangeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting secret santa draw...");

        // Extract
        println!("Reading participants...");
        let participants = self.pipeline.extract().await?;
        println!("Loaded {} participants", participants.len());

        // Transform
        println!("Drawing names...");
        let exchange = self.pipeline.transform(participants).await?;
        println!("Drew {} pairings", exchange.len());

        // Load
        println!("Delivering results...");
        let summary = self.pipeline.load(exchange).await?;

        Ok(summary)
    }
}
