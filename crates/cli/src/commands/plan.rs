//! `sitewright plan`: Run the planning pipeline over a description.

use sitewright_config::AppConfig;
use sitewright_pipeline::PipelineCoordinator;

pub async fn run(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let coordinator = PipelineCoordinator::from_config(&config.pipeline);
    let result = coordinator.process_request(text);

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
