//! `sitewright tokenize | detokenize | infer`: Tokenizer and simulator commands.

use std::sync::Arc;
use std::time::Duration;

use sitewright_config::AppConfig;
use sitewright_inference::{InferenceSimulator, TokioClock};

pub async fn tokenize(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = sitewright_inference::tokenize(text);
    println!("{}", serde_json::to_string(&tokens)?);
    Ok(())
}

pub async fn detokenize(tokens: &[u32], strict: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = if strict {
        sitewright_inference::try_detokenize(tokens)?
    } else {
        sitewright_inference::detokenize(tokens)
    };
    println!("{text}");
    Ok(())
}

pub async fn infer(text: &str, latency_ms: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let mut simulator = InferenceSimulator::from_config(Arc::new(TokioClock), &config.inference);
    if let Some(ms) = latency_ms {
        simulator = simulator.with_latency(Duration::from_millis(ms));
    }

    let report = simulator.run_text(text).await;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
